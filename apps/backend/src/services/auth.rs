//! Signup and login for all three roles.

use std::sync::LazyLock;
use std::time::SystemTime;

use regex::Regex;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::auth::jwt::mint_access_token;
use crate::auth::password::{
    hash_password_off_thread, unmatchable_digest, verify_password_off_thread,
};
use crate::auth::subject::{Role, Subject};
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::principals::{self, NewPrincipal, Principal};
use crate::state::security_config::SecurityConfig;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .unwrap()
});

/// Plaintext signup payload; the password never outlives `signup`.
#[derive(Debug, Clone)]
pub struct Signup {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub password: String,
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            "value is not a valid email address",
        ))
    }
}

/// Hash the password and store a new principal.
///
/// The email lookup and the insert share a transaction; a duplicate that
/// slips past the lookup is still caught by the unique index.
pub async fn signup(
    db: &DatabaseConnection,
    security: &SecurityConfig,
    signup: Signup,
) -> Result<Principal, AppError> {
    validate_email(&signup.email)?;
    let password_hash = hash_password_off_thread(signup.password, security.bcrypt_cost).await?;

    let role = signup.role;
    let new = NewPrincipal {
        role,
        name: signup.name,
        email: signup.email,
        mobile: match role {
            Role::Student => signup.mobile,
            Role::Faculty | Role::Admin => None,
        },
        password_hash,
    };

    let principal = with_txn(db, |txn| {
        Box::pin(async move {
            if principals::find_by_email(txn, role, &new.email)
                .await?
                .is_some()
            {
                return Err(AppError::already_exists(
                    ErrorCode::EmailAlreadyExists,
                    "Email already registered",
                ));
            }
            Ok(principals::insert(txn, new).await?)
        })
    })
    .await?;

    info!(
        role = %role,
        id = principal.id(),
        email = %Redacted(principal.email()),
        "principal created"
    );
    Ok(principal)
}

/// Check the email/password pair and mint a token for the matching record.
///
/// Unknown email and wrong password produce the same error.
pub async fn login(
    db: &DatabaseConnection,
    security: &SecurityConfig,
    role: Role,
    email: &str,
    password: &str,
) -> Result<(Principal, String), AppError> {
    let Some(principal) = principals::find_by_email(db, role, email).await? else {
        // Same bcrypt work as a wrong password, so timing does not reveal the email.
        verify_password_off_thread(password.to_string(), unmatchable_digest(security.bcrypt_cost))
            .await?;
        security::login_failed(role, "unknown_email", email);
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password_off_thread(password.to_string(), principal.password_hash().to_string())
        .await?
    {
        security::login_failed(role, "wrong_password", email);
        return Err(AppError::InvalidCredentials);
    }

    let token = mint_access_token(
        &Subject::new(role, principal.id()),
        SystemTime::now(),
        security,
    )?;
    info!(role = %role, id = principal.id(), "login succeeded");
    Ok((principal, token))
}
