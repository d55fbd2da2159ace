//! Per-role request guard: bearer token -> verified claims -> `Subject` ->
//! role check -> stored principal.

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::auth::jwt::verify_access_token;
use crate::auth::subject::{Role, Subject};
use crate::error::AppError;
use crate::extractors::auth_token::bearer_token;
use crate::logging::security;
use crate::repos::principals::{self, Principal};
use crate::state::security_config::SecurityConfig;

/// Verify the `Authorization` header value and decode its subject.
///
/// No store access; any role is accepted.
pub fn decode_subject(
    security: &SecurityConfig,
    authorization: Option<&str>,
) -> Result<Subject, AppError> {
    let token = bearer_token(authorization)?;
    let claims =
        verify_access_token(token, security).ok_or(AppError::UnauthorizedInvalidToken)?;

    claims.sub.parse::<Subject>().map_err(|e| {
        debug!(error = %e, "token subject rejected");
        AppError::UnauthorizedInvalidToken
    })
}

/// Full guard for `role`: the token must be valid, carry that role, and name
/// a principal that still exists.
pub async fn authorize<C: ConnectionTrait>(
    conn: &C,
    security: &SecurityConfig,
    authorization: Option<&str>,
    role: Role,
) -> Result<Principal, AppError> {
    let subject = decode_subject(security, authorization)?;

    if subject.role() != role {
        security::wrong_role(role, subject.role(), subject.id());
        return Err(AppError::WrongRole);
    }

    match principals::find_by_id(conn, role, subject.id()).await? {
        Some(principal) => Ok(principal),
        None => {
            debug!(role = %role, id = subject.id(), "token subject no longer exists");
            Err(AppError::Unauthorized)
        }
    }
}
