use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::subject::Subject;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Claims carried by every access token. Nothing else is signed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// `"<role>:<id>"`
    pub sub: String,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Mint an HS256 access token for `subject`, valid for `security.token_ttl`.
pub fn mint_access_token(
    subject: &Subject,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    mint_access_token_with_ttl(&subject.to_string(), now, security.token_ttl, security)
}

/// Lower-level minting with an arbitrary `sub` string and lifetime.
pub fn mint_access_token_with_ttl(
    sub: &str,
    now: SystemTime,
    ttl: Duration,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("system clock is before the unix epoch"))?
        .as_secs();
    let exp = i64::try_from(iat)
        .ok()
        .zip(i64::try_from(ttl.as_secs()).ok())
        .and_then(|(iat, ttl)| iat.checked_add(ttl))
        .ok_or_else(|| AppError::internal("token expiry does not fit in i64 seconds"))?;

    let claims = Claims {
        sub: sub.to_string(),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Check signature and expiry; `None` on any failure.
///
/// Expiry has zero leeway. Only HS256 is accepted, whatever the header claims.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Option<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp", "sub"]);

    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    ) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            let reason = match e.kind() {
                ErrorKind::ExpiredSignature => "token_expired",
                ErrorKind::InvalidSignature => "invalid_signature",
                ErrorKind::InvalidAlgorithm => "invalid_algorithm",
                _ => "invalid_token",
            };
            debug!(reason, "access token rejected");
            None
        }
    }
}
