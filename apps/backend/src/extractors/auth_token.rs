use actix_web::http::header;
use actix_web::HttpRequest;

use crate::AppError;

/// Token part of `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively; exactly one non-empty token
/// must follow it.
pub fn bearer_token(authorization: Option<&str>) -> Result<&str, AppError> {
    let value = authorization.ok_or(AppError::UnauthorizedMissingBearer)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AppError::UnauthorizedMissingBearer),
    }
}

/// Raw `Authorization` header value, if present and valid UTF-8.
pub fn authorization_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}
