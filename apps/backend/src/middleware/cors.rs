use actix_cors::Cors;
use actix_web::http::header;

use super::request_trace::TRACE_HEADER;

/// CORS policy for the configured browser origins.
///
/// Entries that are empty, `null` or lack an http(s) scheme are ignored; if
/// none remain the localhost dev origins are used.
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut allowed: Vec<&str> = origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .collect();

    if allowed.is_empty() {
        allowed = vec!["http://localhost:3000", "http://127.0.0.1:3000"];
    }

    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![TRACE_HEADER])
        .supports_credentials()
        .max_age(3600);

    allowed
        .into_iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
