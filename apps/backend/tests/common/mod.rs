#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::WWW_AUTHENTICATE;
use actix_web::http::StatusCode;
use backend_test_support::problem_details::{assert_problem, Problem};

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// 401 problem that also advertises the bearer scheme.
pub async fn assert_unauthorized(resp: ServiceResponse<BoxBody>, code: &str) -> Problem {
    assert_eq!(
        resp.headers()
            .get(WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );
    assert_problem(resp, StatusCode::UNAUTHORIZED, code).await
}
