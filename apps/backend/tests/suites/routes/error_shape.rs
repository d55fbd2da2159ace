use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use serde_json::json;

use crate::support::factory;
use crate::support::{create_test_app, sqlite_state};

#[actix_web::test]
async fn not_found_is_a_problem_document() {
    let app = create_test_app(sqlite_state().await).await;

    let resp = factory::get(&app, "/departments/12345").await;
    let problem = assert_problem(resp, StatusCode::NOT_FOUND, "DEPARTMENT_NOT_FOUND").await;
    assert_eq!(problem.title, "Department Not Found");
    assert_eq!(problem.status, 404);
    assert!(problem.type_.ends_with("/DEPARTMENT_NOT_FOUND"));
}

#[actix_web::test]
async fn malformed_json_is_a_validation_error() {
    let app = create_test_app(sqlite_state().await).await;

    let req = test::TestRequest::post()
        .uri("/auth/student/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem(resp, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert!(problem.detail.starts_with("Invalid JSON"));
}

#[actix_web::test]
async fn wrong_field_types_do_not_echo_input() {
    let app = create_test_app(sqlite_state().await).await;

    let req = test::TestRequest::post()
        .uri("/auth/faculty/login")
        .set_json(json!({"email": 12, "password": "s3cret-value"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem(resp, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert!(!problem.detail.contains("s3cret-value"));
}

#[actix_web::test]
async fn non_numeric_path_id_is_rejected() {
    let app = create_test_app(sqlite_state().await).await;
    let resp = factory::get(&app, "/courses/abc").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
