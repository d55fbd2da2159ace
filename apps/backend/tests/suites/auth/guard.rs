use std::time::{Duration, SystemTime};

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use college_backend::auth::jwt::{mint_access_token, mint_access_token_with_ttl};
use college_backend::auth::subject::Subject;
use college_backend::state::security_config::SecurityConfig;
use serde_json::Value;

use crate::common::assert_unauthorized;
use crate::support::factory::{self, bearer, get_as};
use crate::support::{create_test_app, sqlite_state};

#[actix_web::test]
async fn student_token_reaches_own_record_but_not_admin_routes() {
    let app = create_test_app(sqlite_state().await).await;
    let student = factory::student(&app).await;

    let resp = get_as(&app, &student.token, &format!("/students/{}", student.id)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], student.id);
    assert!(body.get("password_hash").is_none());

    let resp = get_as(&app, &student.token, "/admin/students").await;
    assert_problem(resp, StatusCode::FORBIDDEN, "WRONG_ROLE").await;
}

#[actix_web::test]
async fn each_guard_rejects_other_roles_with_403() {
    let app = create_test_app(sqlite_state().await).await;
    let student = factory::student(&app).await;
    let faculty = factory::faculty(&app).await;
    let admin = factory::admin(&app).await;

    let cases = [
        (&faculty.token, "/students/me"),
        (&admin.token, "/students/me"),
        (&student.token, "/faculty/me"),
        (&admin.token, "/faculty/students"),
        (&faculty.token, "/admin/faculty"),
    ];
    for (token, uri) in cases {
        let resp = get_as(&app, token, uri).await;
        assert_problem(resp, StatusCode::FORBIDDEN, "WRONG_ROLE").await;
    }
}

#[actix_web::test]
async fn missing_or_malformed_header_is_401() {
    let app = create_test_app(sqlite_state().await).await;

    let resp = factory::get(&app, "/students/me").await;
    assert_unauthorized(resp, "UNAUTHORIZED_MISSING_BEARER").await;

    let req = test::TestRequest::get()
        .uri("/students/me")
        .insert_header(("Authorization", "Token abc"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_unauthorized(resp, "UNAUTHORIZED_MISSING_BEARER").await;

    let resp = get_as(&app, "not.a.jwt", "/students/me").await;
    assert_unauthorized(resp, "UNAUTHORIZED_INVALID_TOKEN").await;
}

#[actix_web::test]
async fn foreign_secret_and_expired_tokens_are_401() {
    let state = sqlite_state().await;
    let security = state.security.clone();
    let app = create_test_app(state).await;
    let student = factory::student(&app).await;

    let foreign = mint_access_token(
        &Subject::Student(student.id),
        SystemTime::now(),
        &SecurityConfig::for_tests(),
    )
    .unwrap();
    let resp = get_as(&app, &foreign, "/students/me").await;
    assert_unauthorized(resp, "UNAUTHORIZED_INVALID_TOKEN").await;

    let expired = mint_access_token_with_ttl(
        &Subject::Student(student.id).to_string(),
        SystemTime::now() - Duration::from_secs(7200),
        Duration::from_secs(3600),
        &security,
    )
    .unwrap();
    let resp = get_as(&app, &expired, "/students/me").await;
    assert_unauthorized(resp, "UNAUTHORIZED_INVALID_TOKEN").await;
}

#[actix_web::test]
async fn unknown_role_tag_is_401_not_403() {
    let state = sqlite_state().await;
    let security = state.security.clone();
    let app = create_test_app(state).await;

    let token = mint_access_token_with_ttl(
        "staff:1",
        SystemTime::now(),
        Duration::from_secs(600),
        &security,
    )
    .unwrap();
    let resp = get_as(&app, &token, "/students/me").await;
    assert_unauthorized(resp, "UNAUTHORIZED_INVALID_TOKEN").await;
}

#[actix_web::test]
async fn deleted_principal_token_is_401() {
    let app = create_test_app(sqlite_state().await).await;
    let student = factory::student(&app).await;
    let admin = factory::admin(&app).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/students/{}", student.id))
        .insert_header(bearer(&admin.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let removed: Value = test::read_body_json(resp).await;
    assert_eq!(removed["id"], student.id);

    let resp = get_as(&app, &student.token, "/students/me").await;
    assert_unauthorized(resp, "UNAUTHORIZED").await;
}

#[actix_web::test]
async fn protected_greets_any_role() {
    let app = create_test_app(sqlite_state().await).await;
    let faculty = factory::faculty(&app).await;

    let resp = get_as(&app, &faculty.token, "/protected").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        format!("Hello faculty with ID {}", faculty.id)
    );
}
