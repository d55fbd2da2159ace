use std::time::SystemTime;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use college_backend::auth::jwt::verify_access_token;
use college_backend::auth::subject::Subject;
use serde_json::{json, Value};

use crate::common::assert_unauthorized;
use crate::support::factory::{self, PASSWORD};
use crate::support::{create_test_app, sqlite_state};

#[actix_web::test]
async fn signup_then_login_returns_bearer_token() {
    let state = sqlite_state().await;
    let security = state.security.clone();
    let app = create_test_app(state).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!({
                "name": "A",
                "email": "a@x.com",
                "mobile": "111",
                "password": "p1"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);
    let created: Value = test::read_body_json(created).await;
    assert_eq!(
        created,
        json!({"id": 1, "name": "A", "email": "a@x.com", "mobile": "111"})
    );

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/student/login")
            .set_json(json!({"email": "a@x.com", "password": "p1"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");

    let claims = verify_access_token(body["access_token"].as_str().unwrap(), &security)
        .expect("issued token verifies");
    assert_eq!(claims.sub.parse::<Subject>().unwrap(), Subject::Student(1));
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    assert!(claims.exp > now);
}

#[actix_web::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let app = create_test_app(sqlite_state().await).await;
    let student = factory::student(&app).await;

    for body in [
        json!({"email": student.email, "password": "not-it"}),
        json!({"email": "nobody@college.test", "password": PASSWORD}),
    ] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/student/login")
                .set_json(body)
                .to_request(),
        )
        .await;
        let problem = assert_unauthorized(resp, "INVALID_CREDENTIALS").await;
        assert_eq!(problem.detail, "Invalid credentials");
    }
}

#[actix_web::test]
async fn login_is_scoped_to_the_role_table() {
    let app = create_test_app(sqlite_state().await).await;
    let student = factory::student(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/faculty/login")
            .set_json(json!({"email": student.email, "password": PASSWORD}))
            .to_request(),
    )
    .await;
    assert_unauthorized(resp, "INVALID_CREDENTIALS").await;
}

#[actix_web::test]
async fn admin_login_echoes_identity() {
    let app = create_test_app(sqlite_state().await).await;
    let admin = factory::admin(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/login")
            .set_json(json!({"email": admin.email, "password": PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], admin.id);
    assert_eq!(body["name"], "Admin");
    assert_eq!(body["email"], admin.email.as_str());
    assert_eq!(body["token_type"], "bearer");
    assert!(body["access_token"].is_string());
}

#[actix_web::test]
async fn duplicate_email_is_rejected_per_role() {
    let app = create_test_app(sqlite_state().await).await;
    let faculty = factory::faculty(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/faculty")
            .set_json(json!({"name": "Dup", "email": faculty.email, "password": "x"}))
            .to_request(),
    )
    .await;
    let problem = assert_problem(resp, StatusCode::BAD_REQUEST, "EMAIL_ALREADY_EXISTS").await;
    assert_eq!(problem.detail, "Email already registered");

    // Same address is free in another role's table.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!({"name": "S", "email": faculty.email, "password": "x"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn duplicate_mobile_is_rejected() {
    let app = create_test_app(sqlite_state().await).await;
    let signup = |email: &str| {
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!({"name": "M", "email": email, "mobile": "999", "password": "x"}))
            .to_request()
    };

    let first = test::call_service(&app, signup("m1@college.test")).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = test::call_service(&app, signup("m2@college.test")).await;
    assert_problem(second, StatusCode::BAD_REQUEST, "MOBILE_ALREADY_EXISTS").await;
}

#[actix_web::test]
async fn malformed_email_and_body_are_validation_errors() {
    let app = create_test_app(sqlite_state().await).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!({"name": "A", "email": "not-an-email", "password": "x"}))
            .to_request(),
    )
    .await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "INVALID_EMAIL").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/student/login")
            .set_json(json!({"email": "a@x.com"}))
            .to_request(),
    )
    .await;
    let problem = assert_problem(resp, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert_eq!(problem.detail, "Missing required field 'password'");
}
