use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use serde_json::{json, Value};

use crate::support::factory::{self, bearer, get_as, post_as};
use crate::support::{create_test_app, sqlite_state};

#[actix_web::test]
async fn me_and_self_lookup_return_public_fields() {
    let app = create_test_app(sqlite_state().await).await;
    let student = factory::student(&app).await;

    let me: Value = test::read_body_json(get_as(&app, &student.token, "/students/me").await).await;
    let by_id: Value = test::read_body_json(
        get_as(&app, &student.token, &format!("/students/{}", student.id)).await,
    )
    .await;

    assert_eq!(me, by_id);
    assert_eq!(me["email"], student.email.as_str());
    assert!(me.get("password_hash").is_none());
}

#[actix_web::test]
async fn other_students_record_is_forbidden() {
    let app = create_test_app(sqlite_state().await).await;
    let alice = factory::student(&app).await;
    let bob = factory::student(&app).await;

    let resp = get_as(&app, &alice.token, &format!("/students/{}", bob.id)).await;
    assert_problem(resp, StatusCode::FORBIDDEN, "FORBIDDEN").await;

    let resp = get_as(&app, &alice.token, &format!("/students/{}/courses", bob.id)).await;
    assert_problem(resp, StatusCode::FORBIDDEN, "FORBIDDEN").await;
}

#[actix_web::test]
async fn update_changes_name_and_email_only() {
    let app = create_test_app(sqlite_state().await).await;
    let student = factory::student(&app).await;

    let req = test::TestRequest::put()
        .uri(&format!("/students/{}", student.id))
        .insert_header(bearer(&student.token))
        .set_json(json!({"name": "Renamed", "email": "renamed@college.test", "password": "ignored"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["email"], "renamed@college.test");

    // Password is untouched, so the old one still logs in with the new email.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/student/login")
            .set_json(json!({"email": "renamed@college.test", "password": factory::PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn listing_and_deleting_require_admin() {
    let app = create_test_app(sqlite_state().await).await;
    let student = factory::student(&app).await;
    let admin = factory::admin(&app).await;

    let resp = get_as(&app, &student.token, "/students").await;
    assert_problem(resp, StatusCode::FORBIDDEN, "WRONG_ROLE").await;

    let list: Value = test::read_body_json(get_as(&app, &admin.token, "/students").await).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::delete()
        .uri("/students/999")
        .insert_header(bearer(&admin.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::NOT_FOUND, "STUDENT_NOT_FOUND").await;
}

#[actix_web::test]
async fn enrolled_courses_include_department() {
    let app = create_test_app(sqlite_state().await).await;
    let student = factory::student(&app).await;
    let admin = factory::admin(&app).await;

    let dept: Value = test::read_body_json(
        post_as(&app, &admin.token, "/departments", json!({"name": "Physics"})).await,
    )
    .await;
    let course: Value = test::read_body_json(
        post_as(
            &app,
            &admin.token,
            "/courses",
            json!({"name": "Mechanics", "department_id": dept["id"]}),
        )
        .await,
    )
    .await;
    let resp = post_as(
        &app,
        &admin.token,
        "/enrollments",
        json!({"student_id": student.id, "course_id": course["id"]}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let courses: Value = test::read_body_json(
        get_as(&app, &student.token, &format!("/students/{}/courses", student.id)).await,
    )
    .await;
    assert_eq!(
        courses,
        json!([{
            "id": course["id"],
            "name": "Mechanics",
            "department_id": dept["id"],
            "department": {"id": dept["id"], "name": "Physics"}
        }])
    );
}
