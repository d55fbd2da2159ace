use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use serde_json::{json, Value};

use crate::support::factory::{self, bearer, post_as, Account};
use crate::support::{create_test_app, sqlite_state};

async fn put_as<S>(app: &S, token: &str, uri: &str, body: Value) -> Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::put()
        .uri(uri)
        .insert_header(bearer(token))
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "PUT {uri}");
    test::read_body_json(resp).await
}

async fn delete_as<S>(app: &S, admin: &Account, uri: &str) -> Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::delete()
        .uri(uri)
        .insert_header(bearer(&admin.token))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "DELETE {uri}");
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn department_names_are_unique() {
    let app = create_test_app(sqlite_state().await).await;
    let admin = factory::admin(&app).await;

    let resp = post_as(&app, &admin.token, "/departments", json!({"name": "History"})).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = post_as(&app, &admin.token, "/departments", json!({"name": "History"})).await;
    let problem =
        assert_problem(resp, StatusCode::BAD_REQUEST, "DEPARTMENT_ALREADY_EXISTS").await;
    assert_eq!(problem.detail, "Department already exists");
}

#[actix_web::test]
async fn department_crud_round() {
    let app = create_test_app(sqlite_state().await).await;
    let admin = factory::admin(&app).await;

    let dept: Value = test::read_body_json(
        post_as(&app, &admin.token, "/departments", json!({"name": "Art"})).await,
    )
    .await;
    let uri = format!("/departments/{}", dept["id"]);

    let renamed = put_as(&app, &admin.token, &uri, json!({"name": "Fine Art"})).await;
    assert_eq!(renamed["name"], "Fine Art");

    let listed: Value = test::read_body_json(factory::get(&app, "/departments").await).await;
    assert_eq!(listed, json!([{"id": dept["id"], "name": "Fine Art"}]));

    let deleted = delete_as(&app, &admin, &uri).await;
    assert_eq!(deleted, json!({"detail": "Department deleted successfully"}));

    let resp = factory::get(&app, &uri).await;
    assert_problem(resp, StatusCode::NOT_FOUND, "DEPARTMENT_NOT_FOUND").await;
}

#[actix_web::test]
async fn course_requires_existing_department() {
    let app = create_test_app(sqlite_state().await).await;
    let admin = factory::admin(&app).await;

    let resp = post_as(
        &app,
        &admin.token,
        "/courses",
        json!({"name": "Orphan", "department_id": 99}),
    )
    .await;
    assert_problem(resp, StatusCode::NOT_FOUND, "DEPARTMENT_NOT_FOUND").await;

    let resp = factory::get(&app, "/courses/99").await;
    let problem = assert_problem(resp, StatusCode::NOT_FOUND, "COURSE_NOT_FOUND").await;
    assert_eq!(problem.detail, "Course not found");
}

#[actix_web::test]
async fn writes_need_an_admin_token() {
    let app = create_test_app(sqlite_state().await).await;
    let student = factory::student(&app).await;

    let resp = post_as(&app, &student.token, "/departments", json!({"name": "X"})).await;
    assert_problem(resp, StatusCode::FORBIDDEN, "WRONG_ROLE").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/courses")
            .set_json(json!({"name": "X", "department_id": 1}))
            .to_request(),
    )
    .await;
    crate::common::assert_unauthorized(resp, "UNAUTHORIZED_MISSING_BEARER").await;
}

#[actix_web::test]
async fn enrollment_flow_nests_and_rejects_duplicates() {
    let app = create_test_app(sqlite_state().await).await;
    let admin = factory::admin(&app).await;
    let student = factory::student(&app).await;

    let dept: Value = test::read_body_json(
        post_as(&app, &admin.token, "/departments", json!({"name": "Biology"})).await,
    )
    .await;
    let course: Value = test::read_body_json(
        post_as(
            &app,
            &admin.token,
            "/courses",
            json!({"name": "Genetics", "department_id": dept["id"]}),
        )
        .await,
    )
    .await;
    let body = json!({"student_id": student.id, "course_id": course["id"]});

    let enrollment: Value =
        test::read_body_json(post_as(&app, &admin.token, "/enrollments", body.clone()).await).await;
    assert_eq!(enrollment["student"]["id"], student.id);
    assert_eq!(enrollment["course"]["name"], "Genetics");
    assert_eq!(enrollment["course"]["department"]["name"], "Biology");

    let resp = post_as(&app, &admin.token, "/enrollments", body).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "ALREADY_ENROLLED").await;

    let by_student: Value = test::read_body_json(
        factory::get(&app, &format!("/enrollments/student/{}", student.id)).await,
    )
    .await;
    assert_eq!(by_student.as_array().map(Vec::len), Some(1));

    let resp = post_as(
        &app,
        &admin.token,
        "/enrollments",
        json!({"student_id": 555, "course_id": course["id"]}),
    )
    .await;
    assert_problem(resp, StatusCode::NOT_FOUND, "STUDENT_NOT_FOUND").await;

    let uri = format!("/enrollments/{}", enrollment["id"]);
    let deleted = delete_as(&app, &admin, &uri).await;
    assert_eq!(deleted, json!({"detail": "Enrollment deleted successfully"}));
    let resp = factory::get(&app, &uri).await;
    assert_problem(resp, StatusCode::NOT_FOUND, "ENROLLMENT_NOT_FOUND").await;
}

#[actix_web::test]
async fn exams_and_results_track_their_parents() {
    let app = create_test_app(sqlite_state().await).await;
    let admin = factory::admin(&app).await;
    let student = factory::student(&app).await;

    let dept: Value = test::read_body_json(
        post_as(&app, &admin.token, "/departments", json!({"name": "Chemistry"})).await,
    )
    .await;
    let course: Value = test::read_body_json(
        post_as(
            &app,
            &admin.token,
            "/courses",
            json!({"name": "Organic", "department_id": dept["id"]}),
        )
        .await,
    )
    .await;

    let resp = post_as(
        &app,
        &admin.token,
        "/exams",
        json!({"course_id": 404, "name": "Final", "date": "2025-06-01T09:00:00Z"}),
    )
    .await;
    assert_problem(resp, StatusCode::NOT_FOUND, "COURSE_NOT_FOUND").await;

    let exam: Value = test::read_body_json(
        post_as(
            &app,
            &admin.token,
            "/exams",
            json!({"course_id": course["id"], "name": "Final", "date": "2025-06-01T09:00:00Z"}),
        )
        .await,
    )
    .await;
    assert_eq!(exam["date"], "2025-06-01T09:00:00Z");

    let resp = post_as(
        &app,
        &admin.token,
        "/results",
        json!({"exam_id": 404, "student_id": student.id, "marks_obtained": 50}),
    )
    .await;
    assert_problem(resp, StatusCode::NOT_FOUND, "EXAM_NOT_FOUND").await;

    let result: Value = test::read_body_json(
        post_as(
            &app,
            &admin.token,
            "/results",
            json!({"exam_id": exam["id"], "student_id": student.id, "marks_obtained": 71}),
        )
        .await,
    )
    .await;
    let updated = put_as(
        &app,
        &admin.token,
        &format!("/results/{}", result["id"]),
        json!({"exam_id": exam["id"], "student_id": student.id, "marks_obtained": 75}),
    )
    .await;
    assert_eq!(updated["marks_obtained"], 75);

    let mine: Value = test::read_body_json(
        factory::get(&app, &format!("/results/student/{}", student.id)).await,
    )
    .await;
    assert_eq!(mine.as_array().map(Vec::len), Some(1));

    // Removing the course cascades to its exams and their results.
    let deleted = delete_as(&app, &admin, &format!("/courses/{}", course["id"])).await;
    assert_eq!(deleted, json!({"detail": "Course deleted successfully"}));
    let resp = factory::get(&app, &format!("/exams/{}", exam["id"])).await;
    assert_problem(resp, StatusCode::NOT_FOUND, "EXAM_NOT_FOUND").await;
}
