use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use serde_json::{json, Value};

use crate::support::factory::{self, get_as, post_as};
use crate::support::{create_test_app, sqlite_state};

#[actix_web::test]
async fn admin_lists_each_role_without_hashes() {
    let app = create_test_app(sqlite_state().await).await;
    let admin = factory::admin(&app).await;
    factory::student(&app).await;
    factory::student(&app).await;
    factory::faculty(&app).await;

    let students: Value =
        test::read_body_json(get_as(&app, &admin.token, "/admin/students").await).await;
    let faculty: Value =
        test::read_body_json(get_as(&app, &admin.token, "/admin/faculty").await).await;

    assert_eq!(students.as_array().map(Vec::len), Some(2));
    assert_eq!(faculty.as_array().map(Vec::len), Some(1));
    assert!(students[0].get("password_hash").is_none());
    assert!(students[0].get("mobile").is_some());
    assert!(faculty[0].get("mobile").is_none());
}

#[actix_web::test]
async fn assignment_reports_repeats_without_failing() {
    let app = create_test_app(sqlite_state().await).await;
    let admin = factory::admin(&app).await;
    let student = factory::student(&app).await;
    let member = factory::faculty(&app).await;
    let body = json!({"student_id": student.id, "faculty_id": member.id});

    let first: Value =
        test::read_body_json(post_as(&app, &admin.token, "/admin/assign-faculty", body.clone()).await)
            .await;
    assert_eq!(first["success"], true);
    assert_eq!(
        first["message"],
        "Faculty 'Faculty' successfully assigned to Student 'Student'"
    );
    assert_eq!(first["student_id"], student.id);
    assert_eq!(first["faculty_id"], member.id);

    let again = post_as(&app, &admin.token, "/admin/assign-faculty", body).await;
    assert_eq!(again.status(), StatusCode::OK);
    let again: Value = test::read_body_json(again).await;
    assert_eq!(
        again,
        json!({
            "success": false,
            "message": "Faculty 'Faculty' is already assigned to Student 'Student'"
        })
    );

    let rows: Value =
        test::read_body_json(get_as(&app, &admin.token, "/admin/student-assignments").await).await;
    assert_eq!(
        rows,
        json!([{
            "assignment_id": first["assignment_id"],
            "student_id": student.id,
            "student_name": "Student",
            "faculty_id": member.id,
            "faculty_name": "Faculty"
        }])
    );
}

#[actix_web::test]
async fn assignment_names_the_missing_party() {
    let app = create_test_app(sqlite_state().await).await;
    let admin = factory::admin(&app).await;
    let student = factory::student(&app).await;

    let resp = post_as(
        &app,
        &admin.token,
        "/admin/assign-faculty",
        json!({"student_id": 77, "faculty_id": 1}),
    )
    .await;
    let problem = assert_problem(resp, StatusCode::NOT_FOUND, "STUDENT_NOT_FOUND").await;
    assert_eq!(problem.detail, "Student with ID 77 not found");

    let resp = post_as(
        &app,
        &admin.token,
        "/admin/assign-faculty",
        json!({"student_id": student.id, "faculty_id": 42}),
    )
    .await;
    let problem = assert_problem(resp, StatusCode::NOT_FOUND, "FACULTY_NOT_FOUND").await;
    assert_eq!(problem.detail, "Faculty with ID 42 not found");
}

#[actix_web::test]
async fn admin_routes_reject_other_roles() {
    let app = create_test_app(sqlite_state().await).await;
    let member = factory::faculty(&app).await;

    for uri in ["/admin/students", "/admin/faculty", "/admin/student-assignments"] {
        let resp = get_as(&app, &member.token, uri).await;
        assert_problem(resp, StatusCode::FORBIDDEN, "WRONG_ROLE").await;
    }
}
