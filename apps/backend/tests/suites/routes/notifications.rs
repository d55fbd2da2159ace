use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use serde_json::{json, Value};

use crate::support::factory::{self, bearer, get_as, post_as};
use crate::support::{create_test_app, sqlite_state};

#[actix_web::test]
async fn public_feed_defaults_audience_to_students() {
    let app = create_test_app(sqlite_state().await).await;
    let admin = factory::admin(&app).await;

    let created: Value = test::read_body_json(
        post_as(
            &app,
            &admin.token,
            "/notifications",
            json!({"title": "Holiday", "message": "Campus closed Monday"}),
        )
        .await,
    )
    .await;
    assert_eq!(created["user_type"], "student");
    assert!(created["user_id"].is_null());

    let feed: Value = test::read_body_json(factory::get(&app, "/notifications").await).await;
    assert_eq!(feed.as_array().map(Vec::len), Some(1));
    assert_eq!(feed[0]["title"], "Holiday");
}

#[actix_web::test]
async fn console_lists_newest_first_and_edits() {
    let app = create_test_app(sqlite_state().await).await;
    let admin = factory::admin(&app).await;

    for title in ["first", "second", "third"] {
        let resp = post_as(
            &app,
            &admin.token,
            "/admin-not/notifications",
            json!({"title": title, "message": "body"}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let listed: Value =
        test::read_body_json(get_as(&app, &admin.token, "/admin-not/notifications").await).await;
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["third", "second", "first"]);

    let id = &listed[2]["id"];
    let req = test::TestRequest::put()
        .uri(&format!("/admin-not/notifications/{id}"))
        .insert_header(bearer(&admin.token))
        .set_json(json!({"title": "first (edited)", "message": "new body"}))
        .to_request();
    let updated: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(updated["title"], "first (edited)");
    assert_eq!(updated["created_at"], listed[2]["created_at"]);

    let req = test::TestRequest::delete()
        .uri(&format!("/admin-not/notifications/{id}"))
        .insert_header(bearer(&admin.token))
        .to_request();
    let deleted: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(deleted, json!({"detail": "Notification deleted successfully"}));

    let req = test::TestRequest::delete()
        .uri(&format!("/admin-not/notifications/{id}"))
        .insert_header(bearer(&admin.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::NOT_FOUND, "NOTIFICATION_NOT_FOUND").await;
}

#[actix_web::test]
async fn console_is_admin_only() {
    let app = create_test_app(sqlite_state().await).await;
    let student = factory::student(&app).await;

    let resp = get_as(&app, &student.token, "/admin-not/notifications").await;
    assert_problem(resp, StatusCode::FORBIDDEN, "WRONG_ROLE").await;
}
