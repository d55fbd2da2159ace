use actix_web::http::StatusCode;
use actix_web::test;
use college_backend::db::require_db;
use college_backend::infra::state::build_state;
use college_backend::state::security_config::SecurityConfig;
use serde_json::Value;

use crate::support::factory;
use crate::support::{create_test_app, sqlite_state};

#[actix_web::test]
async fn reports_database_and_migration_level() {
    let app = create_test_app(sqlite_state().await).await;

    let resp = factory::get(&app, "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert!(body.get("db_error").is_none());
    assert_ne!(body["migrations"], "unknown");
    assert!(body["time"].as_str().is_some());
}

#[actix_web::test]
async fn stays_up_without_a_database() {
    let state = build_state(SecurityConfig::for_tests())
        .build()
        .await
        .expect("state without db");
    let app = create_test_app(state).await;

    let resp = factory::get(&app, "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["db"], "error");
    assert_eq!(body["db_error"], "unavailable");
}

#[actix_web::test]
async fn database_failure_text_stays_in_the_logs() {
    let state = sqlite_state().await;
    require_db(&state)
        .expect("sqlite state has a db")
        .clone()
        .close()
        .await
        .expect("pool closes");
    let app = create_test_app(state).await;

    let resp = factory::get(&app, "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["db"], "error");
    assert_eq!(body["db_error"], "unavailable");
    let raw = body.to_string().to_lowercase();
    for leak in ["pool", "connection", "closed", "sqlx", "query failed"] {
        assert!(!raw.contains(leak), "health body leaks '{leak}': {raw}");
    }
}

#[actix_web::test]
async fn root_greets() {
    let app = create_test_app(sqlite_state().await).await;
    let body: Value = test::read_body_json(factory::get(&app, "/").await).await;
    assert_eq!(body["message"], "Welcome to College Management API");
}
