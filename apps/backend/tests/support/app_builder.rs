use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use college_backend::config::db::DbKind;
use college_backend::infra::state::build_state;
use college_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use college_backend::routes;
use college_backend::state::app_state::AppState;
use college_backend::state::security_config::SecurityConfig;

/// Fresh in-memory database, migrated, with a random signing secret.
pub async fn sqlite_state() -> AppState {
    build_state(SecurityConfig::for_tests())
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("sqlite state should build")
}

/// The production route table and trace middleware over `state`.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
