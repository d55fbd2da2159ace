use actix_web::{web, App, HttpServer};
use college_backend::config::app::AppConfig;
use college_backend::config::db::DbKind;
use college_backend::infra::state::build_state;
use college_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use college_backend::routes;
use college_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state(config.security.clone())
        .with_db(DbKind::Postgres)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            eprintln!("startup failed: {e}");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "starting college backend");

    let data = web::Data::new(app_state);
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
