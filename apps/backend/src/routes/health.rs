use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{error, warn};

use crate::db::require_db;
use crate::state::app_state::AppState;

/// Client-facing text for any database failure; the cause is only logged.
const DB_UNAVAILABLE: &str = "unavailable";

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<&'static str>,
    migrations: String,
    time: String,
}

/// Liveness plus a database round trip. Always 200; problems show in the body.
async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db, db_error, migrations) = match require_db(&app_state) {
        Ok(conn) => {
            let probe = conn
                .query_one(Statement::from_string(
                    conn.get_database_backend(),
                    "SELECT 1 AS health_check",
                ))
                .await;
            match probe {
                Ok(_) => {
                    let migrations = match get_latest_migration_version(conn).await {
                        Ok(Some(version)) => version,
                        Ok(None) => "no_migrations".to_string(),
                        Err(_) => "unknown".to_string(),
                    };
                    ("ok", None, migrations)
                }
                Err(e) => {
                    error!(error = %e, "health probe query failed");
                    ("error", Some(DB_UNAVAILABLE), "unknown".to_string())
                }
            }
        }
        Err(e) => {
            warn!(error = %e, "health check without a database");
            ("error", Some(DB_UNAVAILABLE), "unknown".to_string())
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        db_error,
        migrations,
        time,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
