use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

fn connect_options(kind: DbKind, url: String) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    match kind {
        // Every pooled connection to `sqlite::memory:` is a separate database.
        DbKind::SqliteMemory => {
            opt.min_connections(1).max_connections(1);
        }
        DbKind::Postgres => {
            opt.min_connections(2).max_connections(10);
        }
    }
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    opt
}

/// Open a pool for `kind`. Does not touch the schema.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;
    let conn = Database::connect(connect_options(kind, url)).await?;
    info!(kind = ?kind, "database pool ready");
    Ok(conn)
}

/// Open a pool and bring the schema up to date.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
