use std::env;

use crate::error::AppError;

/// Which database a connection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// Postgres, configured from the environment
    Postgres,
    /// Private in-memory SQLite database (tests)
    SqliteMemory,
}

/// Connection string for `kind`.
///
/// Postgres uses `DATABASE_URL` verbatim when set; otherwise the URL is
/// assembled from `POSTGRES_HOST`, `POSTGRES_PORT`, `POSTGRES_DB`,
/// `POSTGRES_USER` and `POSTGRES_PASSWORD`.
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::Postgres => {
            if let Ok(url) = env::var("DATABASE_URL") {
                if !url.trim().is_empty() {
                    return Ok(url);
                }
            }
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("POSTGRES_DB")?;
            let username = must_var("POSTGRES_USER")?;
            let password = must_var("POSTGRES_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
