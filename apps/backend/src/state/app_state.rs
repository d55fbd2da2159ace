use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;

/// Shared per-worker state, handed to handlers through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Connection pool; absent only in unit tests that never touch storage
    db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
        }
    }

    pub fn without_db(security: SecurityConfig) -> Self {
        Self { db: None, security }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
