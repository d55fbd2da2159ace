use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Assembles an `AppState` for `main` and for tests.
pub struct StateBuilder {
    security: SecurityConfig,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new(security: SecurityConfig) -> Self {
        Self {
            security,
            db_kind: None,
        }
    }

    /// Connect and migrate a database of this kind during `build`.
    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_kind {
            Some(kind) => {
                let conn = bootstrap_db(kind).await?;
                Ok(AppState::new(conn, self.security))
            }
            None => Ok(AppState::without_db(self.security)),
        }
    }
}

pub fn build_state(security: SecurityConfig) -> StateBuilder {
    StateBuilder::new(security)
}
