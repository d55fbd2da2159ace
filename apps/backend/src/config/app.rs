//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::auth::password::{MAX_COST, MIN_COST};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Longest accepted token lifetime: one year.
pub const MAX_TOKEN_TTL_MINUTES: u64 = 60 * 24 * 365;

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Server
    pub host: String,
    pub port: u16,

    // CORS allow-list
    pub cors_allowed_origins: Vec<String>,

    // Token signing and password hashing
    pub security: SecurityConfig,
}

impl AppConfig {
    /// Load and validate all configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("BACKEND_PORT") {
            None => 8000,
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
        };

        let jwt_secret = lookup("APP_JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::config("APP_JWT_SECRET must be set"))?;

        let mut security = SecurityConfig::new(jwt_secret.into_bytes());

        if let Some(raw) = lookup("APP_JWT_TTL_MINUTES") {
            let seconds = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|m| (1..=MAX_TOKEN_TTL_MINUTES).contains(m))
                .and_then(|m| m.checked_mul(60))
                .ok_or_else(|| {
                    AppError::config(format!(
                        "APP_JWT_TTL_MINUTES must be between 1 and {MAX_TOKEN_TTL_MINUTES}, got '{raw}'"
                    ))
                })?;
            security = security.with_token_ttl(Duration::from_secs(seconds));
        }

        if let Some(raw) = lookup("APP_BCRYPT_COST") {
            let cost = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|c| (MIN_COST..=MAX_COST).contains(c))
                .ok_or_else(|| {
                    AppError::config(format!(
                        "APP_BCRYPT_COST must be between {MIN_COST} and {MAX_COST}, got '{raw}'"
                    ))
                })?;
            security = security.with_bcrypt_cost(cost);
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            security,
        })
    }
}
