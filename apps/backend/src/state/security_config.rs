use std::time::Duration;

use crate::auth::password::MIN_COST;

/// Default lifetime of an access token.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Token signing (always HS256) and password hashing settings, fixed for the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// HMAC secret used to sign and verify access tokens
    pub jwt_secret: Vec<u8>,
    /// Lifetime stamped into `exp` at issue time
    pub token_ttl: Duration,
    /// bcrypt work factor for new digests
    pub bcrypt_cost: u32,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Random per-instance secret and the cheapest bcrypt cost. For tests.
    pub fn for_tests() -> Self {
        Self::new(uuid::Uuid::new_v4().as_bytes().to_vec()).with_bcrypt_cost(MIN_COST)
    }
}
