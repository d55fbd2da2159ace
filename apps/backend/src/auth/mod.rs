//! Credential hashing, access tokens and the per-role request guard.

pub mod guard;
pub mod jwt;
pub mod password;
pub mod subject;

pub use guard::{authorize, decode_subject};
pub use jwt::{mint_access_token, verify_access_token, Claims};
pub use subject::{Role, Subject};
