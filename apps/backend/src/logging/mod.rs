pub mod pii;
pub mod security;
