pub mod auth_token;
pub mod principal;
pub mod validated_json;

pub use auth_token::bearer_token;
pub use principal::{CurrentAdmin, CurrentFaculty, CurrentStudent, CurrentSubject};
pub use validated_json::ValidatedJson;
