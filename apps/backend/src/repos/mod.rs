//! Repository functions over SeaORM, generic over `ConnectionTrait` so they run
//! against the pool or inside a transaction.

pub mod assignments;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod exams;
pub mod notifications;
pub mod principals;
pub mod results;
