pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod students;
