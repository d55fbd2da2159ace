mod admin;
mod catalog;
mod error_shape;
mod health;
mod notifications;
mod students;
