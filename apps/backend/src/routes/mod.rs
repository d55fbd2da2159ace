use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::extractors::CurrentSubject;

pub mod admin;
pub mod admin_notifications;
pub mod auth;
pub mod courses;
pub mod departments;
pub mod dto;
pub mod enrollments;
pub mod exams;
pub mod faculty;
pub mod health;
pub mod notifications;
pub mod results;
pub mod students;

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Welcome to College Management API" }))
}

async fn protected(CurrentSubject(subject): CurrentSubject) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": format!("Hello {} with ID {}", subject.role(), subject.id())
    }))
}

/// Path ids on self-service routes must name the caller.
pub(crate) fn ensure_self(caller_id: i64, path_id: i64) -> Result<(), AppError> {
    if caller_id == path_id {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Every route of the API. `main` and the integration tests share this.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/protected", web::get().to(protected))
        .configure(health::configure_routes);

    cfg.service(web::scope("/auth").configure(auth::configure_routes));
    cfg.service(web::scope("/students").configure(students::configure_routes));
    cfg.service(web::scope("/faculty").configure(faculty::configure_routes));
    // Registered ahead of `/admin` so the longer prefix is tried first.
    cfg.service(web::scope("/admin-not").configure(admin_notifications::configure_routes));
    cfg.service(web::scope("/admin").configure(admin::configure_routes));
    cfg.service(web::scope("/departments").configure(departments::configure_routes));
    cfg.service(web::scope("/courses").configure(courses::configure_routes));
    cfg.service(web::scope("/enrollments").configure(enrollments::configure_routes));
    cfg.service(web::scope("/exams").configure(exams::configure_routes));
    cfg.service(web::scope("/results").configure(results::configure_routes));
    cfg.service(web::scope("/notifications").configure(notifications::configure_routes));
}
