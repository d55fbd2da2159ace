use actix_web::{web, HttpResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use super::dto::{CourseOut, Deleted, EnrollmentOut, StudentOut};
use crate::auth::subject::Role;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{CurrentAdmin, ValidatedJson};
use crate::repos::courses;
use crate::repos::enrollments::{self, Enrollment};
use crate::repos::principals::{self, Principal};
use crate::services::catalog;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub student_id: i64,
    pub course_id: i64,
}

async fn expand(db: &DatabaseConnection, enrollment: Enrollment) -> Result<EnrollmentOut, AppError> {
    let student = match principals::find_by_id(db, Role::Student, enrollment.student_id).await? {
        Some(Principal::Student(m)) => Some(StudentOut::from(m)),
        _ => None,
    };
    let course = courses::find_with_department(db, enrollment.course_id)
        .await?
        .map(CourseOut::from);
    Ok(EnrollmentOut::new(enrollment, student, course))
}

async fn expand_all(
    db: &DatabaseConnection,
    rows: Vec<Enrollment>,
) -> Result<Vec<EnrollmentOut>, AppError> {
    let mut out = Vec::with_capacity(rows.len());
    for enrollment in rows {
        out.push(expand(db, enrollment).await?);
    }
    Ok(out)
}

async fn enroll(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
    body: ValidatedJson<EnrollRequest>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let enrollment = catalog::enroll(db, body.student_id, body.course_id).await?;
    Ok(HttpResponse::Ok().json(expand(db, enrollment).await?))
}

async fn list_enrollments(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = enrollments::list(db).await?;
    Ok(HttpResponse::Ok().json(expand_all(db, rows).await?))
}

async fn get_enrollment(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let enrollment = enrollments::require(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(expand(db, enrollment).await?))
}

async fn delete_enrollment(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    enrollments::delete(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Deleted::entity("Enrollment")))
}

async fn student_enrollments(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = enrollments::list_for_student(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(expand_all(db, rows).await?))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(enroll))
            .route(web::get().to(list_enrollments)),
    );
    cfg.route("/student/{id}", web::get().to(student_enrollments));
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_enrollment))
            .route(web::delete().to(delete_enrollment)),
    );
}
