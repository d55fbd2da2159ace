use actix_web::{web, HttpResponse};
use sea_orm::DatabaseConnection;

use super::dto::{CourseOut, Deleted};
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::extractors::{CurrentAdmin, ValidatedJson};
use crate::repos::courses::{self, CourseInput};
use crate::services::catalog;
use crate::state::app_state::AppState;

/// Course with its department, or 404.
pub(super) async fn load_course(db: &DatabaseConnection, id: i64) -> Result<CourseOut, AppError> {
    courses::find_with_department(db, id)
        .await?
        .map(CourseOut::from)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Course, "Course not found").into())
}

async fn create_course(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CourseInput>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let course = catalog::create_course(db, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(load_course(db, course.id).await?))
}

async fn list_courses(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows: Vec<CourseOut> = courses::list_with_department(db)
        .await?
        .into_iter()
        .map(CourseOut::from)
        .collect();
    Ok(HttpResponse::Ok().json(rows))
}

async fn get_course(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(load_course(db, path.into_inner()).await?))
}

async fn update_course(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CourseInput>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let course = catalog::update_course(db, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(load_course(db, course.id).await?))
}

async fn delete_course(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    courses::delete(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Deleted::entity("Course")))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_course))
            .route(web::get().to(list_courses)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_course))
            .route(web::put().to(update_course))
            .route(web::delete().to(delete_course)),
    );
}
