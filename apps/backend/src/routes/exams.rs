use actix_web::{web, HttpResponse};

use super::dto::Deleted;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{CurrentAdmin, ValidatedJson};
use crate::repos::exams::{self, ExamInput};
use crate::services::catalog;
use crate::state::app_state::AppState;

async fn create_exam(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ExamInput>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(catalog::create_exam(db, body.into_inner()).await?))
}

async fn list_exams(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(exams::list(db).await?))
}

async fn get_exam(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(exams::require(db, path.into_inner()).await?))
}

async fn update_exam(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ExamInput>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let exam = catalog::update_exam(db, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(exam))
}

async fn delete_exam(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    exams::delete(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Deleted::entity("Exam")))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_exam))
            .route(web::get().to(list_exams)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_exam))
            .route(web::put().to(update_exam))
            .route(web::delete().to(delete_exam)),
    );
}
