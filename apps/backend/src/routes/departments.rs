use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::dto::Deleted;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{CurrentAdmin, ValidatedJson};
use crate::repos::departments;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct DepartmentInput {
    pub name: String,
}

async fn create_department(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
    body: ValidatedJson<DepartmentInput>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let department = departments::create(db, body.into_inner().name).await?;
    Ok(HttpResponse::Ok().json(department))
}

async fn list_departments(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(departments::list(db).await?))
}

async fn get_department(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(departments::require(db, path.into_inner()).await?))
}

async fn update_department(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<DepartmentInput>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let department = departments::rename(db, path.into_inner(), body.into_inner().name).await?;
    Ok(HttpResponse::Ok().json(department))
}

async fn delete_department(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    departments::delete(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Deleted::entity("Department")))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_department))
            .route(web::get().to(list_departments)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_department))
            .route(web::put().to(update_department))
            .route(web::delete().to(delete_department)),
    );
}
