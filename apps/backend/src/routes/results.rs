use actix_web::{web, HttpResponse};

use super::dto::Deleted;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{CurrentAdmin, ValidatedJson};
use crate::repos::results::{self, ResultInput};
use crate::services::catalog;
use crate::state::app_state::AppState;

async fn create_result(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ResultInput>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(catalog::create_result(db, body.into_inner()).await?))
}

async fn list_results(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(results::list(db).await?))
}

async fn get_result(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(results::require(db, path.into_inner()).await?))
}

async fn update_result(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ResultInput>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let result = catalog::update_result(db, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn delete_result(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    results::delete(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Deleted::entity("Result")))
}

async fn student_results(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(results::list_for_student(db, path.into_inner()).await?))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_result))
            .route(web::get().to(list_results)),
    );
    cfg.route("/student/{id}", web::get().to(student_results));
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_result))
            .route(web::put().to(update_result))
            .route(web::delete().to(delete_result)),
    );
}
