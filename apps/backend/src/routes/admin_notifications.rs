//! Admin console view of notifications: newest first, editable.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::dto::Deleted;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{CurrentAdmin, ValidatedJson};
use crate::repos::notifications::{self, NewNotification};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct NotificationText {
    pub title: String,
    pub message: String,
}

async fn list(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(notifications::list_newest_first(db).await?))
}

async fn create(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
    body: ValidatedJson<NotificationText>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let body = body.into_inner();
    let created = notifications::create(
        db,
        NewNotification {
            title: body.title,
            message: body.message,
            user_type: None,
            user_id: None,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(created))
}

async fn update(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<NotificationText>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let body = body.into_inner();
    let updated =
        notifications::update_text(db, path.into_inner(), body.title, body.message).await?;
    Ok(HttpResponse::Ok().json(updated))
}

async fn delete(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    notifications::delete(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Deleted::entity("Notification")))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/notifications")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    );
    cfg.service(
        web::resource("/notifications/{id}")
            .route(web::put().to(update))
            .route(web::delete().to(delete)),
    );
}
