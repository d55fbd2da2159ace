use actix_web::{web, HttpResponse};

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{CurrentAdmin, ValidatedJson};
use crate::repos::notifications::{self, NewNotification};
use crate::state::app_state::AppState;

async fn list_notifications(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(notifications::list(db).await?))
}

/// Optional `user_type` (default `student`) and `user_id` narrow the audience.
async fn create_notification(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewNotification>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    Ok(HttpResponse::Ok().json(notifications::create(db, body.into_inner()).await?))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_notifications))
            .route(web::post().to(create_notification)),
    );
}
