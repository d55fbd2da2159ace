use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::subject::Role;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::principals::Principal;
use crate::services::auth::login;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

impl TokenResponse {
    fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

/// Admin login also echoes who logged in.
#[derive(Debug, Serialize)]
pub struct AdminTokenResponse {
    #[serde(flatten)]
    pub token: TokenResponse,
    pub id: i64,
    pub name: String,
    pub email: String,
}

async fn issue(
    app_state: &AppState,
    role: Role,
    body: LoginRequest,
) -> Result<(Principal, TokenResponse), AppError> {
    let db = require_db(app_state)?;
    let (principal, token) =
        login(db, &app_state.security, role, &body.email, &body.password).await?;
    Ok((principal, TokenResponse::bearer(token)))
}

async fn student_login(
    app_state: web::Data<AppState>,
    body: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let (_, token) = issue(&app_state, Role::Student, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(token))
}

async fn faculty_login(
    app_state: web::Data<AppState>,
    body: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let (_, token) = issue(&app_state, Role::Faculty, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(token))
}

pub(super) async fn admin_login(
    app_state: web::Data<AppState>,
    body: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let (admin, token) = issue(&app_state, Role::Admin, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(AdminTokenResponse {
        token,
        id: admin.id(),
        name: admin.name().to_string(),
        email: admin.email().to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/student/login", web::post().to(student_login))
        .route("/faculty/login", web::post().to(faculty_login));
}
