//! Role-scoped extractors. Each one runs the full guard for its role and
//! hands the stored record to the handler.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::guard::{authorize, decode_subject};
use crate::auth::subject::{Role, Subject};
use crate::db::require_db;
use crate::entities::{admins, faculty, students};
use crate::error::AppError;
use crate::extractors::auth_token::authorization_header;
use crate::repos::principals::Principal;
use crate::state::app_state::AppState;

type GuardFuture<T> = std::pin::Pin<Box<dyn std::future::Future<Output = Result<T, AppError>>>>;

fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::internal("AppState not available"))
}

async fn resolve(req: HttpRequest, role: Role) -> Result<Principal, AppError> {
    let state = app_state(&req)?;
    let db = require_db(&state)?;
    authorize(db, &state.security, authorization_header(&req), role).await
}

fn mismatched(principal: &Principal) -> AppError {
    AppError::internal(format!(
        "guard resolved a {} record for another role",
        principal.role()
    ))
}

/// Authenticated student.
#[derive(Debug, Clone)]
pub struct CurrentStudent(pub students::Model);

impl FromRequest for CurrentStudent {
    type Error = AppError;
    type Future = GuardFuture<Self>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            match resolve(req, Role::Student).await? {
                Principal::Student(model) => Ok(CurrentStudent(model)),
                other => Err(mismatched(&other)),
            }
        })
    }
}

/// Authenticated faculty member.
#[derive(Debug, Clone)]
pub struct CurrentFaculty(pub faculty::Model);

impl FromRequest for CurrentFaculty {
    type Error = AppError;
    type Future = GuardFuture<Self>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            match resolve(req, Role::Faculty).await? {
                Principal::Faculty(model) => Ok(CurrentFaculty(model)),
                other => Err(mismatched(&other)),
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub admins::Model);

impl FromRequest for CurrentAdmin {
    type Error = AppError;
    type Future = GuardFuture<Self>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            match resolve(req, Role::Admin).await? {
                Principal::Admin(model) => Ok(CurrentAdmin(model)),
                other => Err(mismatched(&other)),
            }
        })
    }
}

/// Any verified token, no store lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentSubject(pub Subject);

impl FromRequest for CurrentSubject {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(app_state(req).and_then(|state| {
            decode_subject(&state.security, authorization_header(req)).map(CurrentSubject)
        }))
    }
}
