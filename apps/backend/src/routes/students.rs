use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::dto::{CourseOut, PrincipalOut, StudentOut};
use super::ensure_self;
use crate::auth::subject::Role;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{CurrentAdmin, CurrentStudent, ValidatedJson};
use crate::repos::courses;
use crate::repos::principals;
use crate::services::auth::{signup, validate_email, Signup};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct StudentSignup {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: Option<String>,
    pub password: String,
}

/// Profile edit shared by students and faculty. Password and mobile are
/// not editable here.
#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

async fn create_student(
    app_state: web::Data<AppState>,
    body: ValidatedJson<StudentSignup>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let body = body.into_inner();
    let created = signup(
        db,
        &app_state.security,
        Signup {
            role: Role::Student,
            name: body.name,
            email: body.email,
            mobile: body.mobile,
            password: body.password,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(PrincipalOut::from(created)))
}

async fn list_students(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let students: Vec<PrincipalOut> = principals::list(db, Role::Student)
        .await?
        .into_iter()
        .map(PrincipalOut::from)
        .collect();
    Ok(HttpResponse::Ok().json(students))
}

async fn me(CurrentStudent(student): CurrentStudent) -> HttpResponse {
    HttpResponse::Ok().json(StudentOut::from(student))
}

async fn get_student(
    CurrentStudent(student): CurrentStudent,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    ensure_self(student.id, path.into_inner())?;
    Ok(HttpResponse::Ok().json(StudentOut::from(student)))
}

async fn update_student(
    CurrentStudent(student): CurrentStudent,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ProfileUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    ensure_self(student.id, id)?;
    let body = body.into_inner();
    validate_email(&body.email)?;

    let db = require_db(&app_state)?;
    let updated = principals::update_profile(db, Role::Student, id, body.name, body.email).await?;
    Ok(HttpResponse::Ok().json(PrincipalOut::from(updated)))
}

/// Returns the removed record.
async fn delete_student(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let removed = principals::delete(db, Role::Student, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PrincipalOut::from(removed)))
}

async fn student_courses(
    CurrentStudent(student): CurrentStudent,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    ensure_self(student.id, id)?;

    let db = require_db(&app_state)?;
    let enrolled: Vec<CourseOut> = courses::for_student(db, id)
        .await?
        .into_iter()
        .map(CourseOut::from)
        .collect();
    Ok(HttpResponse::Ok().json(enrolled))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_student))
            .route(web::get().to(list_students)),
    );
    cfg.route("/me", web::get().to(me));
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_student))
            .route(web::put().to(update_student))
            .route(web::delete().to(delete_student)),
    );
    cfg.route("/{id}/courses", web::get().to(student_courses));
}
