use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::dto::{CourseOut, Deleted, PrincipalOut, StaffOut};
use super::ensure_self;
use super::students::ProfileUpdate;
use crate::auth::subject::Role;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{CurrentAdmin, CurrentFaculty, ValidatedJson};
use crate::repos::principals;
use crate::services::auth::{signup, validate_email, Signup};
use crate::services::students::{overview_all, StudentOverview};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct StaffSignup {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
struct ResultBrief {
    exam_id: i64,
    marks_obtained: i32,
}

#[derive(Debug, Serialize)]
struct StudentRecords {
    #[serde(flatten)]
    student: PrincipalOut,
    courses: Vec<CourseOut>,
    results: Vec<ResultBrief>,
}

impl From<StudentOverview> for StudentRecords {
    fn from(o: StudentOverview) -> Self {
        Self {
            student: o.student.into(),
            courses: o.courses.into_iter().map(CourseOut::from).collect(),
            results: o
                .results
                .into_iter()
                .map(|r| ResultBrief {
                    exam_id: r.exam_id,
                    marks_obtained: r.marks_obtained,
                })
                .collect(),
        }
    }
}

async fn create_faculty(
    app_state: web::Data<AppState>,
    body: ValidatedJson<StaffSignup>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let body = body.into_inner();
    let created = signup(
        db,
        &app_state.security,
        Signup {
            role: Role::Faculty,
            name: body.name,
            email: body.email,
            mobile: None,
            password: body.password,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(PrincipalOut::from(created)))
}

async fn list_faculty(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let faculty: Vec<PrincipalOut> = principals::list(db, Role::Faculty)
        .await?
        .into_iter()
        .map(PrincipalOut::from)
        .collect();
    Ok(HttpResponse::Ok().json(faculty))
}

async fn me(CurrentFaculty(member): CurrentFaculty) -> HttpResponse {
    HttpResponse::Ok().json(StaffOut::from(member))
}

async fn all_students(
    _faculty: CurrentFaculty,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let records: Vec<StudentRecords> = overview_all(db)
        .await?
        .into_iter()
        .map(StudentRecords::from)
        .collect();
    Ok(HttpResponse::Ok().json(records))
}

async fn get_faculty(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let member = principals::require_by_id(db, Role::Faculty, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PrincipalOut::from(member)))
}

async fn update_faculty(
    CurrentFaculty(member): CurrentFaculty,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ProfileUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    ensure_self(member.id, id)?;
    let body = body.into_inner();
    validate_email(&body.email)?;

    let db = require_db(&app_state)?;
    let updated = principals::update_profile(db, Role::Faculty, id, body.name, body.email).await?;
    Ok(HttpResponse::Ok().json(PrincipalOut::from(updated)))
}

async fn delete_faculty(
    _admin: CurrentAdmin,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    principals::delete(db, Role::Faculty, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Deleted::entity("Faculty")))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_faculty))
            .route(web::get().to(list_faculty)),
    );
    cfg.route("/me", web::get().to(me))
        .route("/students", web::get().to(all_students));
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_faculty))
            .route(web::put().to(update_faculty))
            .route(web::delete().to(delete_faculty)),
    );
}
