use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::auth::admin_login;
use super::dto::PrincipalOut;
use super::faculty::StaffSignup;
use crate::auth::subject::Role;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{CurrentAdmin, ValidatedJson};
use crate::repos::{assignments, principals};
use crate::services::assignments::{assign_faculty, AssignOutcome};
use crate::services::auth::{signup, Signup};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub student_id: i64,
    pub faculty_id: i64,
}

#[derive(Debug, Serialize)]
struct AssignResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignment_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    student_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    faculty_id: Option<i64>,
}

impl From<AssignOutcome> for AssignResponse {
    fn from(outcome: AssignOutcome) -> Self {
        match outcome {
            AssignOutcome::Created {
                assignment,
                student_name,
                faculty_name,
            } => Self {
                success: true,
                message: format!(
                    "Faculty '{faculty_name}' successfully assigned to Student '{student_name}'"
                ),
                assignment_id: Some(assignment.id),
                student_id: Some(assignment.student_id),
                faculty_id: Some(assignment.faculty_id),
            },
            AssignOutcome::AlreadyAssigned {
                student_name,
                faculty_name,
            } => Self {
                success: false,
                message: format!(
                    "Faculty '{faculty_name}' is already assigned to Student '{student_name}'"
                ),
                assignment_id: None,
                student_id: None,
                faculty_id: None,
            },
        }
    }
}

async fn create_admin(
    app_state: web::Data<AppState>,
    body: ValidatedJson<StaffSignup>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let body = body.into_inner();
    let created = signup(
        db,
        &app_state.security,
        Signup {
            role: Role::Admin,
            name: body.name,
            email: body.email,
            mobile: None,
            password: body.password,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(PrincipalOut::from(created)))
}

async fn list_role(app_state: &AppState, role: Role) -> Result<HttpResponse, AppError> {
    let db = require_db(app_state)?;
    let rows: Vec<PrincipalOut> = principals::list(db, role)
        .await?
        .into_iter()
        .map(PrincipalOut::from)
        .collect();
    Ok(HttpResponse::Ok().json(rows))
}

async fn students(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    list_role(&app_state, Role::Student).await
}

async fn faculty(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    list_role(&app_state, Role::Faculty).await
}

async fn assign(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
    body: ValidatedJson<AssignRequest>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let outcome = assign_faculty(db, body.student_id, body.faculty_id).await?;
    Ok(HttpResponse::Ok().json(AssignResponse::from(outcome)))
}

async fn student_assignments(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = assignments::list_with_names(db).await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_admin))
        .route("/login", web::post().to(admin_login))
        .route("/students", web::get().to(students))
        .route("/faculty", web::get().to(faculty))
        .route("/assign-faculty", web::post().to(assign))
        .route("/student-assignments", web::get().to(student_assignments));
}
