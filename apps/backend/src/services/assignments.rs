use sea_orm::DatabaseConnection;
use tracing::info;

use crate::auth::subject::Role;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::assignments::{self, Assignment};
use crate::repos::principals;

/// Result of an assignment request. A repeat is reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    Created {
        assignment: Assignment,
        student_name: String,
        faculty_name: String,
    },
    AlreadyAssigned {
        student_name: String,
        faculty_name: String,
    },
}

fn missing(kind: NotFoundKind, id: i64) -> AppError {
    DomainError::not_found(kind, format!("{} with ID {id} not found", kind.label())).into()
}

pub async fn assign_faculty(
    db: &DatabaseConnection,
    student_id: i64,
    faculty_id: i64,
) -> Result<AssignOutcome, AppError> {
    let outcome = with_txn(db, |txn| {
        Box::pin(async move {
            let student = principals::find_by_id(txn, Role::Student, student_id)
                .await?
                .ok_or_else(|| missing(NotFoundKind::Student, student_id))?;
            let faculty = principals::find_by_id(txn, Role::Faculty, faculty_id)
                .await?
                .ok_or_else(|| missing(NotFoundKind::Faculty, faculty_id))?;

            let student_name = student.name().to_string();
            let faculty_name = faculty.name().to_string();

            if assignments::find_pair(txn, student_id, faculty_id)
                .await?
                .is_some()
            {
                return Ok(AssignOutcome::AlreadyAssigned {
                    student_name,
                    faculty_name,
                });
            }

            let assignment = assignments::create(txn, student_id, faculty_id).await?;
            Ok(AssignOutcome::Created {
                assignment,
                student_name,
                faculty_name,
            })
        })
    })
    .await?;

    if let AssignOutcome::Created { assignment, .. } = &outcome {
        info!(
            assignment_id = assignment.id,
            student_id, faculty_id, "faculty assigned to student"
        );
    }
    Ok(outcome)
}
