//! SeaORM -> DomainError translation helpers.
//!
//! Repos convert `sea_orm::DbErr` into `DomainError` here; handlers then map
//! `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// First `table.column` named in a SQLite "UNIQUE constraint failed: ..." message.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = error_msg.find(MARKER)? + MARKER.len();
    error_msg[start..]
        .split(|c: char| c.is_whitespace() || c == ',' || c == '"')
        .find(|s| !s.is_empty())
}

fn map_sqlite_table_column_to_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "students.email" | "faculty.email" | "admins.email" => {
            Some((ConflictKind::UniqueEmail, "Email already registered"))
        }
        "students.mobile" => Some((ConflictKind::UniqueMobile, "Mobile number already registered")),
        "departments.name" => Some((ConflictKind::DepartmentName, "Department already exists")),
        "enrollments.student_id" => Some((
            ConflictKind::Enrollment,
            "Student is already enrolled in this course",
        )),
        "student_faculty_assignments.student_id" => Some((
            ConflictKind::Assignment,
            "Student is already assigned to this faculty",
        )),
        _ => None,
    }
}

fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if ["students_email_key", "faculty_email_key", "admins_email_key"]
        .iter()
        .any(|name| error_msg.contains(name))
    {
        return Some((ConflictKind::UniqueEmail, "Email already registered"));
    }
    if error_msg.contains("students_mobile_key") {
        return Some((ConflictKind::UniqueMobile, "Mobile number already registered"));
    }
    if error_msg.contains("departments_name_key") {
        return Some((ConflictKind::DepartmentName, "Department already exists"));
    }
    if error_msg.contains("ux_enrollments_student_course") {
        return Some((
            ConflictKind::Enrollment,
            "Student is already enrolled in this course",
        ));
    }
    if error_msg.contains("ux_assignments_student_faculty") {
        return Some((
            ConflictKind::Assignment,
            "Student is already assigned to this faculty",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    if let sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) = &e {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
        return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");

        if let Some(table_column) = extract_sqlite_table_column(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_table_column_to_conflict(table_column) {
                return DomainError::conflict(kind, detail);
            }
        }
        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation("Referenced record does not exist");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
