//! Writes that depend on other rows existing. Each runs its checks and the
//! write in one transaction.

use sea_orm::DatabaseConnection;

use crate::auth::subject::Role;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::courses::{self, Course, CourseInput};
use crate::repos::enrollments::{self, Enrollment};
use crate::repos::exams::{self, Exam, ExamInput};
use crate::repos::results::{self, ExamResult, ResultInput};
use crate::repos::{departments, principals};

pub async fn create_course(
    db: &DatabaseConnection,
    input: CourseInput,
) -> Result<Course, AppError> {
    with_txn(db, |txn| {
        Box::pin(async move {
            departments::require(txn, input.department_id).await?;
            Ok(courses::create(txn, input).await?)
        })
    })
    .await
}

pub async fn update_course(
    db: &DatabaseConnection,
    id: i64,
    input: CourseInput,
) -> Result<Course, AppError> {
    with_txn(db, |txn| {
        Box::pin(async move {
            courses::require(txn, id).await?;
            departments::require(txn, input.department_id).await?;
            Ok(courses::update(txn, id, input).await?)
        })
    })
    .await
}

/// Enroll a student; a repeated (student, course) pair is rejected.
pub async fn enroll(
    db: &DatabaseConnection,
    student_id: i64,
    course_id: i64,
) -> Result<Enrollment, AppError> {
    with_txn(db, |txn| {
        Box::pin(async move {
            principals::require_by_id(txn, Role::Student, student_id).await?;
            courses::require(txn, course_id).await?;
            if enrollments::find_pair(txn, student_id, course_id)
                .await?
                .is_some()
            {
                return Err(AppError::already_exists(
                    ErrorCode::AlreadyEnrolled,
                    "Student already enrolled in this course",
                ));
            }
            Ok(enrollments::create(txn, student_id, course_id).await?)
        })
    })
    .await
}

pub async fn create_exam(db: &DatabaseConnection, input: ExamInput) -> Result<Exam, AppError> {
    with_txn(db, |txn| {
        Box::pin(async move {
            courses::require(txn, input.course_id).await?;
            Ok(exams::create(txn, input).await?)
        })
    })
    .await
}

pub async fn update_exam(
    db: &DatabaseConnection,
    id: i64,
    input: ExamInput,
) -> Result<Exam, AppError> {
    with_txn(db, |txn| {
        Box::pin(async move {
            exams::require(txn, id).await?;
            courses::require(txn, input.course_id).await?;
            Ok(exams::update(txn, id, input).await?)
        })
    })
    .await
}

pub async fn create_result(
    db: &DatabaseConnection,
    input: ResultInput,
) -> Result<ExamResult, AppError> {
    with_txn(db, |txn| {
        Box::pin(async move {
            principals::require_by_id(txn, Role::Student, input.student_id).await?;
            exams::require(txn, input.exam_id).await?;
            Ok(results::create(txn, input).await?)
        })
    })
    .await
}

pub async fn update_result(
    db: &DatabaseConnection,
    id: i64,
    input: ResultInput,
) -> Result<ExamResult, AppError> {
    with_txn(db, |txn| {
        Box::pin(async move {
            results::require(txn, id).await?;
            principals::require_by_id(txn, Role::Student, input.student_id).await?;
            exams::require(txn, input.exam_id).await?;
            Ok(results::update(txn, id, input).await?)
        })
    })
    .await
}
