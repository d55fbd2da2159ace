//! Read-side aggregation for the faculty overview.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::auth::subject::Role;
use crate::entities::departments;
use crate::error::AppError;
use crate::repos::courses::{self, Course};
use crate::repos::principals::{self, Principal};
use crate::repos::results::{self, ExamResult};

#[derive(Debug, Clone)]
pub struct StudentOverview {
    pub student: Principal,
    pub courses: Vec<(Course, Option<departments::Model>)>,
    pub results: Vec<ExamResult>,
}

/// Every student with enrolled courses and recorded results.
pub async fn overview_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<StudentOverview>, AppError> {
    let students = principals::list(conn, Role::Student).await?;

    let mut results_by_student: HashMap<i64, Vec<ExamResult>> = HashMap::new();
    for result in results::list(conn).await? {
        results_by_student
            .entry(result.student_id)
            .or_default()
            .push(result);
    }

    let mut overview = Vec::with_capacity(students.len());
    for student in students {
        let courses = courses::for_student(conn, student.id()).await?;
        let results = results_by_student.remove(&student.id()).unwrap_or_default();
        overview.push(StudentOverview {
            student,
            courses,
            results,
        });
    }
    Ok(overview)
}
