use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use serde::Serialize;

use crate::entities::{faculty, student_faculty_assignments as sfa, students};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub type Assignment = sfa::Model;

/// An assignment joined with both names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentView {
    pub assignment_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub faculty_id: i64,
    pub faculty_name: String,
}

pub async fn find_pair<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
    faculty_id: i64,
) -> Result<Option<Assignment>, DomainError> {
    sfa::Entity::find()
        .filter(sfa::Column::StudentId.eq(student_id))
        .filter(sfa::Column::FacultyId.eq(faculty_id))
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
    faculty_id: i64,
) -> Result<Assignment, DomainError> {
    sfa::ActiveModel {
        id: NotSet,
        student_id: Set(student_id),
        faculty_id: Set(faculty_id),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)
}

/// All assignments whose student and faculty both still exist.
pub async fn list_with_names<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<AssignmentView>, DomainError> {
    let rows = sfa::Entity::find()
        .find_also_related(students::Entity)
        .order_by_asc(sfa::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)?;

    let mut views = Vec::with_capacity(rows.len());
    for (assignment, student) in rows {
        let Some(student) = student else { continue };
        let Some(fac) = faculty::Entity::find_by_id(assignment.faculty_id)
            .one(conn)
            .await
            .map_err(map_db_err)?
        else {
            continue;
        };
        views.push(AssignmentView {
            assignment_id: assignment.id,
            student_id: student.id,
            student_name: student.name,
            faculty_id: fac.id,
            faculty_name: fac.name,
        });
    }
    Ok(views)
}
