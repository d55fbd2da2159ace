use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;

use crate::entities::{courses, departments, enrollments};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub type Course = courses::Model;

#[derive(Debug, Clone, Deserialize)]
pub struct CourseInput {
    pub name: String,
    pub department_id: i64,
}

pub async fn create<C: ConnectionTrait>(conn: &C, input: CourseInput) -> Result<Course, DomainError> {
    courses::ActiveModel {
        id: NotSet,
        name: Set(input.name),
        department_id: Set(input.department_id),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)
}

/// Every course with its department, ordered by course id.
pub async fn list_with_department<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<(Course, Option<departments::Model>)>, DomainError> {
    courses::Entity::find()
        .find_also_related(departments::Entity)
        .order_by_asc(courses::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find_with_department<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<(Course, Option<departments::Model>)>, DomainError> {
    courses::Entity::find_by_id(id)
        .find_also_related(departments::Entity)
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn require<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Course, DomainError> {
    courses::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Course, "Course not found"))
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    input: CourseInput,
) -> Result<Course, DomainError> {
    let mut active: courses::ActiveModel = require(conn, id).await?.into();
    active.name = Set(input.name);
    active.department_id = Set(input.department_id);
    active.update(conn).await.map_err(map_db_err)
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: i64) -> Result<(), DomainError> {
    require(conn, id).await?.delete(conn).await.map_err(map_db_err)?;
    Ok(())
}

/// Courses a student is enrolled in, each with its department.
pub async fn for_student<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
) -> Result<Vec<(Course, Option<departments::Model>)>, DomainError> {
    let course_ids: Vec<i64> = enrollments::Entity::find()
        .filter(enrollments::Column::StudentId.eq(student_id))
        .order_by_asc(enrollments::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(|e| e.course_id)
        .collect();

    if course_ids.is_empty() {
        return Ok(Vec::new());
    }

    courses::Entity::find()
        .filter(courses::Column::Id.is_in(course_ids))
        .find_also_related(departments::Entity)
        .order_by_asc(courses::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}
