use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::enrollments;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub type Enrollment = enrollments::Model;

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
    course_id: i64,
) -> Result<Enrollment, DomainError> {
    enrollments::ActiveModel {
        id: NotSet,
        student_id: Set(student_id),
        course_id: Set(course_id),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)
}

pub async fn find_pair<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
    course_id: i64,
) -> Result<Option<Enrollment>, DomainError> {
    enrollments::Entity::find()
        .filter(enrollments::Column::StudentId.eq(student_id))
        .filter(enrollments::Column::CourseId.eq(course_id))
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<Enrollment>, DomainError> {
    enrollments::Entity::find()
        .order_by_asc(enrollments::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn list_for_student<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
) -> Result<Vec<Enrollment>, DomainError> {
    enrollments::Entity::find()
        .filter(enrollments::Column::StudentId.eq(student_id))
        .order_by_asc(enrollments::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn require<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Enrollment, DomainError> {
    enrollments::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Enrollment, "Enrollment not found"))
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: i64) -> Result<(), DomainError> {
    require(conn, id).await?.delete(conn).await.map_err(map_db_err)?;
    Ok(())
}
