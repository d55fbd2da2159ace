use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;

use crate::entities::results;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub type ExamResult = results::Model;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ResultInput {
    pub exam_id: i64,
    pub student_id: i64,
    pub marks_obtained: i32,
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    input: ResultInput,
) -> Result<ExamResult, DomainError> {
    results::ActiveModel {
        id: NotSet,
        exam_id: Set(input.exam_id),
        student_id: Set(input.student_id),
        marks_obtained: Set(input.marks_obtained),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)
}

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<ExamResult>, DomainError> {
    results::Entity::find()
        .order_by_asc(results::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn list_for_student<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
) -> Result<Vec<ExamResult>, DomainError> {
    results::Entity::find()
        .filter(results::Column::StudentId.eq(student_id))
        .order_by_asc(results::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn require<C: ConnectionTrait>(conn: &C, id: i64) -> Result<ExamResult, DomainError> {
    results::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Result, "Result not found"))
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    input: ResultInput,
) -> Result<ExamResult, DomainError> {
    let mut active: results::ActiveModel = require(conn, id).await?.into();
    active.exam_id = Set(input.exam_id);
    active.student_id = Set(input.student_id);
    active.marks_obtained = Set(input.marks_obtained);
    active.update(conn).await.map_err(map_db_err)
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: i64) -> Result<(), DomainError> {
    require(conn, id).await?.delete(conn).await.map_err(map_db_err)?;
    Ok(())
}
