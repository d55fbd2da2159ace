use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryOrder, Set};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::entities::exams;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub type Exam = exams::Model;

#[derive(Debug, Clone, Deserialize)]
pub struct ExamInput {
    pub course_id: i64,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

pub async fn create<C: ConnectionTrait>(conn: &C, input: ExamInput) -> Result<Exam, DomainError> {
    exams::ActiveModel {
        id: NotSet,
        course_id: Set(input.course_id),
        name: Set(input.name),
        date: Set(input.date),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)
}

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<Exam>, DomainError> {
    exams::Entity::find()
        .order_by_asc(exams::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn require<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Exam, DomainError> {
    exams::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Exam, "Exam not found"))
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    input: ExamInput,
) -> Result<Exam, DomainError> {
    let mut active: exams::ActiveModel = require(conn, id).await?.into();
    active.course_id = Set(input.course_id);
    active.name = Set(input.name);
    active.date = Set(input.date);
    active.update(conn).await.map_err(map_db_err)
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: i64) -> Result<(), DomainError> {
    require(conn, id).await?.delete(conn).await.map_err(map_db_err)?;
    Ok(())
}
