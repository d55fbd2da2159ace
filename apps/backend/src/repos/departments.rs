use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryOrder, Set};

use crate::entities::departments;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub type Department = departments::Model;

pub async fn create<C: ConnectionTrait>(conn: &C, name: String) -> Result<Department, DomainError> {
    departments::ActiveModel {
        id: NotSet,
        name: Set(name),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)
}

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<Department>, DomainError> {
    departments::Entity::find()
        .order_by_asc(departments::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn require<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Department, DomainError> {
    departments::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Department, "Department not found"))
}

pub async fn rename<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    name: String,
) -> Result<Department, DomainError> {
    let mut active: departments::ActiveModel = require(conn, id).await?.into();
    active.name = Set(name);
    active.update(conn).await.map_err(map_db_err)
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: i64) -> Result<(), DomainError> {
    require(conn, id).await?.delete(conn).await.map_err(map_db_err)?;
    Ok(())
}
