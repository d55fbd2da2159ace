use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryOrder, Set};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::entities::notifications;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub type Notification = notifications::Model;

pub const DEFAULT_USER_TYPE: &str = "student";

#[derive(Debug, Clone, Deserialize)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub user_type: Option<String>,
    pub user_id: Option<i64>,
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    new: NewNotification,
) -> Result<Notification, DomainError> {
    notifications::ActiveModel {
        id: NotSet,
        title: Set(new.title),
        message: Set(new.message),
        user_type: Set(new
            .user_type
            .unwrap_or_else(|| DEFAULT_USER_TYPE.to_string())),
        user_id: Set(new.user_id),
        created_at: Set(OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)
}

/// Insertion order.
pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<Notification>, DomainError> {
    notifications::Entity::find()
        .order_by_asc(notifications::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

/// Newest first; ties broken by id so equal timestamps stay deterministic.
pub async fn list_newest_first<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<Notification>, DomainError> {
    notifications::Entity::find()
        .order_by_desc(notifications::Column::CreatedAt)
        .order_by_desc(notifications::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn require<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Notification, DomainError> {
    notifications::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Notification, "Notification not found")
        })
}

pub async fn update_text<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    title: String,
    message: String,
) -> Result<Notification, DomainError> {
    let mut active: notifications::ActiveModel = require(conn, id).await?.into();
    active.title = Set(title);
    active.message = Set(message);
    active.update(conn).await.map_err(map_db_err)
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: i64) -> Result<(), DomainError> {
    require(conn, id).await?.delete(conn).await.map_err(map_db_err)?;
    Ok(())
}
