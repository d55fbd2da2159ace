//! Credential store: students, faculty and admins behind one role-keyed API.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::auth::subject::Role;
use crate::entities::{admins, faculty, students};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// A stored user of any role.
#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    Student(students::Model),
    Faculty(faculty::Model),
    Admin(admins::Model),
}

impl Principal {
    pub fn role(&self) -> Role {
        match self {
            Principal::Student(_) => Role::Student,
            Principal::Faculty(_) => Role::Faculty,
            Principal::Admin(_) => Role::Admin,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Principal::Student(m) => m.id,
            Principal::Faculty(m) => m.id,
            Principal::Admin(m) => m.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Principal::Student(m) => &m.name,
            Principal::Faculty(m) => &m.name,
            Principal::Admin(m) => &m.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Principal::Student(m) => &m.email,
            Principal::Faculty(m) => &m.email,
            Principal::Admin(m) => &m.email,
        }
    }

    pub fn password_hash(&self) -> &str {
        match self {
            Principal::Student(m) => &m.password_hash,
            Principal::Faculty(m) => &m.password_hash,
            Principal::Admin(m) => &m.password_hash,
        }
    }
}

/// Insert payload. `password_hash` is already a bcrypt digest.
#[derive(Debug, Clone)]
pub struct NewPrincipal {
    pub role: Role,
    pub name: String,
    pub email: String,
    /// Students only; ignored for other roles
    pub mobile: Option<String>,
    pub password_hash: String,
}

pub(crate) fn not_found_kind(role: Role) -> NotFoundKind {
    match role {
        Role::Student => NotFoundKind::Student,
        Role::Faculty => NotFoundKind::Faculty,
        Role::Admin => NotFoundKind::Admin,
    }
}

/// "<Role> not found" error for `role`.
pub fn not_found(role: Role) -> DomainError {
    let kind = not_found_kind(role);
    DomainError::not_found(kind, format!("{} not found", kind.label()))
}

/// Exact-match email lookup in `role`'s table.
pub async fn find_by_email<C: ConnectionTrait>(
    conn: &C,
    role: Role,
    email: &str,
) -> Result<Option<Principal>, DomainError> {
    let found = match role {
        Role::Student => students::Entity::find()
            .filter(students::Column::Email.eq(email))
            .one(conn)
            .await
            .map(|m| m.map(Principal::Student)),
        Role::Faculty => faculty::Entity::find()
            .filter(faculty::Column::Email.eq(email))
            .one(conn)
            .await
            .map(|m| m.map(Principal::Faculty)),
        Role::Admin => admins::Entity::find()
            .filter(admins::Column::Email.eq(email))
            .one(conn)
            .await
            .map(|m| m.map(Principal::Admin)),
    };
    found.map_err(map_db_err)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    role: Role,
    id: i64,
) -> Result<Option<Principal>, DomainError> {
    let found = match role {
        Role::Student => students::Entity::find_by_id(id)
            .one(conn)
            .await
            .map(|m| m.map(Principal::Student)),
        Role::Faculty => faculty::Entity::find_by_id(id)
            .one(conn)
            .await
            .map(|m| m.map(Principal::Faculty)),
        Role::Admin => admins::Entity::find_by_id(id)
            .one(conn)
            .await
            .map(|m| m.map(Principal::Admin)),
    };
    found.map_err(map_db_err)
}

/// Like `find_by_id` but absence is a `NotFound` error.
pub async fn require_by_id<C: ConnectionTrait>(
    conn: &C,
    role: Role,
    id: i64,
) -> Result<Principal, DomainError> {
    find_by_id(conn, role, id)
        .await?
        .ok_or_else(|| not_found(role))
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    new: NewPrincipal,
) -> Result<Principal, DomainError> {
    let now = OffsetDateTime::now_utc();
    let inserted = match new.role {
        Role::Student => students::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            email: Set(new.email),
            mobile: Set(new.mobile),
            password_hash: Set(new.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(conn)
        .await
        .map(Principal::Student),
        Role::Faculty => faculty::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(conn)
        .await
        .map(Principal::Faculty),
        Role::Admin => admins::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(conn)
        .await
        .map(Principal::Admin),
    };
    inserted.map_err(map_db_err)
}

/// All principals of `role`, ordered by id.
pub async fn list<C: ConnectionTrait>(conn: &C, role: Role) -> Result<Vec<Principal>, DomainError> {
    let rows = match role {
        Role::Student => students::Entity::find()
            .order_by_asc(students::Column::Id)
            .all(conn)
            .await
            .map(|v| v.into_iter().map(Principal::Student).collect()),
        Role::Faculty => faculty::Entity::find()
            .order_by_asc(faculty::Column::Id)
            .all(conn)
            .await
            .map(|v| v.into_iter().map(Principal::Faculty).collect()),
        Role::Admin => admins::Entity::find()
            .order_by_asc(admins::Column::Id)
            .all(conn)
            .await
            .map(|v| v.into_iter().map(Principal::Admin).collect()),
    };
    rows.map_err(map_db_err)
}

/// Overwrite name and email. Password and mobile are left untouched.
pub async fn update_profile<C: ConnectionTrait>(
    conn: &C,
    role: Role,
    id: i64,
    name: String,
    email: String,
) -> Result<Principal, DomainError> {
    let now = OffsetDateTime::now_utc();
    let updated = match require_by_id(conn, role, id).await? {
        Principal::Student(model) => {
            let mut active: students::ActiveModel = model.into();
            active.name = Set(name);
            active.email = Set(email);
            active.updated_at = Set(now);
            active.update(conn).await.map(Principal::Student)
        }
        Principal::Faculty(model) => {
            let mut active: faculty::ActiveModel = model.into();
            active.name = Set(name);
            active.email = Set(email);
            active.updated_at = Set(now);
            active.update(conn).await.map(Principal::Faculty)
        }
        Principal::Admin(model) => {
            let mut active: admins::ActiveModel = model.into();
            active.name = Set(name);
            active.email = Set(email);
            active.updated_at = Set(now);
            active.update(conn).await.map(Principal::Admin)
        }
    };
    updated.map_err(map_db_err)
}

/// Delete and return the removed record. Dependent rows cascade.
pub async fn delete<C: ConnectionTrait>(
    conn: &C,
    role: Role,
    id: i64,
) -> Result<Principal, DomainError> {
    let principal = require_by_id(conn, role, id).await?;
    let outcome = match &principal {
        Principal::Student(m) => m.clone().delete(conn).await,
        Principal::Faculty(m) => m.clone().delete(conn).await,
        Principal::Admin(m) => m.clone().delete(conn).await,
    };
    outcome.map_err(map_db_err)?;
    Ok(principal)
}
