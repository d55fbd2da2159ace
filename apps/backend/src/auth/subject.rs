//! The `sub` claim: `"<role>:<id>"`, decoded into a closed enum at the
//! token boundary so nothing downstream handles raw strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Faculty, Role::Admin];

    pub const fn as_tag(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
        }
    }

    /// Exact, case-sensitive tag match.
    pub fn from_tag(tag: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_tag() == tag)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Student(i64),
    Faculty(i64),
    Admin(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubjectError {
    #[error("subject has no role separator")]
    MissingSeparator,
    #[error("unknown role tag")]
    UnknownRole,
    #[error("subject id is not a non-negative integer")]
    InvalidId,
}

impl Subject {
    pub fn new(role: Role, id: i64) -> Self {
        match role {
            Role::Student => Subject::Student(id),
            Role::Faculty => Subject::Faculty(id),
            Role::Admin => Subject::Admin(id),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Subject::Student(_) => Role::Student,
            Subject::Faculty(_) => Role::Faculty,
            Subject::Admin(_) => Role::Admin,
        }
    }

    pub fn id(&self) -> i64 {
        match *self {
            Subject::Student(id) | Subject::Faculty(id) | Subject::Admin(id) => id,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.role().as_tag(), self.id())
    }
}

impl FromStr for Subject {
    type Err = SubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, raw_id) = s.split_once(':').ok_or(SubjectError::MissingSeparator)?;
        let role = Role::from_tag(tag).ok_or(SubjectError::UnknownRole)?;

        // Digits only: rejects "", "+1", "-1", " 1"
        if raw_id.is_empty() || !raw_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubjectError::InvalidId);
        }
        let id = raw_id.parse::<i64>().map_err(|_| SubjectError::InvalidId)?;

        Ok(Subject::new(role, id))
    }
}
