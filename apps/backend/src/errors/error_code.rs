//! Error codes for the college backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes. Each variant maps to the canonical string that
/// appears in the `code` field of a problem document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Token failed signature/expiry checks or carried an unusable subject
    UnauthorizedInvalidToken,
    /// Email/password pair rejected at login
    InvalidCredentials,
    /// Access denied
    Forbidden,
    /// Token belongs to a different role than the route requires
    WrongRole,

    // Request Validation
    /// Invalid email address
    InvalidEmail,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Already exists (reported as 400)
    EmailAlreadyExists,
    MobileAlreadyExists,
    DepartmentAlreadyExists,
    AlreadyEnrolled,
    AlreadyAssigned,

    // Resource Not Found
    StudentNotFound,
    FacultyNotFound,
    AdminNotFound,
    DepartmentNotFound,
    CourseNotFound,
    EnrollmentNotFound,
    ExamNotFound,
    ResultNotFound,
    NotificationNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidToken => "UNAUTHORIZED_INVALID_TOKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::WrongRole => "WRONG_ROLE",

            Self::InvalidEmail => "INVALID_EMAIL",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::MobileAlreadyExists => "MOBILE_ALREADY_EXISTS",
            Self::DepartmentAlreadyExists => "DEPARTMENT_ALREADY_EXISTS",
            Self::AlreadyEnrolled => "ALREADY_ENROLLED",
            Self::AlreadyAssigned => "ALREADY_ASSIGNED",

            Self::StudentNotFound => "STUDENT_NOT_FOUND",
            Self::FacultyNotFound => "FACULTY_NOT_FOUND",
            Self::AdminNotFound => "ADMIN_NOT_FOUND",
            Self::DepartmentNotFound => "DEPARTMENT_NOT_FOUND",
            Self::CourseNotFound => "COURSE_NOT_FOUND",
            Self::EnrollmentNotFound => "ENROLLMENT_NOT_FOUND",
            Self::ExamNotFound => "EXAM_NOT_FOUND",
            Self::ResultNotFound => "RESULT_NOT_FOUND",
            Self::NotificationNotFound => "NOTIFICATION_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
