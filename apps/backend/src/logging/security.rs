use tracing::warn;

use crate::auth::subject::Role;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a rejected login attempt.
pub fn login_failed(role: Role, reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        role = %role,
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

/// Log a bearer token that reached a route for another role.
pub fn wrong_role(expected: Role, presented: Role, subject_id: i64) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_WRONG_ROLE",
        %trace_id,
        expected = %expected,
        presented = %presented,
        subject_id,
        "Role check failed"
    );
}
