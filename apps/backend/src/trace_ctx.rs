//! Per-request trace id, visible to any code running inside the request task.
//!
//! `RequestTrace` opens the scope; everything else only reads it.

use tokio::task_local;

/// Returned when no request scope is active (startup, background tasks, unit tests).
pub const NO_TRACE: &str = "unknown";

task_local! {
    static CURRENT: String;
}

/// Trace id of the request being served, or [`NO_TRACE`].
pub fn trace_id() -> String {
    CURRENT
        .try_with(Clone::clone)
        .unwrap_or_else(|_| NO_TRACE.to_string())
}

/// Drive `fut` with `id` as the current trace id.
pub async fn scoped<F>(id: String, fut: F) -> F::Output
where
    F: std::future::Future,
{
    CURRENT.scope(id, fut).await
}
