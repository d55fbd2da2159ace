use ulid::Ulid;

/// `{prefix}-{ulid}`; distinct on every call.
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new())
}

/// Address that passes the backend's email check and never collides.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let a = unique_email("student");
/// assert_ne!(a, unique_email("student"));
/// assert!(a.ends_with("@college.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}@college.test", unique_str(prefix).to_lowercase())
}
