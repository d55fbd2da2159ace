use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
});

/// Compact JWS: three base64url segments joined by dots.
static JWT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\beyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+").unwrap()
});

/// bcrypt modular-crypt digests ($2a$, $2b$, $2y$ ...).
static BCRYPT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\$2[abxy]?\$\d{2}\$[./A-Za-z0-9]{53}").unwrap()
});

/// Masks emails (first char of the local part is kept), bearer tokens and
/// password digests.
pub fn redact(input: &str) -> String {
    let without_tokens = JWT_REGEX.replace_all(input, "[REDACTED_TOKEN]");
    let without_digests = BCRYPT_REGEX.replace_all(&without_tokens, "[REDACTED_HASH]");

    EMAIL_REGEX
        .replace_all(&without_digests, |caps: &regex::Captures| {
            let full = &caps[0];
            match full.split_once('@') {
                Some((local, domain)) => match local.chars().next() {
                    Some(first) => format!("{first}***@{domain}"),
                    None => format!("@{domain}"),
                },
                None => full.to_string(),
            }
        })
        .into_owned()
}

/// Redacts on display so call sites can log `%Redacted(&email)` directly.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
