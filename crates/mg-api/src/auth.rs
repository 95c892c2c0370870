//! Basic authentication credential

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Pre-encoded Basic credential, inserted verbatim after `Basic `.
///
/// An empty hash means requests go out unauthenticated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthHash(String);

impl AuthHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Unauthenticated marker
    pub fn none() -> Self {
        Self::default()
    }

    /// Encode `username:password` the way Basic auth expects
    pub fn from_credentials(username: &str, password: &str) -> Self {
        Self(STANDARD.encode(format!("{username}:{password}")))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `authorization` header value, or `None` when unauthenticated
    pub fn header_value(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(format!("Basic {}", self.0))
        }
    }
}

impl fmt::Debug for AuthHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("AuthHash(none)")
        } else {
            f.write_str("AuthHash(***)")
        }
    }
}

impl From<&str> for AuthHash {
    fn from(hash: &str) -> Self {
        Self::new(hash)
    }
}

impl From<String> for AuthHash {
    fn from(hash: String) -> Self {
        Self(hash)
    }
}
