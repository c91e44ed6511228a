//! Session identity for one client run.

use std::fmt;

/// Prefix on generated session ids.
const SESSION_PREFIX: &str = "session-";

/// Opaque random token attached to every request from one run.
///
/// Generated once at startup; the server may use it to group requests but
/// the client attaches no meaning to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random session id.
    pub fn generate() -> Self {
        Self(format!("{}{}", SESSION_PREFIX, uuid::Uuid::new_v4().simple()))
    }

    /// Wrap an existing token.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The token as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
