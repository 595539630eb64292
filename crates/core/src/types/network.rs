//! Ad Manager network code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default host serving the Ad Manager web UI.
pub const DEFAULT_ADMIN_HOST: &str = "www.google.com/dfp";

/// Error returned when a network code is not a string of digits.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid network code {0:?}: expected digits only")]
pub struct NetworkCodeError(pub String);

/// The numeric code of the Ad Manager network a session is bound to.
///
/// Kept as text: it is only ever used as a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkCode(String);

impl NetworkCode {
    /// Borrow the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for NetworkCode {
    type Err = NetworkCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NetworkCodeError(s.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl std::fmt::Display for NetworkCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
