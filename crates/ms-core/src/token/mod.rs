//! Domain token model

use serde::{Deserialize, Serialize};

/// Opaque access token authorizing signature retrieval for a mail domain.
///
/// No format validation and no expiry tracking; the user manages it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainToken(String);

impl DomainToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DomainToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DomainToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for DomainToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Tokens end up in logs through Debug derives of surrounding structs.
impl std::fmt::Debug for DomainToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DomainToken(<{} chars>)", self.0.chars().count())
    }
}
