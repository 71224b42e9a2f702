//! Signature domain models
//!
//! A [`Signature`] is what the cache stores and the presentation sink renders.
//! A [`RawSignature`] is the transient shape returned by the remote API; it is
//! never persisted as-is and must go through the normalizer first.

mod status;

pub use status::FetchStatus;

use serde::{Deserialize, Serialize};

/// A normalized signature ready for rendering.
///
/// `html` never contains unresolved `cid:` image references that the
/// normalizer knew how to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub html: String,
}

impl Signature {
    pub fn new(name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html: html.into(),
        }
    }
}

/// An image embedded in a raw signature and referenced from its HTML as `cid:<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawImage {
    pub name: String,
    pub base64: String,
}

/// Signature record as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawSignature {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub images: Vec<RawImage>,
}

impl RawSignature {
    /// Raw signatures without HTML carry nothing renderable and are skipped.
    pub fn has_html(&self) -> bool {
        self.html.as_deref().is_some_and(|html| !html.is_empty())
    }
}
