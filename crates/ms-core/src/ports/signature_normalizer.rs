use crate::signature::{RawSignature, Signature};

/// Turns a raw API record into a self-contained, directly renderable signature.
pub trait SignatureNormalizerPort: Send + Sync {
    /// Returns `None` when the raw record has nothing to render.
    fn normalize(&self, raw: &RawSignature) -> Option<Signature>;
}
