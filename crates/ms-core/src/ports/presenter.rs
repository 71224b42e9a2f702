use async_trait::async_trait;

use crate::signature::{FetchStatus, Signature};

/// Rendering surface receiving the final ordered list of signatures.
///
/// Implementations must render each signature in isolation so its markup
/// cannot affect anything around it.
#[async_trait]
pub trait SignaturePresenterPort: Send + Sync {
    async fn show_signatures(
        &self,
        signatures: &[Signature],
        status: FetchStatus,
    ) -> anyhow::Result<()>;

    /// Remove everything rendered so far and display `message` instead.
    async fn clear(&self, message: &str) -> anyhow::Result<()>;
}
