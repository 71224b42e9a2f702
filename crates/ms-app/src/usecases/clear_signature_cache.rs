use std::sync::Arc;

use tracing::{error, info};

use ms_core::ports::{SignatureCacheError, SignatureCachePort, SignaturePresenterPort};

pub const CACHE_CLEARED_MESSAGE: &str = "Cache cleared.";

/// Empties the signature cache and the rendered output.
///
/// The next retrieval goes to the remote service.
pub struct ClearSignatureCache {
    cache: Arc<dyn SignatureCachePort>,
    presenter: Arc<dyn SignaturePresenterPort>,
}

impl ClearSignatureCache {
    pub fn new(
        cache: Arc<dyn SignatureCachePort>,
        presenter: Arc<dyn SignaturePresenterPort>,
    ) -> Self {
        Self { cache, presenter }
    }

    #[tracing::instrument(name = "usecase.clear_signature_cache.execute", skip(self))]
    pub async fn execute(&self) -> Result<(), SignatureCacheError> {
        if let Err(e) = self.cache.clear().await {
            error!(error = %e, "Failed to clear signature cache");
            return Err(e);
        }

        if let Err(e) = self.presenter.clear(CACHE_CLEARED_MESSAGE).await {
            error!(error = %e, "Failed to clear rendered signatures");
        }
        info!("{}", CACHE_CLEARED_MESSAGE);
        Ok(())
    }
}
