use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use ms_core::ports::{RefreshTriggerPort, SignaturePresenterPort};

use super::get_signatures::{GetSignatures, GetSignaturesError, SignatureFetch};

/// Runs the orchestrator and pushes the outcome to the presentation sink.
///
/// This is what both the "get signatures" user action and the refresh
/// scheduler fire.
pub struct RefreshSignatures {
    get_signatures: Arc<GetSignatures>,
    presenter: Arc<dyn SignaturePresenterPort>,
}

impl RefreshSignatures {
    pub fn new(
        get_signatures: Arc<GetSignatures>,
        presenter: Arc<dyn SignaturePresenterPort>,
    ) -> Self {
        Self {
            get_signatures,
            presenter,
        }
    }

    #[tracing::instrument(name = "usecase.refresh_signatures.execute", skip(self))]
    pub async fn execute(&self) -> Result<SignatureFetch, GetSignaturesError> {
        match self.get_signatures.execute().await {
            Ok(fetch) => {
                if let Err(e) = self
                    .presenter
                    .show_signatures(&fetch.signatures, fetch.status)
                    .await
                {
                    error!(error = %e, "Failed to present signatures");
                }
                info!(status = %fetch.status, count = fetch.signatures.len(), "{}", fetch.status.message());
                Ok(fetch)
            }
            Err(e) => {
                if let Err(present_err) = self.presenter.clear(&e.to_string()).await {
                    error!(error = %present_err, "Failed to present error");
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl RefreshTriggerPort for RefreshSignatures {
    async fn trigger(&self) {
        if let Err(e) = self.execute().await {
            error!(error = %e, status = %e.status(), "Scheduled signature refresh failed");
        }
    }
}
