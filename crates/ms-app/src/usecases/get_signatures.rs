//! Cache-first signature retrieval.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, info_span, warn, Instrument};

use ms_core::ports::{
    DomainTokenStorePort, SignatureApiError, SignatureApiPort, SignatureCachePort,
    SignatureNormalizerPort, TokenStoreError,
};
use ms_core::{FetchStatus, HostDiagnostics, Signature};

/// Observable progress of the orchestrator.
///
/// `Done` and `Failed` are terminal for one run; the next run starts over
/// from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    CheckingCache,
    ServingCached,
    FetchingRemote,
    Done,
    Failed,
}

/// Signatures together with where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureFetch {
    pub signatures: Vec<Signature>,
    pub status: FetchStatus,
}

#[derive(Debug, thiserror::Error)]
pub enum GetSignaturesError {
    #[error("Domain token is not saved")]
    MissingToken,

    #[error("Domain token could not be read: {0}")]
    TokenStore(#[from] TokenStoreError),

    #[error(transparent)]
    Network(#[from] SignatureApiError),
}

impl GetSignaturesError {
    pub fn status(&self) -> FetchStatus {
        FetchStatus::Error
    }
}

/// Decides between the local cache and the remote service.
///
/// ## Behavior
/// - A non-empty cache is returned as is; the remote service is not contacted.
/// - An empty cache, or a cache that cannot be read, triggers a remote fetch
///   that requires a saved domain token.
/// - Remote results are normalized, written through to the cache and returned.
/// - A failed remote fetch leaves the cache untouched. There is no retry.
///
/// Runs are serialized: a caller arriving while another run is in flight waits
/// for it to finish, and then usually finds the cache it just filled.
pub struct GetSignatures {
    cache: Arc<dyn SignatureCachePort>,
    token_store: Arc<dyn DomainTokenStorePort>,
    api: Arc<dyn SignatureApiPort>,
    normalizer: Arc<dyn SignatureNormalizerPort>,
    diagnostics: HostDiagnostics,
    in_flight: tokio::sync::Mutex<()>,
    phase: Mutex<FetchPhase>,
}

impl GetSignatures {
    pub fn new(
        cache: Arc<dyn SignatureCachePort>,
        token_store: Arc<dyn DomainTokenStorePort>,
        api: Arc<dyn SignatureApiPort>,
        normalizer: Arc<dyn SignatureNormalizerPort>,
        diagnostics: HostDiagnostics,
    ) -> Self {
        Self {
            cache,
            token_store,
            api,
            normalizer,
            diagnostics,
            in_flight: tokio::sync::Mutex::new(()),
            phase: Mutex::new(FetchPhase::Idle),
        }
    }

    pub fn phase(&self) -> FetchPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn enter(&self, phase: FetchPhase) {
        let mut current = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        debug!(from = ?*current, to = ?phase, "Fetch phase transition");
        *current = phase;
    }

    pub async fn execute(&self) -> Result<SignatureFetch, GetSignaturesError> {
        let span = info_span!("usecase.get_signatures.execute");

        async {
            let _in_flight = self.in_flight.lock().await;
            self.enter(FetchPhase::Idle);
            self.enter(FetchPhase::CheckingCache);

            match self.cache.read_all().await {
                Ok(cached) if !cached.is_empty() => {
                    self.enter(FetchPhase::ServingCached);
                    info!(count = cached.len(), "Serving signatures from cache");
                    self.enter(FetchPhase::Done);
                    return Ok(SignatureFetch {
                        signatures: cached,
                        status: FetchStatus::FromCache,
                    });
                }
                Ok(_) => debug!("Signature cache is empty"),
                Err(e) => warn!(error = %e, "Signature cache read failed, fetching from service"),
            }

            self.enter(FetchPhase::FetchingRemote);
            match self.fetch_remote().await {
                Ok(signatures) => {
                    info!(count = signatures.len(), "Retrieved signatures from service");
                    self.enter(FetchPhase::Done);
                    Ok(SignatureFetch {
                        signatures,
                        status: FetchStatus::FromNetwork,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Signature retrieval failed");
                    self.enter(FetchPhase::Failed);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn fetch_remote(&self) -> Result<Vec<Signature>, GetSignaturesError> {
        let token = match self.token_store.load().await {
            Ok(Some(token)) => token,
            Ok(None) => return Err(GetSignaturesError::MissingToken),
            Err(e) => return Err(e.into()),
        };

        let raw = self.api.fetch_signatures(&token, &self.diagnostics).await?;
        let signatures: Vec<Signature> = raw
            .iter()
            .filter_map(|raw| self.normalizer.normalize(raw))
            .collect();
        debug!(
            received = raw.len(),
            kept = signatures.len(),
            "Normalized remote signatures"
        );

        // Write-through; a failed write still lets the caller see the fresh result.
        if let Err(e) = self.cache.replace_all(&signatures).await {
            warn!(error = %e, "Failed to cache signatures");
        }

        Ok(signatures)
    }
}
