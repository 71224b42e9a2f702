//! Application runtime and use case accessors.

use std::sync::Arc;

use crate::usecases::{
    ClearSignatureCache, GetSignatures, RefreshSignatures, SaveDomainToken,
    StartSignatureRefresh,
};
use crate::AppDeps;

/// The application runtime.
///
/// Owns the injected ports and the single [`GetSignatures`] instance so every
/// caller, scheduled or manual, shares the same in-flight guard.
pub struct App {
    pub deps: AppDeps,
    get_signatures: Arc<GetSignatures>,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        let get_signatures = Arc::new(GetSignatures::new(
            deps.signature_cache.clone(),
            deps.token_store.clone(),
            deps.signature_api.clone(),
            deps.normalizer.clone(),
            deps.diagnostics.clone(),
        ));
        Self {
            deps,
            get_signatures,
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { app: self }
    }
}

/// Use case accessor; each call hands out a use case wired with this app's ports.
pub struct UseCases<'a> {
    app: &'a App,
}

impl<'a> UseCases<'a> {
    pub fn get_signatures(&self) -> Arc<GetSignatures> {
        self.app.get_signatures.clone()
    }

    pub fn refresh_signatures(&self) -> RefreshSignatures {
        RefreshSignatures::new(
            self.app.get_signatures.clone(),
            self.app.deps.presenter.clone(),
        )
    }

    pub fn save_domain_token(&self) -> SaveDomainToken {
        SaveDomainToken::new(self.app.deps.token_store.clone())
    }

    pub fn clear_signature_cache(&self) -> ClearSignatureCache {
        ClearSignatureCache::new(
            self.app.deps.signature_cache.clone(),
            self.app.deps.presenter.clone(),
        )
    }

    pub fn start_signature_refresh(&self) -> StartSignatureRefresh {
        StartSignatureRefresh::new(
            self.app.deps.refresh_scheduler.clone(),
            Arc::new(self.refresh_signatures()),
        )
    }
}
