//! # Application Dependencies
//!
//! This module defines the dependency grouping for App construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;

use ms_core::ports::*;
use ms_core::HostDiagnostics;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Signature dependencies
    pub signature_cache: Arc<dyn SignatureCachePort>,
    pub signature_api: Arc<dyn SignatureApiPort>,
    pub normalizer: Arc<dyn SignatureNormalizerPort>,

    // Token dependencies
    pub token_store: Arc<dyn DomainTokenStorePort>,

    // UI dependencies
    pub presenter: Arc<dyn SignaturePresenterPort>,

    // Runtime dependencies
    pub refresh_scheduler: Arc<dyn RefreshSchedulerPort>,

    // Facts forwarded with every remote request
    pub diagnostics: HostDiagnostics,
}
