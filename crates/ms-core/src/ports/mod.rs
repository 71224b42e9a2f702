//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The use cases in `ms-app` only ever
//! see these traits; `ms-infra` and `ms-platform` provide the adapters and
//! the binary wires them together.

pub mod app_dirs;
pub mod errors;
mod presenter;
mod refresh;
mod signature_api;
mod signature_cache;
mod signature_normalizer;
mod token_store;

pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, SignatureApiError, SignatureCacheError, TokenStoreError};
pub use presenter::SignaturePresenterPort;
pub use refresh::{RefreshSchedulerPort, RefreshTriggerPort};
pub use signature_api::SignatureApiPort;
pub use signature_cache::SignatureCachePort;
pub use signature_normalizer::SignatureNormalizerPort;
pub use token_store::DomainTokenStorePort;
