//! Signature use cases
//!
//! [user action | RefreshScheduler]
//!         ↓
//! RefreshSignatures → GetSignatures → SignaturePresenterPort
//!
//! SaveDomainToken and ClearSignatureCache are the two direct user triggers.

pub mod clear_signature_cache;
pub mod get_signatures;
pub mod refresh_signatures;
pub mod save_domain_token;
pub mod start_signature_refresh;

#[cfg(test)]
pub(crate) mod test_support;

pub use clear_signature_cache::{ClearSignatureCache, CACHE_CLEARED_MESSAGE};
pub use get_signatures::{FetchPhase, GetSignatures, GetSignaturesError, SignatureFetch};
pub use refresh_signatures::RefreshSignatures;
pub use save_domain_token::SaveDomainToken;
pub use start_signature_refresh::{StartSignatureRefresh, StartSignatureRefreshError};
