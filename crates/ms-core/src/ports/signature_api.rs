use async_trait::async_trait;

use crate::mailbox::HostDiagnostics;
use crate::ports::errors::SignatureApiError;
use crate::signature::RawSignature;
use crate::token::DomainToken;

/// Remote signature service.
#[async_trait]
pub trait SignatureApiPort: Send + Sync {
    /// Fetch the raw signatures the domain token grants access to.
    async fn fetch_signatures(
        &self,
        token: &DomainToken,
        diagnostics: &HostDiagnostics,
    ) -> Result<Vec<RawSignature>, SignatureApiError>;
}
