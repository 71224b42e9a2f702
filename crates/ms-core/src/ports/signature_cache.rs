use async_trait::async_trait;

use crate::ports::errors::SignatureCacheError;
use crate::signature::Signature;

/// Local persistent store holding the last fetched set of signatures.
#[async_trait]
pub trait SignatureCachePort: Send + Sync {
    /// Replace the whole cache with `signatures`.
    ///
    /// Existing records are removed before the first insert; each input record
    /// is stored with an identity equal to its position in `signatures`.
    async fn replace_all(&self, signatures: &[Signature]) -> Result<(), SignatureCacheError>;

    /// All cached signatures, in the order they were last written.
    async fn read_all(&self) -> Result<Vec<Signature>, SignatureCacheError>;

    /// Remove every cached signature.
    async fn clear(&self) -> Result<(), SignatureCacheError>;
}

#[cfg(test)]
mockall::mock! {
    pub SignatureCache {}

    #[async_trait]
    impl SignatureCachePort for SignatureCache {
        async fn replace_all(&self, signatures: &[Signature]) -> Result<(), SignatureCacheError>;
        async fn read_all(&self) -> Result<Vec<Signature>, SignatureCacheError>;
        async fn clear(&self) -> Result<(), SignatureCacheError>;
    }
}
