use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

#[derive(Debug, Error)]
pub enum SignatureCacheError {
    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum SignatureApiError {
    #[error("request to signature service failed: {0}")]
    Transport(String),

    #[error("signature service responded with status {status}")]
    Status { status: u16 },

    #[error("invalid signature service response: {0}")]
    Decode(String),
}
