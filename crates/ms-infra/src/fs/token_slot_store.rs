//! File-based domain token store
//!
//! Persists the single domain token slot to a plain file in the application
//! data directory. Last writer wins; there is no locking and no validation.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use ms_core::ports::{DomainTokenStorePort, TokenStoreError};
use ms_core::DomainToken;

pub const DEFAULT_TOKEN_FILE: &str = "domainToken";

pub struct FileDomainTokenStore {
    token_file_path: PathBuf,
}

impl FileDomainTokenStore {
    /// Create store with custom file path
    pub fn new(token_file_path: PathBuf) -> Self {
        Self { token_file_path }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            token_file_path: base_dir.join(DEFAULT_TOKEN_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.token_file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| TokenStoreError::Storage(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl DomainTokenStorePort for FileDomainTokenStore {
    async fn save(&self, token: &DomainToken) -> Result<(), TokenStoreError> {
        self.ensure_parent_dir().await?;

        let mut file = fs::File::create(&self.token_file_path)
            .await
            .map_err(|e| TokenStoreError::Storage(format!("Failed to create token file: {}", e)))?;

        file.write_all(token.as_str().as_bytes())
            .await
            .map_err(|e| TokenStoreError::Storage(format!("Failed to write token file: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| TokenStoreError::Storage(format!("Failed to sync token file: {}", e)))?;

        debug!(path = %self.token_file_path.display(), "Domain token saved");
        Ok(())
    }

    async fn load(&self) -> Result<Option<DomainToken>, TokenStoreError> {
        let content = match fs::read_to_string(&self.token_file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(TokenStoreError::Storage(format!(
                    "Failed to read token file: {}",
                    e
                )))
            }
        };

        let token = content.trim_end_matches(['\r', '\n']);
        if token.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(DomainToken::from(token)))
    }
}
