use async_trait::async_trait;

use crate::ports::errors::TokenStoreError;
use crate::token::DomainToken;

/// Durable single-slot storage for the domain token. Last writer wins.
#[async_trait]
pub trait DomainTokenStorePort: Send + Sync {
    /// Overwrite the stored token.
    async fn save(&self, token: &DomainToken) -> Result<(), TokenStoreError>;

    /// The stored token, or `None` when nothing was saved yet.
    async fn load(&self) -> Result<Option<DomainToken>, TokenStoreError>;
}

#[cfg(test)]
mockall::mock! {
    pub TokenStore {}

    #[async_trait]
    impl DomainTokenStorePort for TokenStore {
        async fn save(&self, token: &DomainToken) -> Result<(), TokenStoreError>;
        async fn load(&self) -> Result<Option<DomainToken>, TokenStoreError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_store_reports_saved_slot() {
        let mut store = MockTokenStore::new();
        store
            .expect_save()
            .withf(|token| token.as_str() == "T1")
            .times(1)
            .returning(|_| Ok(()));
        store
            .expect_load()
            .times(1)
            .returning(|| Ok(Some(DomainToken::from("T1"))));

        let port: &dyn DomainTokenStorePort = &store;
        port.save(&DomainToken::from("T1")).await.unwrap();

        assert_eq!(port.load().await.unwrap(), Some(DomainToken::from("T1")));
    }

    #[tokio::test]
    async fn mock_store_surfaces_storage_errors() {
        let mut store = MockTokenStore::new();
        store
            .expect_load()
            .returning(|| Err(TokenStoreError::Storage("permission denied".into())));

        let port: &dyn DomainTokenStorePort = &store;

        assert!(matches!(
            port.load().await,
            Err(TokenStoreError::Storage(msg)) if msg == "permission denied"
        ));
    }
}
