use std::sync::Arc;

use tracing::info;

use ms_core::ports::{DomainTokenStorePort, TokenStoreError};
use ms_core::DomainToken;

/// Stores the domain token entered by the user.
///
/// Only surrounding whitespace is removed; the token is otherwise opaque and
/// overwrites whatever was stored before.
pub struct SaveDomainToken {
    token_store: Arc<dyn DomainTokenStorePort>,
}

impl SaveDomainToken {
    pub fn new(token_store: Arc<dyn DomainTokenStorePort>) -> Self {
        Self { token_store }
    }

    #[tracing::instrument(name = "usecase.save_domain_token.execute", skip_all)]
    pub async fn execute(&self, input: &str) -> Result<(), TokenStoreError> {
        let token = DomainToken::new(input.trim());
        self.token_store.save(&token).await?;
        info!("Domain token saved");
        Ok(())
    }
}
