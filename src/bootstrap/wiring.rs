//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - Create infra implementations (database, token file, HTTP client, renderer)
//! - Create platform implementations (refresh scheduler)
//! - Inject all dependencies into [`AppDeps`]
//!
//! ## Prohibited
//!
//! **No business logic and no configuration defaults.** The configuration is
//! already resolved when it gets here.
//!
//! This is the only place allowed to depend on ms-infra, ms-platform and
//! ms-app at the same time.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use ms_app::AppDeps;
use ms_core::config::AppConfig;
use ms_infra::db::pool::{init_db_pool, DbPool};
use ms_infra::db::DieselSqliteExecutor;
use ms_infra::{
    CidImageNormalizer, DieselSignatureCacheRepository, FileDomainTokenStore,
    HtmlDirectoryPresenter, HttpSignatureApi,
};
use ms_platform::IntervalRefreshScheduler;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),

    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Create the SQLite connection pool, creating the parent directory and
/// running migrations.
fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {}", e)))
}

/// Build every adapter from a resolved configuration.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let pool = create_db_pool(&config.database_path)?;
    let signature_cache = DieselSignatureCacheRepository::new(DieselSqliteExecutor::new(pool));

    let timeout = (config.request_timeout_secs > 0)
        .then(|| Duration::from_secs(config.request_timeout_secs));
    let signature_api = HttpSignatureApi::new(config.api_base_url.clone(), timeout)
        .map_err(|e| WiringError::HttpClientInit(e.to_string()))?;

    tracing::debug!(
        database = %config.database_path.display(),
        token = %config.token_path.display(),
        output = %config.output_dir.display(),
        "Dependencies wired"
    );

    Ok(AppDeps {
        signature_cache: Arc::new(signature_cache),
        signature_api: Arc::new(signature_api),
        normalizer: Arc::new(CidImageNormalizer::new()),
        token_store: Arc::new(FileDomainTokenStore::new(config.token_path.clone())),
        presenter: Arc::new(HtmlDirectoryPresenter::new(config.output_dir.clone())),
        refresh_scheduler: Arc::new(IntervalRefreshScheduler::new()),
        diagnostics: config.diagnostics.clone(),
    })
}
