use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Something the refresh scheduler can fire.
#[async_trait]
pub trait RefreshTriggerPort: Send + Sync {
    async fn trigger(&self);
}

/// Recurring, unconditional trigger.
///
/// The first tick happens one `period` after `start`. Starting again replaces
/// the running schedule.
#[async_trait]
pub trait RefreshSchedulerPort: Send + Sync {
    async fn start(
        &self,
        period: Duration,
        trigger: Arc<dyn RefreshTriggerPort>,
    ) -> anyhow::Result<()>;

    async fn stop(&self) -> anyhow::Result<()>;

    async fn is_running(&self) -> bool;
}
