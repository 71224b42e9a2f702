//! Use case for starting the periodic signature refresh

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, info_span, Instrument};

use ms_core::ports::{RefreshSchedulerPort, RefreshTriggerPort};

#[derive(Debug, thiserror::Error)]
pub enum StartSignatureRefreshError {
    #[error("Failed to start signature refresh: {0}")]
    StartFailed(String),
}

impl From<anyhow::Error> for StartSignatureRefreshError {
    fn from(err: anyhow::Error) -> Self {
        StartSignatureRefreshError::StartFailed(err.to_string())
    }
}

/// Arms the refresh scheduler with a trigger.
///
/// ## Behavior
/// - The first refresh happens one `period` after start, then every `period`
/// - Starting again replaces the previous schedule
pub struct StartSignatureRefresh {
    scheduler: Arc<dyn RefreshSchedulerPort>,
    trigger: Arc<dyn RefreshTriggerPort>,
}

impl StartSignatureRefresh {
    pub fn new(
        scheduler: Arc<dyn RefreshSchedulerPort>,
        trigger: Arc<dyn RefreshTriggerPort>,
    ) -> Self {
        Self { scheduler, trigger }
    }

    pub async fn execute(&self, period: Duration) -> Result<(), StartSignatureRefreshError> {
        let span = info_span!("usecase.start_signature_refresh.execute", period_secs = period.as_secs());

        async {
            self.scheduler.start(period, self.trigger.clone()).await?;
            info!("Signature refresh started");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
