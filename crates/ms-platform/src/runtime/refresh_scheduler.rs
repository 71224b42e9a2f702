use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, info_span, Instrument};

use ms_core::ports::{RefreshSchedulerPort, RefreshTriggerPort};

/// Fires a trigger at a fixed period on a background tokio task.
///
/// Ticks are unconditional. Each tick awaits the trigger, so overlap
/// protection belongs to whatever the trigger calls into.
pub struct IntervalRefreshScheduler {
    task: Mutex<Option<tokio::task::AbortHandle>>,
}

impl IntervalRefreshScheduler {
    pub fn new() -> Self {
        Self {
            task: Mutex::new(None),
        }
    }
}

impl Default for IntervalRefreshScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RefreshSchedulerPort for IntervalRefreshScheduler {
    async fn start(
        &self,
        period: Duration,
        trigger: Arc<dyn RefreshTriggerPort>,
    ) -> anyhow::Result<()> {
        if period.is_zero() {
            return Err(anyhow::anyhow!("Refresh period must be greater than zero"));
        }

        let mut task_guard = self.task.lock().await;
        if let Some(existing) = task_guard.take() {
            existing.abort();
            debug!("Replaced running refresh schedule");
        }

        let handle = tokio::spawn(
            async move {
                let mut ticker = interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    debug!("Refresh tick");
                    trigger.trigger().await;
                }
            }
            .instrument(info_span!("platform.refresh_scheduler")),
        );

        *task_guard = Some(handle.abort_handle());
        info!(period_secs = period.as_secs(), "Signature refresh scheduled");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        if let Some(handle) = self.task.lock().await.take() {
            handle.abort();
            info!("Signature refresh stopped");
        }
        Ok(())
    }

    async fn is_running(&self) -> bool {
        self.task
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    struct CountingTrigger {
        calls: AtomicUsize,
    }

    impl CountingTrigger {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl RefreshTriggerPort for CountingTrigger {
        async fn trigger(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counting_trigger() -> Arc<CountingTrigger> {
        Arc::new(CountingTrigger {
            calls: AtomicUsize::new(0),
        })
    }

    // Paused clock auto-advances to the next timer while the test sleeps,
    // so scheduled ticks run before the sleep returns.
    #[tokio::test(start_paused = true)]
    async fn first_tick_happens_one_period_after_start() -> anyhow::Result<()> {
        let scheduler = IntervalRefreshScheduler::new();
        let trigger = counting_trigger();

        scheduler
            .start(Duration::from_secs(1800), trigger.clone())
            .await?;
        assert_eq!(trigger.calls(), 0);

        sleep(Duration::from_secs(1799)).await;
        assert_eq!(trigger.calls(), 0);

        sleep(Duration::from_secs(2)).await;
        assert_eq!(trigger.calls(), 1);

        sleep(Duration::from_secs(1800)).await;
        assert_eq!(trigger.calls(), 2);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_future_ticks() -> anyhow::Result<()> {
        let scheduler = IntervalRefreshScheduler::new();
        let trigger = counting_trigger();

        scheduler.start(Duration::from_secs(10), trigger.clone()).await?;
        assert!(scheduler.is_running().await);

        scheduler.stop().await?;
        sleep(Duration::from_secs(60)).await;

        assert_eq!(trigger.calls(), 0);
        assert!(!scheduler.is_running().await);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_existing_schedule() -> anyhow::Result<()> {
        let scheduler = IntervalRefreshScheduler::new();
        let first = counting_trigger();
        let second = counting_trigger();

        scheduler.start(Duration::from_secs(10), first.clone()).await?;
        scheduler.start(Duration::from_secs(10), second.clone()).await?;
        sleep(Duration::from_secs(11)).await;

        assert_eq!(first.calls(), 0);
        assert_eq!(second.calls(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn zero_period_is_rejected() {
        let scheduler = IntervalRefreshScheduler::new();

        let result = scheduler.start(Duration::ZERO, counting_trigger()).await;

        assert!(result.is_err());
        assert!(!scheduler.is_running().await);
    }
}
