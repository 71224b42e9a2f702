mod refresh_scheduler;

pub use refresh_scheduler::IntervalRefreshScheduler;
