pub mod app_dirs;
pub mod runtime;

pub use app_dirs::DirsAppDirsAdapter;
pub use runtime::IntervalRefreshScheduler;
