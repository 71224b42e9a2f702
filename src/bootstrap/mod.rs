pub mod cli;
pub mod config;
pub mod init;
pub mod tracing;
pub mod wiring;

pub use cli::{Cli, Commands};
pub use config::load_config;
pub use init::resolve_config;
pub use wiring::wire_dependencies;
