use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mailsig")]
#[command(about = "Fetch, cache and render mail signatures", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to config.toml in the data directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Store the domain token used for signature retrieval
    SaveToken {
        token: String,
    },
    /// Delete cached signatures so the next retrieval hits the service
    ClearCache,
    /// Retrieve signatures (cache first) and render them
    Get,
    /// Refresh signatures periodically until interrupted
    Run,
}
