use clap::Parser;

use mailsig_lib::bootstrap::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = mailsig_lib::run(cli).await {
        tracing::error!(error = %format!("{e:#}"), "mailsig failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
