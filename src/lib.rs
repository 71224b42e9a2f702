//! mailsig host process: configuration, logging, wiring and the command loop.

pub mod bootstrap;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use tracing::{error, info, info_span, Instrument};

use ms_app::App;
use ms_core::config::AppConfig;
use ms_core::ports::AppDirsPort;
use ms_platform::DirsAppDirsAdapter;

use bootstrap::init::default_config_path;
use bootstrap::{load_config, resolve_config, wire_dependencies, Cli, Commands};

/// Load the configuration named on the command line, or the default one.
///
/// An explicitly named file must exist; a missing default file means all defaults.
fn load_app_config(explicit: Option<PathBuf>, data_dir: &Path) -> anyhow::Result<AppConfig> {
    let loaded = match explicit {
        Some(path) => load_config(&path)?,
        None => {
            let path = default_config_path(data_dir);
            if path.exists() {
                load_config(&path)?
            } else {
                AppConfig::empty()
            }
        }
    };
    Ok(resolve_config(loaded, data_dir))
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application data directory")?;

    bootstrap::tracing::init_tracing_subscriber(&app_dirs.logs_dir())?;

    let config = load_app_config(cli.config, &app_dirs.app_data_root)?;
    let deps = wire_dependencies(&config)?;
    let app = App::new(deps);

    execute(&app, cli.command, &config).await
}

async fn execute(app: &App, command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Commands::SaveToken { token } => {
            app.usecases().save_domain_token().execute(&token).await?;
        }
        Commands::ClearCache => {
            app.usecases().clear_signature_cache().execute().await?;
        }
        Commands::Get => {
            let fetch = app.usecases().refresh_signatures().execute().await?;
            println!("{}", fetch.status.message());
            for signature in &fetch.signatures {
                println!("- {}", signature.name);
            }
        }
        Commands::Run => {
            let period = Duration::from_secs(config.refresh_interval_secs);
            run_until_interrupted(app, period)
                .instrument(info_span!("mailsig.run", period_secs = period.as_secs()))
                .await?;
        }
    }
    Ok(())
}

async fn run_until_interrupted(app: &App, period: Duration) -> anyhow::Result<()> {
    app.usecases().start_signature_refresh().execute(period).await?;
    info!("Signature refresh running, press Ctrl+C to stop");

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }

    app.deps.refresh_scheduler.stop().await?;
    Ok(())
}
