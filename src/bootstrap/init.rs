//! Startup resolution of configuration defaults.

use std::path::{Path, PathBuf};

use ms_core::config::AppConfig;

/// Name of the configuration file looked up in the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn default_config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Fill every empty value of `loaded` from the system defaults rooted at `data_dir`.
///
/// Relative storage paths are taken relative to `data_dir`. Mailbox
/// diagnostics have no default and are forwarded as configured.
pub fn resolve_config(loaded: AppConfig, data_dir: &Path) -> AppConfig {
    let defaults = AppConfig::with_system_defaults(data_dir.to_path_buf());

    let path_or = |configured: PathBuf, default: PathBuf| {
        if configured.as_os_str().is_empty() {
            default
        } else if configured.is_relative() {
            data_dir.join(configured)
        } else {
            configured
        }
    };

    AppConfig {
        api_base_url: if loaded.api_base_url.trim().is_empty() {
            defaults.api_base_url
        } else {
            loaded.api_base_url
        },
        request_timeout_secs: loaded.request_timeout_secs,
        diagnostics: loaded.diagnostics,
        database_path: path_or(loaded.database_path, defaults.database_path),
        token_path: path_or(loaded.token_path, defaults.token_path),
        output_dir: path_or(loaded.output_dir, defaults.output_dir),
        refresh_interval_secs: if loaded.refresh_interval_secs == 0 {
            defaults.refresh_interval_secs
        } else {
            loaded.refresh_interval_secs
        },
    }
}
