//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! **No business logic, no validation.** Missing values map to empty values;
//! the bootstrap layer decides what an empty value falls back to.

use std::path::PathBuf;

use crate::mailbox::HostDiagnostics;

/// Signature endpoint used when the configuration does not name one.
pub const DEFAULT_API_BASE_URL: &str =
    "https://creatioleadapi.azure-api.net/sharepoint/ListDomainToken";

/// Background refresh period: 30 minutes.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30 * 60;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote signature endpoint (may be empty - this is a fact, not an error)
    pub api_base_url: String,

    /// Per-request timeout in seconds, 0 means no timeout
    pub request_timeout_secs: u64,

    /// Mailbox facts forwarded to the remote API
    pub diagnostics: HostDiagnostics,

    /// SQLite database holding the signature cache
    pub database_path: PathBuf,

    /// File holding the domain token
    pub token_path: PathBuf,

    /// Directory the rendered signatures are written to
    pub output_dir: PathBuf,

    /// Background refresh period in seconds, 0 means unset
    pub refresh_interval_secs: u64,
}

fn str_at<'a>(value: &'a toml::Value, section: &str, key: &str) -> &'a str {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

fn u64_at(value: &toml::Value, section: &str, key: &str) -> u64 {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_integer())
        .unwrap_or(0)
        .max(0) as u64
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            api_base_url: str_at(toml_value, "api", "base_url").to_string(),
            request_timeout_secs: u64_at(toml_value, "api", "request_timeout_secs"),
            diagnostics: HostDiagnostics {
                email_address: str_at(toml_value, "mailbox", "email_address").to_string(),
                host_name: str_at(toml_value, "mailbox", "host_name").to_string(),
                host_version: str_at(toml_value, "mailbox", "host_version").to_string(),
                manifest_version: str_at(toml_value, "mailbox", "manifest_version").to_string(),
            },
            database_path: PathBuf::from(str_at(toml_value, "storage", "database_path")),
            token_path: PathBuf::from(str_at(toml_value, "storage", "token_path")),
            output_dir: PathBuf::from(str_at(toml_value, "presentation", "output_dir")),
            refresh_interval_secs: u64_at(toml_value, "refresh", "interval_secs"),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            request_timeout_secs: 0,
            diagnostics: HostDiagnostics::default(),
            database_path: PathBuf::new(),
            token_path: PathBuf::new(),
            output_dir: PathBuf::new(),
            refresh_interval_secs: 0,
        }
    }

    /// Create AppConfig with system-default paths for production use
    ///
    /// The base directory should be computed by the caller using platform-specific
    /// logic (e.g., `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 0,
            diagnostics: HostDiagnostics::default(),
            database_path: data_dir.join("signatures.db"),
            token_path: data_dir.join("domainToken"),
            output_dir: data_dir.join("rendered"),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [api]
            base_url = "https://example.test/signatures"
            request_timeout_secs = 20

            [mailbox]
            email_address = "jane@example.test"
            host_name = "Outlook"
            host_version = "16.0"
            manifest_version = "1.0.0.0"

            [storage]
            database_path = "/var/lib/mailsig/signatures.db"
            token_path = "/var/lib/mailsig/domainToken"

            [presentation]
            output_dir = "/var/lib/mailsig/rendered"

            [refresh]
            interval_secs = 60
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.api_base_url, "https://example.test/signatures");
        assert_eq!(config.request_timeout_secs, 20);
        assert_eq!(config.diagnostics.email_address, "jane@example.test");
        assert_eq!(config.diagnostics.host_name, "Outlook");
        assert_eq!(config.diagnostics.host_version, "16.0");
        assert_eq!(config.diagnostics.manifest_version, "1.0.0.0");
        assert_eq!(
            config.database_path,
            PathBuf::from("/var/lib/mailsig/signatures.db")
        );
        assert_eq!(config.token_path, PathBuf::from("/var/lib/mailsig/domainToken"));
        assert_eq!(config.output_dir, PathBuf::from("/var/lib/mailsig/rendered"));
        assert_eq!(config.refresh_interval_secs, 60);
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[api]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Empty values are valid "facts"
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_negative_numbers_map_to_unset() {
        let toml_value: Value = toml::from_str("[refresh]\ninterval_secs = -5\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.refresh_interval_secs, 0);
    }

    #[test]
    fn test_with_system_defaults_creates_valid_paths() {
        let data_dir = PathBuf::from("/tmp/test");
        let config = AppConfig::with_system_defaults(data_dir);

        assert_eq!(config.database_path, PathBuf::from("/tmp/test/signatures.db"));
        assert_eq!(config.token_path, PathBuf::from("/tmp/test/domainToken"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.refresh_interval_secs, 1800);
    }
}
