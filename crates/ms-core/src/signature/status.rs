use serde::{Deserialize, Serialize};

/// Where the last set of signatures shown to the user came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchStatus {
    FromCache,
    FromNetwork,
    Error,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::FromCache => "from-cache",
            FetchStatus::FromNetwork => "from-network",
            FetchStatus::Error => "error",
        }
    }

    /// Human readable message shown next to the rendered signatures.
    pub fn message(&self) -> &'static str {
        match self {
            FetchStatus::FromCache => "Retrieved from cache.",
            FetchStatus::FromNetwork => "Retrieved from API.",
            FetchStatus::Error => "Failed to retrieve signatures.",
        }
    }
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
