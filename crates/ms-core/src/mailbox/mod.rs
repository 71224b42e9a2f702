//! Mailbox environment facts sent along with every signature request.

use serde::{Deserialize, Serialize};

/// Diagnostic parameters describing the user's mailbox and host application.
///
/// The remote API uses them for auditing; they do not affect caching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostDiagnostics {
    pub email_address: String,
    pub host_name: String,
    pub host_version: String,
    pub manifest_version: String,
}
