//! # ms-core
//!
//! Core domain models and ports for mailsig.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod mailbox;
pub mod ports;
pub mod signature;
pub mod token;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use mailbox::HostDiagnostics;
pub use signature::{FetchStatus, RawImage, RawSignature, Signature};
pub use token::DomainToken;
