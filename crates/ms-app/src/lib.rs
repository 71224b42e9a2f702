//! mailsig Application Orchestration Layer
//!
//! This crate contains the signature use cases and the dependency grouping
//! the binary uses to wire them.

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::{App, UseCases};
pub use deps::AppDeps;
