//! # Revip Common
//!
//! Types shared by every crate of the workspace: the lookup data model,
//! the error enum, runtime configuration and the logging macros.

pub mod config;
pub mod domain;
pub mod error;
pub mod log;
pub mod target;

#[doc(hidden)]
pub use tracing;
