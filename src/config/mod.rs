//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, scoring thresholds)
//! - CLI option enums and the library `Config` struct
//! - The `clap` command-line definition

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{AnalyzeArgs, Cli, Command, CommonArgs, CompareArgs};
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat};
