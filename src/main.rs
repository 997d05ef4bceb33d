//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::process;

use seo_audit::config::{Cli, Command};
use seo_audit::initialization::init_logger_with;
use seo_audit::{run_analyze, run_compare, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting PAGESPEED_API_KEY in .env without exporting it manually
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    let common = cli.command.common();
    init_logger_with(common.log_level.clone().into(), common.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match cli.command {
        Command::Analyze(args) => run_analyze(Config::from(args.common), &args.url).await,
        Command::Compare(args) => run_compare(Config::from(args.common), &args.urls).await,
    };

    match outcome {
        Ok(report) => {
            info!(
                "Processed {} URL{} ({} succeeded, {} failed) in {:.1}s",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            if let Some(path) = report.output {
                eprintln!("Report written to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
