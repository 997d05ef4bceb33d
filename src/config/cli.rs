//! Command-line interface definition.
//!
//! Lives in the library so the parser can be exercised from tests; `main.rs`
//! only calls `Cli::parse()` and dispatches.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, PAGESPEED_API_KEY_ENV, PAGESPEED_API_URL,
};
use crate::config::types::{Config, LogFormat, LogLevel, OutputFormat};

/// Command-line options for the `seo_audit` binary.
///
/// # Examples
///
/// ```bash
/// # Analyze one page
/// seo_audit analyze example.com
///
/// # JSON report written to a file, without PageSpeed
/// seo_audit analyze https://example.com/blog --format json --output report.json --skip-performance
///
/// # Compare competitors and write a sitemap of the analyzed URLs
/// seo_audit compare example.com competitor.com --sitemap sitemap.xml
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "seo_audit",
    version,
    about = "Analyzes on-page SEO signals of web pages and compares them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a single URL
    Analyze(AnalyzeArgs),
    /// Analyze several URLs and compare them
    Compare(CompareArgs),
}

/// Arguments of `seo_audit analyze`.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// URL to analyze (https:// is assumed when the scheme is missing)
    pub url: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments of `seo_audit compare`.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// URLs to compare (at least two)
    #[arg(required = true, num_args = 2..)]
    pub urls: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds (page fetch and PageSpeed call)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value sent with page fetches
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Google PageSpeed Insights API key
    #[arg(long, env = PAGESPEED_API_KEY_ENV, hide_env_values = true)]
    pub pagespeed_api_key: Option<String>,

    /// PageSpeed Insights endpoint
    #[arg(long, default_value = PAGESPEED_API_URL, hide = true)]
    pub pagespeed_endpoint: String,

    /// Do not call PageSpeed; performance scores are reported as 0
    #[arg(long)]
    pub skip_performance: bool,

    /// Write a sitemap.xml of the analyzed URLs to this path
    #[arg(long)]
    pub sitemap: Option<PathBuf>,

    /// Site root listed first in the sitemap (daily, priority 1.0)
    #[arg(long, requires = "sitemap")]
    pub sitemap_root: Option<String>,
}

impl From<CommonArgs> for Config {
    fn from(args: CommonArgs) -> Self {
        Config {
            log_level: args.log_level,
            log_format: args.log_format,
            timeout_seconds: args.timeout_seconds,
            user_agent: args.user_agent,
            pagespeed_api_key: args.pagespeed_api_key,
            pagespeed_endpoint: args.pagespeed_endpoint,
            skip_performance: args.skip_performance,
            output_format: args.format,
            output: args.output,
            sitemap: args.sitemap,
            sitemap_root: args.sitemap_root,
        }
    }
}

impl Command {
    /// Options shared by every subcommand.
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Analyze(args) => &args.common,
            Command::Compare(args) => &args.common,
        }
    }
}
