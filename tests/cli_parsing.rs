//! Tests for CLI subcommand parsing.

use clap::Parser;
use seo_audit::config::{Cli, Command, LogFormat, LogLevel, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use seo_audit::{Config, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_cli_analyze_command_defaults() {
    let args = ["seo_audit", "analyze", "example.com"];
    let cli = Cli::try_parse_from(args.iter()).expect("Should parse analyze command");

    match cli.command {
        Command::Analyze(cmd) => {
            assert_eq!(cmd.url, "example.com");
            // LogLevel and LogFormat don't implement PartialEq, so we compare via conversion
            assert_eq!(
                log::LevelFilter::from(cmd.common.log_level.clone()),
                log::LevelFilter::from(LogLevel::Info)
            );
            match cmd.common.log_format {
                LogFormat::Plain => {}
                _ => panic!("Should be Plain format"),
            }
            assert_eq!(cmd.common.format, OutputFormat::Plain);
            assert_eq!(cmd.common.timeout_seconds, DEFAULT_TIMEOUT_SECS);
            assert_eq!(cmd.common.user_agent, DEFAULT_USER_AGENT);
            assert!(!cmd.common.skip_performance);
            assert_eq!(cmd.common.output, None);
            assert_eq!(cmd.common.sitemap, None);
        }
        _ => panic!("Should parse as Analyze command"),
    }
}

#[test]
fn test_cli_analyze_command_with_options() {
    let args = vec![
        "seo_audit",
        "analyze",
        "https://example.com/blog",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--format",
        "json",
        "--output",
        "report.json",
        "--timeout-seconds",
        "15",
        "--user-agent",
        "MyBot/2.0",
        "--pagespeed-api-key",
        "abc123",
        "--skip-performance",
        "--sitemap",
        "sitemap.xml",
        "--sitemap-root",
        "https://audit.example.com/",
    ];
    let cli = Cli::try_parse_from(args.iter()).expect("Should parse analyze command");

    let Command::Analyze(cmd) = cli.command else {
        panic!("Should parse as Analyze command");
    };
    assert_eq!(
        log::LevelFilter::from(cmd.common.log_level.clone()),
        log::LevelFilter::Debug
    );

    let config = Config::from(cmd.common);
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.output, Some(PathBuf::from("report.json")));
    assert_eq!(config.timeout_seconds, 15);
    assert_eq!(config.user_agent, "MyBot/2.0");
    assert_eq!(config.pagespeed_api_key.as_deref(), Some("abc123"));
    assert!(config.skip_performance);
    assert_eq!(config.sitemap, Some(PathBuf::from("sitemap.xml")));
    assert_eq!(
        config.sitemap_root.as_deref(),
        Some("https://audit.example.com/")
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_compare_command_parsing() {
    let args = ["seo_audit", "compare", "a.com", "b.com", "c.com", "-o", "out.txt"];
    let cli = Cli::try_parse_from(args.iter()).expect("Should parse compare command");

    match cli.command {
        Command::Compare(cmd) => {
            assert_eq!(cmd.urls, vec!["a.com", "b.com", "c.com"]);
            assert_eq!(cmd.common.output, Some(PathBuf::from("out.txt")));
        }
        _ => panic!("Should parse as Compare command"),
    }
}

#[test]
fn test_cli_compare_requires_two_urls() {
    let args = ["seo_audit", "compare", "a.com"];
    assert!(Cli::try_parse_from(args.iter()).is_err());
}

#[test]
fn test_cli_missing_subcommand_error() {
    let args = ["seo_audit", "example.com"];
    let result = Cli::try_parse_from(args.iter());

    assert!(result.is_err(), "Should fail when subcommand is missing");
    let error_msg = result.unwrap_err().to_string();
    assert!(
        error_msg.contains("subcommand") || error_msg.contains("unrecognized"),
        "Error message should mention subcommand: {}",
        error_msg
    );
}

#[test]
fn test_cli_sitemap_root_requires_sitemap() {
    let args = [
        "seo_audit",
        "analyze",
        "example.com",
        "--sitemap-root",
        "https://audit.example.com/",
    ];
    assert!(Cli::try_parse_from(args.iter()).is_err());
}

#[test]
fn test_cli_invalid_format_error() {
    let args = ["seo_audit", "analyze", "example.com", "--format", "pdf"];
    let result = Cli::try_parse_from(args.iter());
    assert!(result.is_err(), "Should reject unknown report format");
    assert!(result.unwrap_err().to_string().contains("pdf"));
}
