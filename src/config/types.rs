//! Configuration types and CLI options.
//!
//! This module defines the `Config` struct parsed from the command line and
//! the enums used for logging configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS, MAX_CONCURRENT_PROBES,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options for a page analysis run.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "page_audit",
    version,
    about = "Analyzes a web page: markup version, title, headings, links, and link reachability"
)]
pub struct Config {
    /// URL of the page to analyze (scheme optional; https:// is assumed)
    pub url: String,

    /// Emit the analysis result as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Maximum number of link probes in flight at once
    #[arg(long, default_value_t = MAX_CONCURRENT_PROBES)]
    pub probe_concurrency: usize,

    /// Per-request timeout in seconds (page fetch and link probes)
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::parse_from(["page_audit", "https://example.com"]);
        assert_eq!(config.url, "https://example.com");
        assert!(!config.json);
        assert_eq!(config.probe_concurrency, MAX_CONCURRENT_PROBES);
        assert_eq!(config.timeout_seconds, FETCH_TIMEOUT_SECS);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_config_flags() {
        let config = Config::parse_from([
            "page_audit",
            "example.com",
            "--json",
            "--probe-concurrency",
            "3",
            "--timeout-seconds",
            "5",
        ]);
        assert!(config.json);
        assert_eq!(config.probe_concurrency, 3);
        assert_eq!(config.timeout_seconds, 5);
    }
}
