//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use page_audit::initialization::{init_client, init_logger_with};
use page_audit::{AnalysisResult, Analyzer, AnalyzerOptions, Config, ReqwestTransport};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let timeout = Duration::from_secs(config.timeout_seconds);
    let analyzer = Analyzer::with_options(
        Arc::new(ReqwestTransport::new(client)),
        AnalyzerOptions {
            probe_width: config.probe_concurrency,
            fetch_timeout: timeout,
            probe_timeout: timeout,
        },
    );

    match analyzer.analyze(&config.url).await {
        Ok(report) => {
            if config.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .context("Failed to serialize analysis result")?
                );
            } else {
                print_report(&config.url, &report);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("page_audit error: {e}");
            process::exit(1);
        }
    }
}

/// Prints a human-readable report for one analyzed page.
fn print_report(url: &str, report: &AnalysisResult) {
    println!("Analysis of {url}");
    println!("  Markup version:     {}", report.markup_version);
    println!(
        "  Title:              {}",
        if report.title.is_empty() {
            "(none)"
        } else {
            report.title.as_str()
        }
    );
    if report.headings.is_empty() {
        println!("  Headings:           (none)");
    } else {
        let summary: Vec<String> = report
            .headings
            .iter()
            .map(|(level, count)| format!("{level}: {count}"))
            .collect();
        println!("  Headings:           {}", summary.join(", "));
    }
    println!("  Internal links:     {}", report.internal_link_count);
    println!("  External links:     {}", report.external_link_count);
    println!("  Inaccessible links: {}", report.inaccessible_link_count);
    println!(
        "  Login form:         {}",
        if report.login_form_present { "yes" } else { "no" }
    );
}
