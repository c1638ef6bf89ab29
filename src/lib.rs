//! page_audit library: single-page structural analysis
//!
//! Given a URL, this library fetches the document, extracts structural
//! signals (declared markup version, title, heading counts, login-form
//! presence, outbound links), classifies every link as same-site or
//! cross-site, and concurrently probes each one for reachability.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use page_audit::{Analyzer, ReqwestTransport};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = reqwest::Client::builder().build()?;
//! let analyzer = Analyzer::new(Arc::new(ReqwestTransport::new(client)));
//!
//! let report = analyzer.analyze("example.com").await?;
//! println!(
//!     "{}: {} internal / {} external link(s), {} inaccessible",
//!     report.title,
//!     report.internal_link_count,
//!     report.external_link_count,
//!     report.inaccessible_link_count
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod analyzer;
pub mod config;
mod error;
pub mod initialization;
mod transport;

// Re-export public API
pub use analyzer::{AnalysisResult, Analyzer, AnalyzerOptions, MarkupVersion};
pub use config::{Config, LogFormat, LogLevel};
pub use error::{AnalysisError, InitializationError};
pub use transport::{FetchResponse, ReqwestTransport, Transport, TransportError};
