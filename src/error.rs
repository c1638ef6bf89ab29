//! Error type definitions.
//!
//! This module defines the fatal analysis error taxonomy and the
//! initialization errors surfaced during startup.
//!
//! The four `AnalysisError` variants are fatal for the whole analysis: no
//! `AnalysisResult` is produced when one occurs. Per-link failures (malformed
//! hrefs, failed probes) are handled locally in the analyzer and never
//! surface here.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::transport::TransportError;

/// Fatal failures of a page analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input could not be turned into a usable absolute URL, even after
    /// scheme normalization.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl {
        /// The raw input as provided by the caller.
        url: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// The target page could not be reached at the transport level.
    #[error("unable to reach URL: {0}")]
    Unreachable(#[from] TransportError),

    /// The target page answered with an error status (>= 400).
    #[error("HTTP error: {status} {reason}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical status text, e.g. "Not Found".
        reason: &'static str,
    },

    /// The fetched document could not be parsed.
    #[error("failed to parse document: {0}")]
    Parse(String),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message() {
        let err = AnalysisError::InvalidUrl {
            url: "http://".to_string(),
            reason: "empty host".to_string(),
        };
        assert_eq!(err.to_string(), "invalid URL \"http://\": empty host");
    }

    #[test]
    fn test_http_status_message_carries_status_and_text() {
        let err = AnalysisError::HttpStatus {
            status: 404,
            reason: "Not Found",
        };
        assert_eq!(err.to_string(), "HTTP error: 404 Not Found");
    }

    #[test]
    fn test_unreachable_message_wraps_transport_error() {
        let err = AnalysisError::from(TransportError::Timeout);
        assert_eq!(err.to_string(), "unable to reach URL: request timed out");
    }

    #[test]
    fn test_parse_message() {
        let err = AnalysisError::Parse("invalid utf-8".to_string());
        assert_eq!(err.to_string(), "failed to parse document: invalid utf-8");
    }
}
