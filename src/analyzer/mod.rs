//! Page analysis engine.
//!
//! One analysis moves through a fixed sequence of phases: validating the
//! input URL, fetching the document, parsing it, walking the tree for
//! structural signals, resolving and classifying the outbound links, and
//! probing every classified link for reachability. A failure while
//! validating, fetching, or parsing aborts the analysis; no partial result
//! is ever produced.
//!
//! The DOM walk is strictly synchronous and completes before any probe is
//! issued — link classification and the check phase both need the final base
//! host and deduplicated link set. The probe phase is the only concurrency
//! zone; see [`probe`].

mod doctype;
mod links;
mod probe;
mod result;
mod walker;

pub use result::{AnalysisResult, MarkupVersion};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use reqwest::StatusCode;
use scraper::Html;
use url::Url;

use crate::config::{FETCH_TIMEOUT, MAX_CONCURRENT_PROBES, PROBE_TIMEOUT};
use crate::error::AnalysisError;
use crate::transport::Transport;
use links::LinkScope;

/// Tunable limits for an [`Analyzer`].
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Maximum number of link probes in flight at once.
    pub probe_width: usize,
    /// Per-request timeout for the page fetch.
    pub fetch_timeout: Duration,
    /// Per-request timeout for each link probe.
    pub probe_timeout: Duration,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            probe_width: MAX_CONCURRENT_PROBES,
            fetch_timeout: FETCH_TIMEOUT,
            probe_timeout: PROBE_TIMEOUT,
        }
    }
}

/// Analyzes single web pages through an injected [`Transport`].
///
/// The transport is the only collaborator; constructing an analyzer takes no
/// other resources and analyses hold no state between calls.
pub struct Analyzer {
    transport: Arc<dyn Transport>,
    options: AnalyzerOptions,
}

impl Analyzer {
    /// Creates an analyzer with default options.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_options(transport, AnalyzerOptions::default())
    }

    /// Creates an analyzer with explicit limits.
    pub fn with_options(transport: Arc<dyn Transport>, options: AnalyzerOptions) -> Self {
        Self { transport, options }
    }

    /// Runs one full page analysis for `raw_url`.
    ///
    /// The input may omit its scheme; `https://` is assumed. On success the
    /// returned [`AnalysisResult`] is complete and immutable. Per-link
    /// problems (malformed hrefs, failed probes) never fail the analysis;
    /// the four [`AnalysisError`] variants are the only fatal outcomes.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidUrl`] if the input has no usable host even
    ///   after scheme normalization
    /// - [`AnalysisError::Unreachable`] if the page fetch fails at the
    ///   transport level
    /// - [`AnalysisError::HttpStatus`] if the page answers with a status
    ///   >= 400
    /// - [`AnalysisError::Parse`] if the response body is not parseable text
    pub async fn analyze(&self, raw_url: &str) -> Result<AnalysisResult, AnalysisError> {
        info!("Starting page analysis for {raw_url}");

        let base = validate_url(raw_url)?;
        let html = self.fetch_document(&base).await?;

        // The parsed tree never crosses an await point; it is dropped before
        // the probe phase starts.
        let (markup_version, signals) = {
            let document = Html::parse_document(&html);
            (
                doctype::detect_markup_version(&document),
                walker::walk_document(&document),
            )
        };
        debug!(
            "Walked document: title {:?}, {} raw link(s)",
            signals.title,
            signals.raw_links.len()
        );

        let classified = links::classify_links(&base, &signals.raw_links);
        let internal_link_count = classified
            .iter()
            .filter(|link| link.scope == LinkScope::Internal)
            .count();
        let external_link_count = classified.len() - internal_link_count;

        let inaccessible_link_count = probe::check_links(
            Arc::clone(&self.transport),
            &classified,
            self.options.probe_width,
            self.options.probe_timeout,
        )
        .await;

        let result = AnalysisResult {
            markup_version,
            title: signals.title,
            headings: signals.headings,
            internal_link_count,
            external_link_count,
            inaccessible_link_count,
            login_form_present: signals.login_form,
        };

        info!(
            "Page analysis complete: {}, {} internal / {} external link(s), {} inaccessible, login form: {}",
            result.markup_version,
            result.internal_link_count,
            result.external_link_count,
            result.inaccessible_link_count,
            result.login_form_present
        );

        Ok(result)
    }

    /// Fetches the page and returns its body as text.
    async fn fetch_document(&self, base: &Url) -> Result<String, AnalysisError> {
        debug!("Fetching {base}");
        let response = self
            .transport
            .get(base.as_str(), self.options.fetch_timeout)
            .await?;
        debug!("Fetched {base} with status {}", response.status);

        if response.status >= 400 {
            let reason = StatusCode::from_u16(response.status)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("");
            return Err(AnalysisError::HttpStatus {
                status: response.status,
                reason,
            });
        }

        String::from_utf8(response.body).map_err(|e| AnalysisError::Parse(e.to_string()))
    }
}

/// Validates the input and normalizes it into the analysis base URL.
///
/// Prefixes `https://` when neither `http://` nor `https://` is present.
/// The normalized string must parse as an absolute URL with a non-empty
/// host; anything else is an [`AnalysisError::InvalidUrl`].
fn validate_url(raw_url: &str) -> Result<Url, AnalysisError> {
    let normalized = if raw_url.starts_with("http://") || raw_url.starts_with("https://") {
        raw_url.to_string()
    } else {
        format!("https://{raw_url}")
    };

    let parsed = Url::parse(&normalized).map_err(|e| AnalysisError::InvalidUrl {
        url: raw_url.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(AnalysisError::InvalidUrl {
            url: raw_url.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::{ProbeBehavior, StaticTransport};
    use std::sync::atomic::Ordering;

    const SCENARIO_PAGE: &str = concat!(
        "<!DOCTYPE html><title>Test Page</title><h1>A</h1><h2>B</h2>",
        r#"<a href="/internal">i</a><a href="https://external.com/x">e</a>"#,
        r#"<input type="password">"#
    );

    fn scenario_transport() -> Arc<StaticTransport> {
        Arc::new(
            StaticTransport::new()
                .with_page("https://example.com/", 200, SCENARIO_PAGE)
                .with_probe("https://example.com/internal", ProbeBehavior::Status(200))
                .with_probe("https://external.com/x", ProbeBehavior::Status(404)),
        )
    }

    #[test]
    fn test_validate_url_assumes_https_scheme() {
        let url = validate_url("example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_validate_url_preserves_explicit_scheme() {
        let url = validate_url("http://example.com/page").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_validate_url_rejects_garbage() {
        assert!(matches!(
            validate_url("not a valid url!!!"),
            Err(AnalysisError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_validate_url_rejects_missing_host() {
        assert!(matches!(
            validate_url("https://"),
            Err(AnalysisError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_scenario_document_full_analysis() {
        let analyzer = Analyzer::new(scenario_transport());
        let result = analyzer.analyze("https://example.com/").await.unwrap();

        assert_eq!(result.markup_version, MarkupVersion::Html5);
        assert_eq!(result.title, "Test Page");
        assert_eq!(result.headings.get("H1"), Some(&1));
        assert_eq!(result.headings.get("H2"), Some(&1));
        assert_eq!(result.headings.len(), 2);
        assert_eq!(result.internal_link_count, 1);
        assert_eq!(result.external_link_count, 1);
        assert_eq!(result.inaccessible_link_count, 1);
        assert!(result.login_form_present);
    }

    #[tokio::test]
    async fn test_analysis_is_idempotent_against_static_oracle() {
        let analyzer = Analyzer::new(scenario_transport());
        let first = analyzer.analyze("https://example.com/").await.unwrap();
        let second = analyzer.analyze("https://example.com/").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_error_status_fetch_fails_without_result() {
        let transport =
            Arc::new(StaticTransport::new().with_page("https://example.com/", 404, ""));
        let analyzer = Analyzer::new(transport);
        let err = analyzer.analyze("https://example.com/").await.unwrap_err();
        match err {
            AnalysisError::HttpStatus { status, reason } => {
                assert_eq!(status, 404);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_page_fails_without_result() {
        let analyzer = Analyzer::new(Arc::new(StaticTransport::new()));
        let err = analyzer.analyze("https://example.com/").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Unreachable(_)));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_a_parse_error() {
        let transport = Arc::new(StaticTransport::new().with_page_bytes(
            "https://example.com/",
            200,
            vec![0xff, 0xfe, 0xfd],
        ));
        let analyzer = Analyzer::new(transport);
        let err = analyzer.analyze("https://example.com/").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[tokio::test]
    async fn test_document_without_links_issues_no_probes() {
        let transport = Arc::new(StaticTransport::new().with_page(
            "https://example.com/",
            200,
            "<!DOCTYPE html><title>Bare</title><h1>only text</h1>",
        ));
        let analyzer = Analyzer::new(Arc::clone(&transport) as Arc<dyn Transport>);
        let result = analyzer.analyze("https://example.com/").await.unwrap();

        assert_eq!(result.internal_link_count, 0);
        assert_eq!(result.external_link_count, 0);
        assert_eq!(result.inaccessible_link_count, 0);
        assert_eq!(transport.head_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_duplicate_and_empty_hrefs_follow_dedup_rules() {
        let page = concat!(
            r#"<a href="/a">1</a><a href="/a">2</a><a href="">3</a>"#,
            r#"<a href="https://example.com/a">4</a>"#
        );
        let transport = Arc::new(
            StaticTransport::new()
                .with_page("https://example.com/", 200, page)
                .with_probe("https://example.com/a", ProbeBehavior::Status(200)),
        );
        let analyzer = Analyzer::new(transport);
        let result = analyzer.analyze("https://example.com/").await.unwrap();

        // "/a" collapses with its duplicate, the empty href is skipped, and
        // the absolute form of the same target is counted separately.
        assert_eq!(result.internal_link_count, 2);
        assert_eq!(result.external_link_count, 0);
        assert_eq!(result.inaccessible_link_count, 0);
    }
}
