//! Link resolution and same-site classification.

use std::collections::HashSet;

use log::warn;
use url::Url;

/// Whether a resolved link points at the analyzed page's own host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkScope {
    /// Same host (and port) as the analyzed page.
    Internal,
    /// Any other host, or no host at all (e.g. `mailto:`).
    External,
}

/// A link that survived resolution, still carrying the raw string that
/// produced it.
#[derive(Debug, Clone)]
pub(crate) struct ClassifiedLink {
    /// The href value as authored in the document.
    pub raw: String,
    /// The absolute form after resolution against the base URL.
    pub resolved: Url,
    /// Same-site or cross-site.
    pub scope: LinkScope,
}

/// Resolves and classifies the raw link sequence against the page's base URL.
///
/// Empty raw strings are skipped. Deduplication uses the raw string as the
/// seen-key, case-sensitive and before resolution: two different raw hrefs
/// resolving to the same target are both kept. A raw string that fails to
/// parse as a URL reference (absolute or relative to the base) is dropped
/// from all further counts with a warning.
pub(crate) fn classify_links(base: &Url, raw_links: &[String]) -> Vec<ClassifiedLink> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut classified = Vec::new();

    for raw in raw_links {
        if raw.is_empty() || !seen.insert(raw.as_str()) {
            continue;
        }
        let resolved = match Url::parse(raw) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => match base.join(raw) {
                Ok(url) => url,
                Err(e) => {
                    warn!("Skipping malformed link {raw:?}: {e}");
                    continue;
                }
            },
            Err(e) => {
                warn!("Skipping malformed link {raw:?}: {e}");
                continue;
            }
        };
        let scope = if resolved.host_str() == base.host_str() && resolved.port() == base.port() {
            LinkScope::Internal
        } else {
            LinkScope::External
        };
        classified.push(ClassifiedLink {
            raw: raw.clone(),
            resolved,
            scope,
        });
    }

    classified
}
