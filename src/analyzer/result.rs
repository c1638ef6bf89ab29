//! Analysis result types.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Declared markup version of an analyzed page, inferred from its doctype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkupVersion {
    /// A plain `<!DOCTYPE html>` declaration (or any other declaration
    /// mentioning "html" without a more specific match).
    #[serde(rename = "HTML 5")]
    Html5,
    /// An HTML 4.01 public identifier.
    #[serde(rename = "HTML 4.01")]
    Html401,
    /// An XHTML public identifier.
    #[serde(rename = "XHTML")]
    Xhtml,
    /// No doctype declaration, or one matching none of the known patterns.
    #[serde(rename = "Unknown")]
    Unknown,
}

impl MarkupVersion {
    /// Returns the human-readable label for this markup version.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkupVersion::Html5 => "HTML 5",
            MarkupVersion::Html401 => "HTML 4.01",
            MarkupVersion::Xhtml => "XHTML",
            MarkupVersion::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MarkupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The data extracted from one analyzed web page.
///
/// Constructed once per analysis and immutable afterwards. Holds no external
/// resources; dropping it requires no teardown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Detected markup version (e.g. HTML 5).
    pub markup_version: MarkupVersion,
    /// The page title; empty if no `<title>` text was found.
    pub title: String,
    /// Count of heading tags by level ("H1".."H6"); absent levels have no key.
    pub headings: BTreeMap<String, usize>,
    /// Number of links resolving to the page's own host.
    pub internal_link_count: usize,
    /// Number of links resolving to other hosts.
    pub external_link_count: usize,
    /// Number of links whose probe failed or answered with a status >= 400.
    pub inaccessible_link_count: usize,
    /// True if a password-type input was found anywhere in the document.
    pub login_form_present: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_version_as_str() {
        assert_eq!(MarkupVersion::Html5.as_str(), "HTML 5");
        assert_eq!(MarkupVersion::Html401.as_str(), "HTML 4.01");
        assert_eq!(MarkupVersion::Xhtml.as_str(), "XHTML");
        assert_eq!(MarkupVersion::Unknown.as_str(), "Unknown");
    }

    #[test]
    fn test_markup_version_serializes_to_label() {
        assert_eq!(
            serde_json::to_string(&MarkupVersion::Html401).unwrap(),
            "\"HTML 4.01\""
        );
    }

    #[test]
    fn test_result_serializes_headings_as_map() {
        let mut headings = BTreeMap::new();
        headings.insert("H1".to_string(), 1);
        headings.insert("H2".to_string(), 3);
        let result = AnalysisResult {
            markup_version: MarkupVersion::Html5,
            title: "Test".to_string(),
            headings,
            internal_link_count: 2,
            external_link_count: 1,
            inaccessible_link_count: 0,
            login_form_present: false,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["markup_version"], "HTML 5");
        assert_eq!(json["headings"]["H2"], 3);
        assert_eq!(json["internal_link_count"], 2);
    }
}
