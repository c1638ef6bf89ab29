//! Markup version detection from the document's doctype.

use scraper::{Html, Node};

use super::result::MarkupVersion;

/// Infers the declared markup version from the parsed document's doctype.
///
/// Only the document root's immediate children are scanned (a doctype is
/// never nested), and only the first doctype node found is considered. The
/// declaration text is the doctype's name, public identifier, and system
/// identifier concatenated and lower-cased, matched by priority:
/// "html 4.01", then "xhtml", then a bare "html". A document without a
/// doctype, or with a declaration matching none of these, is `Unknown`.
pub(crate) fn detect_markup_version(document: &Html) -> MarkupVersion {
    for child in document.tree.root().children() {
        if let Node::Doctype(doctype) = child.value() {
            let declaration = format!(
                "{} {} {}",
                doctype.name(),
                doctype.public_id(),
                doctype.system_id()
            )
            .to_lowercase();
            return if declaration.contains("html 4.01") {
                MarkupVersion::Html401
            } else if declaration.contains("xhtml") {
                MarkupVersion::Xhtml
            } else if declaration.contains("html") {
                MarkupVersion::Html5
            } else {
                MarkupVersion::Unknown
            };
        }
    }
    MarkupVersion::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(html: &str) -> MarkupVersion {
        detect_markup_version(&Html::parse_document(html))
    }

    #[test]
    fn test_html5_doctype() {
        assert_eq!(
            detect("<!DOCTYPE html><html><body></body></html>"),
            MarkupVersion::Html5
        );
    }

    #[test]
    fn test_html401_doctype() {
        let html = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd"><html></html>"#;
        assert_eq!(detect(html), MarkupVersion::Html401);
    }

    #[test]
    fn test_html401_transitional_doctype() {
        let html = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd"><html></html>"#;
        assert_eq!(detect(html), MarkupVersion::Html401);
    }

    #[test]
    fn test_xhtml_doctype() {
        let html = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd"><html></html>"#;
        assert_eq!(detect(html), MarkupVersion::Xhtml);
    }

    #[test]
    fn test_missing_doctype_is_unknown() {
        assert_eq!(
            detect("<html><head><title>x</title></head></html>"),
            MarkupVersion::Unknown
        );
    }

    #[test]
    fn test_doctype_matching_is_case_insensitive() {
        assert_eq!(detect("<!DOCTYPE HTML><html></html>"), MarkupVersion::Html5);
    }
}
