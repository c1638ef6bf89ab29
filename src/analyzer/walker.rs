//! Single-pass DOM traversal extracting the page's structural signals.

use std::collections::BTreeMap;

use scraper::{Html, Node};

/// Signals gathered by one walk over the document tree.
#[derive(Debug, Default)]
pub(crate) struct PageSignals {
    /// Text of the first `<title>` element; empty if none carried text.
    pub title: String,
    /// Heading counts keyed "H1".."H6"; absent levels have no key.
    pub headings: BTreeMap<String, usize>,
    /// True once any password-type input has been seen.
    pub login_form: bool,
    /// Raw `href` values of every `<a>` tag, in document order, with
    /// duplicates and empty strings intact.
    pub raw_links: Vec<String>,
}

/// Walks the whole document tree once, depth-first in preorder, dispatching
/// on each element's tag name.
///
/// The traversal never terminates early: the login flag only ever transitions
/// false to true, the first `<title>` wins, and every `<a href>` contributes
/// its raw value. Tags like `header` or `hgroup` do not count as headings;
/// only names of exactly two characters matching `h1`..`h6` do.
pub(crate) fn walk_document(document: &Html) -> PageSignals {
    let mut signals = PageSignals::default();
    let mut title_seen = false;

    for node in document.tree.root().descendants() {
        let Node::Element(element) = node.value() else {
            continue;
        };
        match element.name() {
            "title" => {
                if !title_seen {
                    title_seen = true;
                    if let Some(text) = node.first_child().and_then(|child| child.value().as_text())
                    {
                        signals.title = text.text.to_string();
                    }
                }
            }
            "input" => {
                if element
                    .attrs()
                    .any(|(key, value)| key == "type" && value == "password")
                {
                    signals.login_form = true;
                }
            }
            "a" => {
                if let Some(href) = element.attr("href") {
                    signals.raw_links.push(href.to_string());
                }
            }
            tag => {
                if let Some(label) = heading_label(tag) {
                    *signals.headings.entry(label.to_string()).or_insert(0) += 1;
                }
            }
        }
    }

    signals
}

/// Maps a tag name to its uppercase heading label, if it is one of `h1`..`h6`
/// (case-insensitive, length exactly two).
fn heading_label(tag: &str) -> Option<&'static str> {
    const LABELS: [&str; 6] = ["H1", "H2", "H3", "H4", "H5", "H6"];
    let bytes = tag.as_bytes();
    if bytes.len() == 2 && (bytes[0] == b'h' || bytes[0] == b'H') && bytes[1].is_ascii_digit() {
        let digit = bytes[1] - b'0';
        if (1..=6).contains(&digit) {
            return Some(LABELS[(digit - 1) as usize]);
        }
    }
    None
}
