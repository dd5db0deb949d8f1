//! Thin wrapper around a parsed HTML document.
//!
//! Exposes the handful of positional query operations the extractors
//! consume: all matching texts, first text, all attribute values. Text is
//! whitespace-normalized and empty matches are dropped, so downstream code
//! only ever sees displayable values.

use scraper::{Html, Selector};

#[derive(Debug)]
pub struct Page {
    document: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Texts of all elements matching `css`, in document order.
    /// Whitespace-normalized; empty matches are dropped.
    pub fn texts(&self, css: &str) -> Vec<String> {
        let selector = compile(css);
        self.document
            .select(&selector)
            .map(|el| normalize(&el.text().collect::<String>()))
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Text of the first non-empty element matching `css`.
    pub fn first_text(&self, css: &str) -> Option<String> {
        self.texts(css).into_iter().next()
    }

    /// Values of `attr` on all elements matching `css`, in document order.
    /// Elements without the attribute are skipped.
    pub fn attrs(&self, css: &str, attr: &str) -> Vec<String> {
        let selector = compile(css);
        self.document
            .select(&selector)
            .filter_map(|el| el.value().attr(attr))
            .map(str::to_string)
            .collect()
    }
}

// Selectors come from the registry and are known-valid CSS.
fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Collapse runs of whitespace (including text-node boundaries) to single
/// spaces and trim the ends.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
