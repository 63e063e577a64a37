// ABOUTME: Isolated document built from one matched element's outer HTML.
// ABOUTME: Exposes the rendered body text and image sources of that element alone.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::dom::images::image_sources;
use crate::dom::text::rendered_text;

static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

/// A standalone document re-parsed from an element's markup.
///
/// Parsing the markup on its own keeps extraction independent of the live
/// page: nothing outside the element can leak in and nothing is mutated.
#[derive(Debug)]
pub struct Fragment {
    document: Html,
}

impl Fragment {
    /// Parses outer HTML into a fresh document.
    pub fn parse(outer_html: &str) -> Self {
        Self {
            document: Html::parse_document(outer_html),
        }
    }

    /// Rendered text of the document body, or an empty string without a body.
    pub fn body_text(&self) -> String {
        self.document
            .select(&BODY_SELECTOR)
            .next()
            .map(|body| rendered_text(*body))
            .unwrap_or_default()
    }

    /// Non-empty `src` values of every image in the fragment, in document order.
    pub fn image_sources(&self) -> Vec<String> {
        image_sources(&self.document)
    }
}
