// ABOUTME: Document query capability and the parsed-HTML page that implements it.
// ABOUTME: Provides DocumentQuery, HtmlPage, and the isolated Fragment used per matched element.

//! DOM access for content extraction.
//!
//! The extractor never touches a document directly. It asks a `DocumentQuery`
//! for the user's selection and for the outer HTML of matching elements, so a
//! browser bridge, a headless page or a parsed HTML string can all stand in as
//! the page.

pub mod fragment;
pub mod images;
pub mod text;

use scraper::Html;

use crate::error::ExtractError;
use crate::extractors::compiled::get_or_compile;

pub use fragment::Fragment;

/// Read-only access to a page: its current text selection and CSS queries
/// returning outer HTML.
pub trait DocumentQuery {
    /// The text the user currently has selected, untrimmed. `None` when there
    /// is no selection.
    fn selected_text(&self) -> Option<String>;

    /// Outer HTML of the first element matching `css` in document order.
    fn query_first(&self, css: &str) -> Result<Option<String>, ExtractError>;

    /// Outer HTML of every element matching `css`, in document order.
    fn query_all(&self, css: &str) -> Result<Vec<String>, ExtractError>;
}

/// A page backed by an HTML string parsed with html5ever.
#[derive(Debug)]
pub struct HtmlPage {
    document: Html,
    selection: Option<String>,
}

impl HtmlPage {
    /// Parses a full HTML document with no active selection.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
            selection: None,
        }
    }

    /// Sets the text the user has highlighted on this page.
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }
}

impl DocumentQuery for HtmlPage {
    fn selected_text(&self) -> Option<String> {
        self.selection.clone()
    }

    fn query_first(&self, css: &str) -> Result<Option<String>, ExtractError> {
        let selector = get_or_compile(css)?;
        Ok(self.document.select(&selector).next().map(|el| el.html()))
    }

    fn query_all(&self, css: &str) -> Result<Vec<String>, ExtractError> {
        let selector = get_or_compile(css)?;
        Ok(self.document.select(&selector).map(|el| el.html()).collect())
    }
}
