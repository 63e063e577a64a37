// ABOUTME: ExtractionResult holding captured page text, its origin, and image URLs.
// ABOUTME: Serializes for the messaging bridge and converts into the (content, highlighted, images) triple.

use serde::{Deserialize, Serialize};

/// The content captured from a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExtractionResult {
    /// Highlighted text, or one line per matched element plus any context
    pub content: String,
    /// True when `content` is the user's selection
    pub highlighted: bool,
    /// Image URLs found in matched elements; always empty when highlighted
    pub image_urls: Vec<String>,
}

impl ExtractionResult {
    /// Result for text the user highlighted.
    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            highlighted: true,
            image_urls: Vec::new(),
        }
    }

    /// Result assembled from matched elements.
    pub fn from_elements(content: String, image_urls: Vec<String>) -> Self {
        Self {
            content,
            highlighted: false,
            image_urls,
        }
    }

    /// Returns true if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.image_urls.is_empty()
    }

    /// Returns true if any image URLs were collected.
    pub fn has_images(&self) -> bool {
        !self.image_urls.is_empty()
    }

    /// Splits the result into `(content, highlighted, image_urls)`.
    pub fn into_parts(self) -> (String, bool, Vec<String>) {
        (self.content, self.highlighted, self.image_urls)
    }
}

impl From<ExtractionResult> for (String, bool, Vec<String>) {
    fn from(result: ExtractionResult) -> Self {
        result.into_parts()
    }
}
