// ABOUTME: Selector records describing where page content lives and how to format it.
// ABOUTME: Provides SelectorSpec with `{{content}}` template substitution.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by extracted text inside a template.
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";

/// A CSS query plus an optional output template.
///
/// Whether the query is applied to the first match or to every match is decided
/// by the list the spec is passed in, not by the spec itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectorSpec {
    /// CSS selector, e.g. "article h1"
    pub selector: String,
    /// Template containing `{{content}}`, e.g. "Title: {{content}}"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl SelectorSpec {
    /// Creates a spec without a template.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            template: None,
        }
    }

    /// Creates a spec with a template.
    pub fn with_template(selector: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            template: Some(template.into()),
        }
    }

    /// Formats extracted text through the template.
    ///
    /// Only the first `{{content}}` is replaced. A missing or empty template
    /// returns the text unchanged.
    pub fn apply_template(&self, text: &str) -> String {
        match self.template.as_deref() {
            Some(template) if !template.is_empty() => {
                template.replacen(CONTENT_PLACEHOLDER, text, 1)
            }
            _ => text.to_string(),
        }
    }
}

impl From<&str> for SelectorSpec {
    fn from(selector: &str) -> Self {
        SelectorSpec::new(selector)
    }
}
