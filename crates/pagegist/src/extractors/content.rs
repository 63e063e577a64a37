// ABOUTME: Page content extraction from the user's selection or configured selectors.
// ABOUTME: Collects matched elements, renders their text through templates, and gathers image URLs.

//! Content extraction for a single page.
//!
//! Key behaviors:
//! - A non-empty (trimmed) selection wins; selectors are not evaluated and no
//!   images are collected.
//! - Otherwise `selectors` contribute their first match each, then
//!   `selectors_all` contribute every match in document order.
//! - Each match becomes one line: rendered text, whitespace-collapsed, passed
//!   through the selector's template, followed by `\n`.
//! - A selector matching nothing is skipped. A selector that is not valid CSS
//!   aborts with `ExtractError::InvalidSelector`.
//! - Non-empty custom context is appended once as `\n\nAdditional Context: ...`.

use tracing::debug;

use crate::dom::text::normalize_whitespace;
use crate::dom::{DocumentQuery, Fragment};
use crate::error::ExtractError;
use crate::result::ExtractionResult;
use crate::selector::SelectorSpec;

/// Label introducing caller-supplied context after the extracted lines.
pub const CONTEXT_LABEL: &str = "Additional Context: ";

/// One matched element awaiting rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedElement<'a> {
    /// Outer HTML of the element
    pub outer_html: String,
    /// Spec that matched it, carrying the template
    pub spec: &'a SelectorSpec,
}

/// Extracts content from `page`.
///
/// Returns the trimmed selection when the user has highlighted text, else one
/// line per element matched by `selectors` (first match each) and
/// `selectors_all` (every match), followed by `custom_context` when non-empty.
pub fn extract_content<D>(
    page: &D,
    selectors: &[SelectorSpec],
    selectors_all: &[SelectorSpec],
    custom_context: Option<&str>,
) -> Result<ExtractionResult, ExtractError>
where
    D: DocumentQuery + ?Sized,
{
    if let Some(selection) = highlighted_text(page) {
        debug!(chars = selection.len(), "using highlighted text");
        return Ok(ExtractionResult::highlighted(selection));
    }

    let elements = collect_elements(page, selectors, selectors_all)?;
    debug!(
        selectors = selectors.len(),
        selectors_all = selectors_all.len(),
        matched = elements.len(),
        "collected elements"
    );

    let mut content = String::new();
    let mut image_urls = Vec::new();
    for element in &elements {
        let fragment = Fragment::parse(&element.outer_html);
        let text = normalize_whitespace(&fragment.body_text());
        content.push_str(&element.spec.apply_template(&text));
        content.push('\n');
        image_urls.extend(fragment.image_sources());
    }

    if let Some(context) = custom_context.filter(|c| !c.is_empty()) {
        content.push_str("\n\n");
        content.push_str(CONTEXT_LABEL);
        content.push_str(context);
    }

    debug!(
        chars = content.len(),
        images = image_urls.len(),
        "extracted content"
    );
    Ok(ExtractionResult::from_elements(content, image_urls))
}

/// Returns the page selection trimmed, or `None` when it is absent or blank.
pub fn highlighted_text<D>(page: &D) -> Option<String>
where
    D: DocumentQuery + ?Sized,
{
    page.selected_text()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Resolves both selector lists against the page.
///
/// Order: first matches of `selectors` in list order, then all matches of
/// `selectors_all` in list order and document order.
pub fn collect_elements<'a, D>(
    page: &D,
    selectors: &'a [SelectorSpec],
    selectors_all: &'a [SelectorSpec],
) -> Result<Vec<MatchedElement<'a>>, ExtractError>
where
    D: DocumentQuery + ?Sized,
{
    let mut elements = Vec::new();

    for spec in selectors {
        match page.query_first(&spec.selector)? {
            Some(outer_html) => elements.push(MatchedElement { outer_html, spec }),
            None => debug!(selector = %spec.selector, "no match"),
        }
    }

    for spec in selectors_all {
        let matches = page.query_all(&spec.selector)?;
        if matches.is_empty() {
            debug!(selector = %spec.selector, "no match");
        }
        elements.extend(
            matches
                .into_iter()
                .map(|outer_html| MatchedElement { outer_html, spec }),
        );
    }

    Ok(elements)
}
