// ABOUTME: Main library entry point for the pagegist page content extractor.
// ABOUTME: Re-exports the public API: extract_content, DocumentQuery, HtmlPage, SelectorSpec, SelectorRegistry.

//! pagegist - captures the content of a web page for summarization.
//!
//! The user's highlighted text wins when there is any. Otherwise configured
//! CSS selectors pick elements whose rendered text becomes one line each,
//! optionally formatted through a `{{content}}` template, and the images inside
//! those elements are collected alongside.
//!
//! # Example
//!
//! ```
//! use pagegist::{extract_content, HtmlPage, SelectorSpec};
//!
//! let page = HtmlPage::parse(r#"<html><body><h1 id="t">Hello   world</h1></body></html>"#);
//! let result = extract_content(
//!     &page,
//!     &[SelectorSpec::with_template("#t", "Title: {{content}}")],
//!     &[],
//!     Some("be brief"),
//! )?;
//! assert_eq!(result.content, "Title: Hello world\n\n\nAdditional Context: be brief");
//! assert!(!result.highlighted);
//! # Ok::<(), pagegist::ExtractError>(())
//! ```

pub mod dom;
pub mod error;
pub mod extractors;
pub mod registry;
pub mod result;
pub mod selector;

pub use crate::dom::{DocumentQuery, Fragment, HtmlPage};
pub use crate::error::ExtractError;
pub use crate::extractors::content::{extract_content, CONTEXT_LABEL};
pub use crate::registry::{load_builtin_registry, SelectorRegistry, SiteSelectors};
pub use crate::result::ExtractionResult;
pub use crate::selector::SelectorSpec;
