// ABOUTME: Extraction strategies that turn a page into captured content.
// ABOUTME: Includes the selector cache and the selection/selector content extractor.

//! Content extraction module.
//!
//! Submodules:
//! - `compiled`: process-wide cache of compiled CSS selectors.
//! - `content`: selection-first extraction over configured selectors.

pub mod compiled;
pub mod content;
