// ABOUTME: Error types for content extraction and selector registry loading.
// ABOUTME: Provides the ExtractError enum with InvalidSelector, Config, and Io variants.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while extracting content or loading selector configuration.
///
/// A selector that matches nothing is not an error; only selectors that cannot
/// be parsed as CSS abort an extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A selector string is not valid CSS.
    #[error("invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },

    /// Selector configuration could not be deserialized.
    #[error("invalid selector config: {0}")]
    Config(String),

    /// A configuration or HTML file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// Creates an InvalidSelector error from a selector and its parse failure.
    pub fn invalid_selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        ExtractError::InvalidSelector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Creates a Config error from an underlying deserialization error.
    pub fn config(err: impl fmt::Display) -> Self {
        ExtractError::Config(err.to_string())
    }

    /// Creates an Io error for the given path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true if this is an InvalidSelector error.
    pub fn is_invalid_selector(&self) -> bool {
        matches!(self, ExtractError::InvalidSelector { .. })
    }

    /// Returns true if this is a Config error.
    pub fn is_config(&self) -> bool {
        matches!(self, ExtractError::Config(_))
    }
}
