// ABOUTME: Pre-compiled CSS selector cache shared by every page query.
// ABOUTME: Compiles each selector string once and remembers parse failures too.

//! Selector caching for repeated DOM queries.
//!
//! The same site selectors run against every page a user captures, so each
//! string is parsed once and the compiled `scraper::Selector` is reused.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::error::ExtractError;

/// Compiled selectors keyed by their source string. Failures are cached as the
/// parser's message.
static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Result<Selector, String>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn compile(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| e.to_string())
}

fn to_error(css: &str, cached: &Result<Selector, String>) -> Result<Selector, ExtractError> {
    cached
        .clone()
        .map_err(|message| ExtractError::invalid_selector(css, message))
}

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `ExtractError::InvalidSelector` for strings that are not valid CSS.
/// Subsequent calls with the same string return the cached outcome.
pub fn get_or_compile(css: &str) -> Result<Selector, ExtractError> {
    {
        let cache = SELECTOR_CACHE
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.get(css) {
            return to_error(css, cached);
        }
    }

    let compiled = compile(css);
    let mut cache = SELECTOR_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let entry = cache.entry(css.to_string()).or_insert(compiled);
    to_error(css, entry)
}

/// Precompiles a batch of selectors into the cache.
///
/// Invalid selectors are cached as failures and reported on first use.
pub fn precompile_selectors<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cache = SELECTOR_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    for css in selectors {
        let css = css.as_ref();
        if !cache.contains_key(css) {
            cache.insert(css.to_string(), compile(css));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selector_is_cached() {
        assert!(get_or_compile("div.container").is_ok());
        assert!(get_or_compile("div.container").is_ok());
    }

    #[test]
    fn test_invalid_selector_returns_error() {
        let err = get_or_compile("[[[invalid").unwrap_err();
        assert!(err.is_invalid_selector());

        // Cached failures report the same selector
        match get_or_compile("[[[invalid") {
            Err(ExtractError::InvalidSelector { selector, .. }) => {
                assert_eq!(selector, "[[[invalid")
            }
            other => panic!("expected invalid selector, got {:?}", other),
        }
    }

    #[test]
    fn test_precompile_selectors() {
        precompile_selectors(vec!["h1", "h2", "p.intro", "a[href]", ">>"]);

        assert!(get_or_compile("h1").is_ok());
        assert!(get_or_compile("h2").is_ok());
        assert!(get_or_compile("p.intro").is_ok());
        assert!(get_or_compile("a[href]").is_ok());
        assert!(get_or_compile(">>").is_err());
    }
}
