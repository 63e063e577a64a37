// ABOUTME: Per-site selector configuration and the registry that looks it up by host.
// ABOUTME: Loads registries from JSON files or the embedded builtin set, with a `*` fallback entry.

//! Site selector registry.
//!
//! Each `SiteSelectors` entry names the selector lists to use on one site. The
//! registry indexes entries by their primary and supported domains and answers
//! lookups by host or by page URL.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::error::ExtractError;
use crate::extractors::compiled::precompile_selectors;
use crate::selector::SelectorSpec;

/// Domain of the entry used when no site-specific entry matches.
pub const FALLBACK_DOMAIN: &str = "*";

/// Embedded JSON containing the builtin site selectors.
const BUILTIN_SITES_JSON: &str = include_str!("../data/sites.json");

/// Selector lists for one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SiteSelectors {
    /// Primary domain, or `*` for the fallback entry
    pub domain: String,
    /// Additional hosts served by the same markup
    #[serde(default)]
    pub supported_domains: Vec<String>,
    /// Specs applied to their first match
    #[serde(default)]
    pub selectors: Vec<SelectorSpec>,
    /// Specs applied to every match
    #[serde(default, rename = "selectorsAll")]
    pub selectors_all: Vec<SelectorSpec>,
}

impl SiteSelectors {
    /// Iterates over every selector string in both lists.
    pub fn selector_strings(&self) -> impl Iterator<Item = &str> {
        self.selectors
            .iter()
            .chain(self.selectors_all.iter())
            .map(|spec| spec.selector.as_str())
    }
}

/// Registry for looking up site selectors by host.
#[derive(Debug, Default, Clone)]
pub struct SelectorRegistry {
    map: HashMap<String, SiteSelectors>,
}

impl SelectorRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entry for its primary and supported domains.
    ///
    /// A later entry for the same domain replaces the earlier one.
    pub fn register(&mut self, site: SiteSelectors) {
        for domain in &site.supported_domains {
            self.map.insert(domain.clone(), site.clone());
        }
        self.map.insert(site.domain.clone(), site);
    }

    /// Looks up an entry by exact host.
    pub fn get(&self, domain: &str) -> Option<&SiteSelectors> {
        self.map.get(domain)
    }

    /// Returns the fallback entry, if one is registered.
    pub fn fallback(&self) -> Option<&SiteSelectors> {
        self.map.get(FALLBACK_DOMAIN)
    }

    /// Looks up the entry for a page URL.
    ///
    /// Tries the URL's host, then the host without a leading `www.`, then the
    /// fallback entry. URLs that do not parse or carry no host go straight to
    /// the fallback.
    pub fn for_url(&self, url: &str) -> Option<&SiteSelectors> {
        let host = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()));

        let Some(host) = host else {
            debug!(url, "no host in url, using fallback selectors");
            return self.fallback();
        };

        if let Some(site) = self.get(&host) {
            return Some(site);
        }
        if let Some(site) = host.strip_prefix("www.").and_then(|bare| self.get(bare)) {
            return Some(site);
        }

        debug!(host = %host, "no site selectors, using fallback");
        self.fallback()
    }

    /// Warms the selector cache with every registered selector.
    pub fn precompile(&self) {
        precompile_selectors(self.map.values().flat_map(SiteSelectors::selector_strings));
    }

    /// Returns the number of registered domain mappings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Builds a registry from a JSON array of `SiteSelectors`.
    pub fn from_json_str(json: &str) -> Result<Self, ExtractError> {
        let sites: Vec<SiteSelectors> = serde_json::from_str(json).map_err(ExtractError::config)?;
        let mut registry = Self::new();
        for site in sites {
            registry.register(site);
        }
        Ok(registry)
    }

    /// Reads and parses a registry JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
        let registry = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            domains = registry.len(),
            "loaded selector registry"
        );
        Ok(registry)
    }
}

/// Loads the builtin registry from embedded JSON.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed or cannot be deserialized.
pub fn load_builtin_registry() -> SelectorRegistry {
    SelectorRegistry::from_json_str(BUILTIN_SITES_JSON).expect("failed to parse builtin sites")
}
