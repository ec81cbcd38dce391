//! Best-effort enrichment of newly created bookmarks.
//!
//! Enrichment never fails: every outbound failure degrades to a deterministic
//! fallback, recorded as [`Enriched::Fallback`] so callers and tests can tell
//! the two paths apart without comparing strings.

pub mod metadata;
pub mod summary;

use crate::config::Config;
use linkshelf_utils::version_info::user_agent;
use reqwest::{Client, Url};

pub use metadata::PageMetadata;
pub use summary::SUMMARY_FALLBACK;

/// A value produced by enrichment, tagged with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enriched<T> {
    /// Derived from the remote resource.
    Extracted(T),
    /// Substituted because the remote resource could not be used.
    Fallback(T),
}

impl<T> Enriched<T> {
    pub fn value(&self) -> &T {
        match self {
            Enriched::Extracted(value) | Enriched::Fallback(value) => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Enriched::Extracted(value) | Enriched::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Enriched::Fallback(_))
    }
}

/// Outbound HTTP for enrichment: one shared client plus the service endpoints.
///
/// No request timeout is configured; a slow page or reader service stalls the
/// create request until the platform's own timeout.
#[derive(Debug, Clone)]
pub struct Enricher {
    client: Client,
    reader_base_url: String,
    favicon_proxy_url: String,
}

impl Enricher {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self {
            client,
            reader_base_url: config.reader_base_url().to_string(),
            favicon_proxy_url: config.favicon_proxy_url().to_string(),
        })
    }

    /// Fetch `url` once and derive its title and favicon.
    pub async fn extract_metadata(&self, url: &Url) -> PageMetadata {
        metadata::extract(&self.client, &self.favicon_proxy_url, url).await
    }

    /// Ask the reader service for a plain-text rendition of `url`, truncated.
    pub async fn generate_summary(&self, url: &Url) -> Enriched<String> {
        summary::generate(&self.client, &self.reader_base_url, url).await
    }
}
