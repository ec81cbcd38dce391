//! Page title and favicon extraction.

use super::Enriched;
use regex::Regex;
use reqwest::{Client, Url};
use std::sync::LazyLock;

// First <title> only; text containing `<` (nested markup) does not match.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").expect("title pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    /// Extracted `<title>` text, or the URL's hostname.
    pub title: Enriched<String>,
    /// Favicon proxy URL for the hostname. Never checked for existence.
    pub favicon: String,
}

/// Trimmed text of the first `<title>` element, if any and non-blank.
pub fn extract_title(html: &str) -> Option<String> {
    TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
}

pub fn favicon_url(proxy: &str, hostname: &str) -> String {
    format!("{proxy}?domain={hostname}")
}

/// Fetch `url` and derive its metadata, falling back to the hostname on any failure.
pub async fn extract(client: &Client, favicon_proxy: &str, url: &Url) -> PageMetadata {
    let hostname = url.host_str().unwrap_or_default().to_string();
    let favicon = favicon_url(favicon_proxy, &hostname);

    let title = match fetch_html(client, url).await {
        Ok(html) => match extract_title(&html) {
            Some(title) => Enriched::Extracted(title),
            None => {
                tracing::debug!(%url, "No <title> found, using hostname");
                Enriched::Fallback(hostname)
            }
        },
        Err(e) => {
            tracing::warn!(%url, error = %e, "Error extracting metadata");
            Enriched::Fallback(hostname)
        }
    };

    PageMetadata { title, favicon }
}

async fn fetch_html(client: &Client, url: &Url) -> Result<String, reqwest::Error> {
    client.get(url.clone()).send().await?.text().await
}
