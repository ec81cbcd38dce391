//! Summaries via an external reader service.

use super::Enriched;
use reqwest::{Client, Url, header::ACCEPT};

pub const SUMMARY_FALLBACK: &str = "Unable to generate summary for this link.";

/// Character budget before the ellipsis is appended.
pub const SUMMARY_MAX_CHARS: usize = 500;

/// Reader endpoint for `url`: the target is percent-encoded behind an `http://` prefix.
pub fn reader_url(reader_base: &str, url: &Url) -> String {
    format!(
        "{}/http://{}",
        reader_base.trim_end_matches('/'),
        urlencoding::encode(url.as_str())
    )
}

/// Keep the first [`SUMMARY_MAX_CHARS`] characters, appending `...` when cut.
pub fn truncate_summary(text: &str) -> String {
    match text.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// One GET to the reader service; any failure yields [`SUMMARY_FALLBACK`].
pub async fn generate(client: &Client, reader_base: &str, url: &Url) -> Enriched<String> {
    match fetch_summary(client, reader_base, url).await {
        Ok(text) => Enriched::Extracted(truncate_summary(&text)),
        Err(e) => {
            tracing::warn!(%url, error = %e, "Error generating summary");
            Enriched::Fallback(SUMMARY_FALLBACK.to_string())
        }
    }
}

async fn fetch_summary(
    client: &Client,
    reader_base: &str,
    url: &Url,
) -> Result<String, reqwest::Error> {
    client
        .get(reader_url(reader_base, url))
        .header(ACCEPT, "text/plain")
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}
