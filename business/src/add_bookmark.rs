//! Parsing of the add-bookmark form.

use reqwest::Url;
use serde::Serialize;

/// Raw text as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddBookmarkForm {
    pub url: String,
    /// Comma-separated.
    pub tags: String,
    pub custom_summary: String,
}

/// A validated bookmark ready to send to the Bookmark API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookmark {
    pub url: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Split on commas, trim, and drop empty entries.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

impl AddBookmarkForm {
    pub fn parse(&self) -> Result<NewBookmark, FormError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(FormError::MissingUrl);
        }
        Url::parse(url).map_err(|e| FormError::InvalidUrl(e.to_string()))?;

        let custom_summary = Some(self.custom_summary.trim())
            .filter(|summary| !summary.is_empty())
            .map(str::to_string);

        Ok(NewBookmark {
            url: url.to_string(),
            tags: parse_tags(&self.tags),
            custom_summary,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(url: &str, tags: &str, summary: &str) -> AddBookmarkForm {
        AddBookmarkForm {
            url: url.to_string(),
            tags: tags.to_string(),
            custom_summary: summary.to_string(),
        }
    }

    #[test]
    fn test_parse_trims_everything() {
        let parsed = form("  https://example.com  ", " tech, ,rust ,", "  notes ")
            .parse()
            .unwrap();
        assert_eq!(
            parsed,
            NewBookmark {
                url: "https://example.com".to_string(),
                tags: vec!["tech".to_string(), "rust".to_string()],
                custom_summary: Some("notes".to_string()),
            }
        );
    }

    #[test]
    fn test_blank_summary_is_absent() {
        let parsed = form("https://example.com", "", "   ").parse().unwrap();
        assert!(parsed.custom_summary.is_none());
        assert!(parsed.tags.is_empty());

        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json, serde_json::json!({ "url": "https://example.com", "tags": [] }));
    }

    #[test]
    fn test_url_must_be_present_and_absolute() {
        assert_eq!(form("   ", "", "").parse(), Err(FormError::MissingUrl));
        assert!(matches!(
            form("example.com", "", "").parse(),
            Err(FormError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = form("https://example.com", "a", "b");
        form.reset();
        assert_eq!(form, AddBookmarkForm::default());
    }
}
