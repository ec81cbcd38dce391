use serde::Deserialize;
use std::env::vars;

/// Bookmark API used when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

/// Identity provider REST endpoint used when `IDENTITY_BASE_URL` is not set.
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Identity provider settings. All three credentials are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub identity: IdentityConfig,
}

#[derive(Deserialize)]
struct RawBusinessConfig {
    identity_api_key: Option<String>,
    identity_auth_domain: Option<String>,
    identity_project_id: Option<String>,
    identity_base_url: Option<String>,
    api_base_url: Option<String>,
}

impl BusinessConfig {
    /// Config pointing both the Bookmark API and the identity provider at test doubles.
    pub fn new_for_test(
        api_base_url: impl Into<String>,
        identity_base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            identity: IdentityConfig {
                api_key: "test-api-key".to_string(),
                auth_domain: "linkshelf-test.example.com".to_string(),
                project_id: "linkshelf-test".to_string(),
                base_url: identity_base_url.into(),
            },
        }
    }

    /// Read the client configuration from the environment.
    ///
    /// Missing identity credentials are a fatal initialization error.
    pub fn init() -> anyhow::Result<Self> {
        let raw: RawBusinessConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawBusinessConfig) -> anyhow::Result<Self> {
        let required = |value: Option<String>, name: &str| -> anyhow::Result<String> {
            match value.filter(|v| !v.trim().is_empty()) {
                Some(v) => Ok(v),
                None => anyhow::bail!("{name} must be set"),
            }
        };

        let identity = IdentityConfig {
            api_key: required(raw.identity_api_key, "IDENTITY_API_KEY")?,
            auth_domain: required(raw.identity_auth_domain, "IDENTITY_AUTH_DOMAIN")?,
            project_id: required(raw.identity_project_id, "IDENTITY_PROJECT_ID")?,
            base_url: trimmed_or(raw.identity_base_url, DEFAULT_IDENTITY_BASE_URL),
        };

        Ok(Self {
            api_base_url: trimmed_or(raw.api_base_url, DEFAULT_API_BASE_URL),
            identity,
        })
    }
}

fn trimmed_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}
