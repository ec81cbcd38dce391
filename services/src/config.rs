use linkshelf_utils::version_info::RuntimeEnv;
use serde::Deserialize;
use std::env::vars;
use std::fmt::Display;
use tracing::info;

/// Reader service used to produce bookmark summaries.
pub const DEFAULT_READER_BASE_URL: &str = "https://r.jina.ai";

/// Favicon proxy; the bookmark's hostname is passed as `?domain=`.
pub const DEFAULT_FAVICON_PROXY_URL: &str = "https://www.google.com/s2/favicons";

#[derive(Debug, Clone, Deserialize)]
pub enum Env {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "prod")]
    Prod,
}

impl From<&Env> for RuntimeEnv {
    fn from(env: &Env) -> Self {
        match env {
            Env::Local => RuntimeEnv::Local,
            Env::Test => RuntimeEnv::Test,
            Env::Prod => RuntimeEnv::Prod,
        }
    }
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Test => write!(f, "test"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

// The final, validated configuration struct.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    database_url: String,
    server_addr: String,
    port: u16,
    reader_base_url: String,
    favicon_proxy_url: String,
}

// Intermediate struct for deserializing environment variables
// where everything but ENV and DATABASE_URL is optional.
#[derive(Deserialize)]
struct RawConfig {
    env: Env,
    database_url: String,
    server_addr: Option<String>,
    port: Option<u16>,
    reader_base_url: Option<String>,
    favicon_proxy_url: Option<String>,
}

impl Config {
    /// Create a test configuration with default values.
    ///
    /// Available to both unit tests and integration tests.
    /// It should not be used in production code.
    pub fn new_for_test() -> Self {
        Self {
            env: Env::Local,
            database_url: "postgres://localhost:5432/test".to_string(),
            server_addr: "127.0.0.1".to_string(),
            port: 8080,
            reader_base_url: DEFAULT_READER_BASE_URL.to_string(),
            favicon_proxy_url: DEFAULT_FAVICON_PROXY_URL.to_string(),
        }
    }

    /// Test configuration whose reader service lives at `reader_base_url`,
    /// typically a `wiremock` server.
    pub fn new_for_test_with_reader(reader_base_url: impl Into<String>) -> Self {
        Self {
            reader_base_url: reader_base_url.into(),
            ..Self::new_for_test()
        }
    }

    pub fn environment(&self) -> &Env {
        &self.env
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn reader_base_url(&self) -> &str {
        &self.reader_base_url
    }

    pub fn favicon_proxy_url(&self) -> &str {
        &self.favicon_proxy_url
    }

    pub fn is_local(&self) -> bool {
        matches!(self.env, Env::Local)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self.env, Env::Prod)
    }

    /// Initializes configuration by reading from environment variables
    /// and applying environment-aware defaults.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");

        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            env,
            database_url,
            server_addr,
            port,
            reader_base_url,
            favicon_proxy_url,
        } = raw_config;

        if database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL must not be empty");
        }

        let server_addr = match server_addr {
            Some(addr) => {
                info!("Using provided SERVER_ADDR: {}", addr);
                addr
            }
            None => {
                let default_addr = match env {
                    Env::Local => "127.0.0.1",
                    Env::Test | Env::Prod => "0.0.0.0",
                };
                info!(
                    "SERVER_ADDR not set, defaulting to {} for {} environment",
                    default_addr, env
                );
                default_addr.to_string()
            }
        };

        let port = match port {
            Some(port) => port,
            None if matches!(env, Env::Local | Env::Test) => {
                info!("PORT not set, defaulting to 8080 for {} environment", env);
                8080
            }
            None => anyhow::bail!("PORT must be set for {} environment", env),
        };

        let reader_base_url = reader_base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_READER_BASE_URL.to_string());
        let favicon_proxy_url =
            favicon_proxy_url.unwrap_or_else(|| DEFAULT_FAVICON_PROXY_URL.to_string());

        Ok(Config {
            env,
            database_url,
            server_addr,
            port,
            reader_base_url,
            favicon_proxy_url,
        })
    }
}
