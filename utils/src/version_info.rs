//! Version information, populated at build time.
//!
//! Display format per environment:
//! - Local/Test: `main:{commit}`
//! - Prod: `stable:{version}`

/// Environment the service was started in, decided at runtime from `ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Local,
    Test,
    Prod,
}

/// Build date in RFC3339 format.
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Short git commit hash, or `unknown` outside a checkout.
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Format the version string reported for a runtime environment.
pub fn format_version_for_runtime_env(env: RuntimeEnv) -> String {
    match env {
        RuntimeEnv::Local | RuntimeEnv::Test => format!("main:{}", build_commit()),
        RuntimeEnv::Prod => format!("stable:{}", build_version()),
    }
}

/// User agent sent on every outbound request (page fetches, reader service, API calls).
pub fn user_agent() -> String {
    format!("linkshelf/{} ({})", build_version(), build_commit())
}
