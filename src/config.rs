//! Service configuration loaded once at startup from environment variables.

use std::net::SocketAddr;

/// Immutable configuration for the idea-brief service.
///
/// Constructed once in `main` and shared read-only with every request
/// handler; nothing here changes after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Completion API credential. Required; startup fails without it.
    pub api_key: String,
    /// Completion API base URL, e.g. `https://api.aimlapi.com/v1`.
    pub base_url: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Address the HTTP server binds to.
    pub http_bind: SocketAddr,
    /// Timeout for outbound completion requests.
    pub http_timeout_ms: u64,
    /// Generation cap for the facts-extraction call.
    pub facts_max_tokens: u32,
    /// Generation cap for the product-brief call.
    pub brief_max_tokens: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing or placeholder `API_KEY` is fatal: the process must not
    /// begin serving requests without a usable credential.
    pub fn load() -> anyhow::Result<Self> {
        let api_key = std::env::var("API_KEY").unwrap_or_default();
        if is_placeholder(&api_key) {
            anyhow::bail!("API_KEY is not set; add it to the environment or .env file");
        }

        let mut cfg = Self {
            api_key,
            base_url: std::env::var("IDEA_BASE_URL")
                .unwrap_or_else(|_| "https://api.aimlapi.com/v1".to_string()),
            model: std::env::var("IDEA_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            http_bind: "0.0.0.0:8000"
                .parse()
                .expect("default bind address should parse"),
            http_timeout_ms: std::env::var("IDEA_HTTP_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60_000),
            facts_max_tokens: std::env::var("IDEA_FACTS_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            brief_max_tokens: std::env::var("IDEA_BRIEF_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8_000),
        };

        if let Ok(v) = std::env::var("IDEA_HTTP_BIND")
            && let Ok(bind) = v.parse::<SocketAddr>()
        {
            cfg.http_bind = bind;
        }

        Ok(cfg)
    }
}

/// Treat empty strings and unexpanded template values as an absent key.
pub(crate) fn is_placeholder(s: &str) -> bool {
    let t = s.trim();
    t.is_empty()
        || t.contains("${")
        || t.eq_ignore_ascii_case("your-api-key-here")
        || t.eq_ignore_ascii_case("changeme")
}
