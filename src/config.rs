use anyhow::Context;

/// Default provider endpoint, overridable for OpenAI-compatible gateways.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// CORS allowlist. `None` means permissive (dev default).
    pub allowed_origins: Option<Vec<String>>,
    pub rate_limit_max: u32,
    pub rate_limit_window_secs: u64,
    pub body_limit_bytes: usize,
    pub static_dir: String,
    /// When absent the AI endpoints answer 503; the rest of the API still works.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_model_advanced: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            allowed_origins: std::env::var("ALLOWED_ORIGINS").ok().map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
            rate_limit_max: std::env::var("RATE_LIMIT_MAX")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("RATE_LIMIT_MAX must be a valid number")?,
            rate_limit_window_secs: std::env::var("RATE_LIMIT_WINDOW_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .context("RATE_LIMIT_WINDOW_SECS must be a valid number")?,
            body_limit_bytes: std::env::var("BODY_LIMIT_BYTES")
                .unwrap_or_else(|_| (1024 * 1024).to_string())
                .parse()
                .context("BODY_LIMIT_BYTES must be a valid number")?,
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-5-mini".to_string()),
            openai_model_advanced: std::env::var("OPENAI_MODEL_ADVANCED")
                .unwrap_or_else(|_| "gpt-5".to_string()),
        })
    }
}

impl Default for Config {
    /// Dev defaults; also what the integration tests start from.
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: None,
            rate_limit_max: 30,
            rate_limit_window_secs: 60,
            body_limit_bytes: 1024 * 1024,
            static_dir: "public".to_string(),
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            openai_model: "gpt-5-mini".to_string(),
            openai_model_advanced: "gpt-5".to_string(),
        }
    }
}
