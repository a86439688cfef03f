use std::env;
use std::fmt;
use tracing::debug;

pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Runtime settings. Credentials stay optional here; the clients that need
/// them report `Error::Configuration` when they are missing.
#[derive(Clone)]
pub struct Config {
    pub news_api_key: Option<String>,
    pub news_api_base_url: String,
    pub google_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub addr: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("news_api_key", &self.news_api_key.as_deref().map(|_| "<redacted>"))
            .field("news_api_base_url", &self.news_api_base_url)
            .field("google_api_key", &self.google_api_key.as_deref().map(|_| "<redacted>"))
            .field("gemini_base_url", &self.gemini_base_url)
            .field("gemini_model", &self.gemini_model)
            .field("addr", &self.addr)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_api_key: None,
            news_api_base_url: DEFAULT_NEWS_API_BASE_URL.to_string(),
            google_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(_) => debug!("No .env file found, using process environment"),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| lookup(key))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            news_api_key: read(&["NEWS_API_KEY", "NEXT_PUBLIC_NEWS_API_KEY"]),
            news_api_base_url: read(&["NEWS_API_BASE_URL"]).unwrap_or(defaults.news_api_base_url),
            google_api_key: read(&["GOOGLE_API_KEY", "GEMINI_API_KEY"]),
            gemini_base_url: read(&["GEMINI_BASE_URL"]).unwrap_or(defaults.gemini_base_url),
            gemini_model: read(&["GEMINI_MODEL"]).unwrap_or(defaults.gemini_model),
            addr: read(&["GEOIMPACT_ADDR"]).unwrap_or(defaults.addr),
        }
    }
}
