use crate::constants::{
    DEFAULT_CALENDAR_BASE_URL, DEFAULT_NEWS_BASE_URL, DEFAULT_PORT, DEFAULT_QUOTES_BASE_URL,
    DEFAULT_UPSTREAM_TIMEOUT_MS,
};
use crate::error::{AppError, Result};
use std::time::Duration;

/// What to do with quotes computed under a defensive default
/// (zero previous close).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradedQuotePolicy {
    /// Keep them in the response with a zero delta.
    Show,
    /// Drop them from the response.
    Hide,
}

/// Runtime configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub calendar_base_url: String,
    pub quotes_base_url: String,
    pub news_base_url: String,
    pub news_api_key: String,
    pub timeout_ms: u64,
    pub degraded_quotes: DegradedQuotePolicy,
}

impl Config {
    /// Resolve configuration from environment variables.
    ///
    /// A missing NEWS_API_KEY is a startup error: better to refuse to boot
    /// than to silently serve demo news forever.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("Invalid PORT value: '{}'", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        let timeout_ms = match std::env::var("UPSTREAM_TIMEOUT_MS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::Config(format!("Invalid UPSTREAM_TIMEOUT_MS value: '{}'", raw))
            })?,
            Err(_) => DEFAULT_UPSTREAM_TIMEOUT_MS,
        };

        let news_api_key = std::env::var("NEWS_API_KEY")
            .map_err(|_| AppError::Config("NEWS_API_KEY is not set".to_string()))?;
        if news_api_key.trim().is_empty() {
            return Err(AppError::Config("NEWS_API_KEY is empty".to_string()));
        }

        let degraded_quotes = match std::env::var("DEGRADED_QUOTES").as_deref() {
            Ok("hide") => DegradedQuotePolicy::Hide,
            Ok("show") | Err(_) => DegradedQuotePolicy::Show,
            Ok(other) => {
                return Err(AppError::Config(format!(
                    "Invalid DEGRADED_QUOTES value: '{}' (expected show|hide)",
                    other
                )))
            }
        };

        Ok(Config {
            port,
            calendar_base_url: base_url_from_env("CALENDAR_BASE_URL", DEFAULT_CALENDAR_BASE_URL)?,
            quotes_base_url: base_url_from_env("QUOTES_BASE_URL", DEFAULT_QUOTES_BASE_URL)?,
            news_base_url: base_url_from_env("NEWS_BASE_URL", DEFAULT_NEWS_BASE_URL)?,
            news_api_key,
            timeout_ms,
            degraded_quotes,
        })
    }

    /// Bound applied to every outbound upstream call.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Read a base URL from the environment, trimming trailing slashes and
/// rejecting anything that is not http(s).
fn base_url_from_env(var: &str, default: &str) -> Result<String> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    let url = raw.trim().trim_end_matches('/').to_string();

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::Config(format!(
            "Invalid {}: must start with http:// or https://, got: '{}'",
            var, url
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        std::env::set_var("TEST_BASE_URL_A", "https://example.com/api/");
        let url = base_url_from_env("TEST_BASE_URL_A", "https://fallback").unwrap();
        assert_eq!(url, "https://example.com/api");
    }

    #[test]
    fn test_base_url_rejects_non_http() {
        std::env::set_var("TEST_BASE_URL_B", "ftp://example.com");
        assert!(base_url_from_env("TEST_BASE_URL_B", "https://fallback").is_err());
    }

    #[test]
    fn test_base_url_default_when_unset() {
        let url = base_url_from_env("TEST_BASE_URL_UNSET", "https://fallback.example").unwrap();
        assert_eq!(url, "https://fallback.example");
    }

    // One test for all NEWS_API_KEY branches: the variable is process-wide,
    // so the cases run sequentially instead of racing across tests.
    #[test]
    fn test_missing_news_api_key_is_startup_error() {
        std::env::remove_var("NEWS_API_KEY");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        std::env::set_var("NEWS_API_KEY", "");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        std::env::set_var("NEWS_API_KEY", "   ");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        std::env::set_var("NEWS_API_KEY", "test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.news_api_key, "test-key");
    }
}
