use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "bookmarks.db")
    pub database_path: String,
    /// Page fetch timeout in seconds (default: 15)
    pub fetch_timeout_seconds: u64,
    /// Delay before re-fetching an interstitial page, in milliseconds (default: 2,000)
    pub retry_delay_millis: u64,
    /// Whole-request timeout in seconds (default: 60)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_PATH` - SQLite database path (default: "bookmarks.db")
    /// - `FETCH_TIMEOUT_SECONDS` - Page fetch timeout (default: 15)
    /// - `RETRY_DELAY_MILLIS` - Interstitial retry delay (default: 2,000)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 60)
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "bookmarks.db".to_string()),
            fetch_timeout_seconds: parse_var("FETCH_TIMEOUT_SECONDS").unwrap_or(15),
            retry_delay_millis: parse_var("RETRY_DELAY_MILLIS").unwrap_or(2_000),
            request_timeout_seconds: parse_var("REQUEST_TIMEOUT_SECONDS").unwrap_or(60),
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_millis)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_var(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
