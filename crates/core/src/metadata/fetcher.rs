use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching a page.
///
/// These never reach API callers: title extraction falls back to the domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Fetches the HTML body of a remote page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Gets the page body. Non-success status codes still return the body.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Request("connection refused".to_string()).to_string(),
            "Request failed: connection refused"
        );
        assert_eq!(
            FetchError::Timeout(Duration::from_secs(15)).to_string(),
            "Request timed out after 15s"
        );
    }
}
