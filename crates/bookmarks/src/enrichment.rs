//! Page metadata enrichment.
//!
//! Fetches bookmarked pages over HTTP and derives their titles, retrying once
//! when the first response is an interstitial page.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};

use bookmarks_core::metadata::{
    fallback_title, is_placeholder_title, parse_page, resolve_title, FetchError, PageFetcher,
};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                                  (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// [`PageFetcher`] backed by `reqwest`, sending browser-like headers.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpPageFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout)
            } else {
                FetchError::Request(e.to_string())
            }
        })?;

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout)
            } else {
                FetchError::Body(e.to_string())
            }
        })
    }
}

/// Derives bookmark titles from remote pages.
#[derive(Clone)]
pub struct Enricher {
    fetcher: Arc<dyn PageFetcher>,
    retry_delay: Duration,
}

impl Enricher {
    pub fn new(fetcher: Arc<dyn PageFetcher>, retry_delay: Duration) -> Self {
        Self {
            fetcher,
            retry_delay,
        }
    }

    /// Extracts a title for `url`. Never fails.
    ///
    /// An interstitial title triggers one retry after the retry delay. Fetch
    /// failures fall back to the capitalized domain, or to `url` itself.
    pub async fn extract_title(&self, url: &str) -> String {
        match self.try_extract_title(url).await {
            Ok(title) => title,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to extract page title");
                fallback_title(url)
            }
        }
    }

    async fn try_extract_title(&self, url: &str) -> Result<String, FetchError> {
        let mut page = parse_page(&self.fetcher.fetch(url).await?);

        if page.title.as_deref().is_some_and(is_placeholder_title) {
            tracing::debug!(
                url = %url,
                delay_ms = self.retry_delay.as_millis() as u64,
                "Got interstitial page, waiting and retrying"
            );
            tokio::time::sleep(self.retry_delay).await;
            page = parse_page(&self.fetcher.fetch(url).await?);
        }

        Ok(resolve_title(&page, url))
    }
}


#[cfg(test)]
mod tests {
    use std::time::Instant;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::testing::ScriptedFetcher;
    use super::*;

    const RETRY_DELAY: Duration = Duration::from_millis(50);

    fn html(title: &str, extra_head: &str) -> String {
        format!("<html><head><title>{title}</title>{extra_head}</head><body></body></html>")
    }

    fn http_enricher(timeout: Duration) -> Enricher {
        let fetcher = HttpPageFetcher::new(timeout).unwrap();
        Enricher::new(Arc::new(fetcher), RETRY_DELAY)
    }

    /// Title derived from the mock server's `host:port`.
    fn server_domain_title(server: &MockServer) -> String {
        let address = server.address();
        format!("{}:{}", address.ip(), address.port())
    }

    #[tokio::test]
    async fn test_real_title_is_fetched_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html("Real Title", "")))
            .expect(1)
            .mount(&server)
            .await;

        let title = http_enricher(Duration::from_secs(5))
            .extract_title(&format!("{}/page", server.uri()))
            .await;

        assert_eq!(title, "Real Title");
    }

    #[tokio::test]
    async fn test_browser_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html("With Headers", "")))
            .expect(1)
            .mount(&server)
            .await;

        let title = http_enricher(Duration::from_secs(5))
            .extract_title(&server.uri())
            .await;
        assert_eq!(title, "With Headers");

        // Header values contain commas, so compare the raw values received.
        let requests = server.received_requests().await.unwrap();
        let headers = &requests[0].headers;
        let value = |name: &str| headers.get(name).unwrap().to_str().unwrap().to_string();
        assert_eq!(value("user-agent"), BROWSER_USER_AGENT);
        assert_eq!(value("accept"), BROWSER_ACCEPT);
        assert_eq!(value("accept-language"), BROWSER_ACCEPT_LANGUAGE);
        assert_eq!(value("upgrade-insecure-requests"), "1");
        assert!(value("accept-encoding").contains("gzip"));
    }

    #[tokio::test]
    async fn test_interstitial_retries_exactly_once_then_falls_back_to_domain() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(503).set_body_string(html("Just a moment...", "")),
            )
            .expect(2)
            .mount(&server)
            .await;

        let started = Instant::now();
        let title = http_enricher(Duration::from_secs(5))
            .extract_title(&format!("{}/challenge", server.uri()))
            .await;

        assert!(started.elapsed() >= RETRY_DELAY);
        assert_eq!(title, server_domain_title(&server));
    }

    #[tokio::test]
    async fn test_interstitial_then_real_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html("Loading...", "")))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html("Arrived", "")))
            .expect(1)
            .mount(&server)
            .await;

        let title = http_enricher(Duration::from_secs(5))
            .extract_title(&server.uri())
            .await;

        assert_eq!(title, "Arrived");
    }

    #[tokio::test]
    async fn test_interstitial_falls_back_to_og_title() {
        let server = MockServer::start().await;
        let body = html(
            "Please wait...",
            r#"<meta property="og:title" content="Open Graph"><meta name="title" content="Meta">"#,
        );
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(2)
            .mount(&server)
            .await;

        let title = http_enricher(Duration::from_secs(5))
            .extract_title(&server.uri())
            .await;

        assert_eq!(title, "Open Graph");
    }

    #[tokio::test]
    async fn test_error_status_body_is_still_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(html("Page Not Found", "")))
            .mount(&server)
            .await;

        let title = http_enricher(Duration::from_secs(5))
            .extract_title(&server.uri())
            .await;

        assert_eq!(title, "Page Not Found");
    }

    #[tokio::test]
    async fn test_page_without_title_yields_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>hi</body></html>"))
            .expect(1)
            .mount(&server)
            .await;
        let url = format!("{}/untitled", server.uri());

        let title = http_enricher(Duration::from_secs(5)).extract_title(&url).await;

        assert_eq!(title, url);
    }

    #[tokio::test]
    async fn test_timeout_falls_back_to_domain() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(html("Too Slow", ""))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let title = http_enricher(Duration::from_millis(100))
            .extract_title(&server.uri())
            .await;

        assert_eq!(title, server_domain_title(&server));
    }

    #[tokio::test]
    async fn test_unreachable_host_falls_back_to_domain() {
        let title = http_enricher(Duration::from_secs(2))
            .extract_title("http://127.0.0.1:1/nothing-here")
            .await;

        assert_eq!(title, "127.0.0.1:1");
    }

    #[tokio::test]
    async fn test_unparseable_url_is_returned_unchanged() {
        let title = http_enricher(Duration::from_secs(2))
            .extract_title("definitely not a url")
            .await;

        assert_eq!(title, "definitely not a url");
    }

    #[tokio::test]
    async fn test_failure_during_retry_falls_back_to_domain() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![
            Ok(html("Just a moment...", "")),
            Err(FetchError::Request("connection reset".to_string())),
        ]));
        let enricher = Enricher::new(fetcher.clone(), RETRY_DELAY);

        let title = enricher.extract_title("https://www.example.com/a").await;

        assert_eq!(title, "Example.com");
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_title_counts_as_interstitial() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![
            Ok(html("", "")),
            Ok(html("", r#"<meta name="title" content="From Meta">"#)),
        ]));
        let enricher = Enricher::new(fetcher.clone(), RETRY_DELAY);

        let title = enricher.extract_title("https://example.com").await;

        assert_eq!(title, "From Meta");
        assert_eq!(fetcher.calls(), 2);
    }
}
