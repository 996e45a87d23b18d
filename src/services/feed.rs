use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::constants::FEED_FORMAT;
use crate::error::{Error, Result};

/// Hard request timeout so a stalled feed cannot wedge a poll.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the quote feed.
pub struct FeedClient {
    client: Client,
    base_url: String,
}

impl FeedClient {
    /// Create a feed client for the given endpoint.
    pub fn new(base_url: String) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "Invalid feed URL: must start with http:// or https://, got: '{}'",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Fetch raw feed text for a normalized, comma-joined symbol list.
    /// The query builder URL-encodes the list. Any failure here is
    /// fetch-fatal for the current poll: the caller publishes nothing
    /// and leaves its scheduling state untouched.
    pub async fn fetch_quotes(&self, symbols: &str) -> Result<String> {
        if symbols.is_empty() {
            return Err(Error::InvalidInput("Empty symbol query".to_string()));
        }

        debug!(symbols = symbols, url = %self.base_url, "fetching quotes");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("f", FEED_FORMAT), ("s", symbols)])
            .send()
            .await
            .map_err(|e| Error::Network(format!("Feed request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("Feed returned HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read feed body: {}", e)))?;

        info!(bytes = body.len(), "feed response received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_url() {
        assert!(FeedClient::new("ftp://example.com/quotes".to_string()).is_err());
        assert!(FeedClient::new("quotes.csv".to_string()).is_err());
    }

    #[test]
    fn test_trims_trailing_slash() {
        let client = FeedClient::new("http://example.com/quotes/ ".to_string()).unwrap();
        assert_eq!(client.base_url, "http://example.com/quotes");
    }
}
