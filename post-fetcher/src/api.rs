use crate::records::parse_records;
use crate::{build_search_query, PostFetcher};
use moodscan_core::{FetchConfig, FetchError, Post};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Fetches posts from an HTTP search service.
///
/// Sends `GET {endpoint}?q=<query>&limit=<n>` and accepts scraper-style
/// records in any of the shapes understood by [`parse_records`].
#[derive(Debug, Clone)]
pub struct HttpSearchFetcher {
    http_client: Client,
    endpoint: String,
    language: Option<String>,
    timeout: Duration,
}

impl HttpSearchFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http_client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
            language: config.language.clone(),
            timeout,
        })
    }

    async fn request(&self, search_query: &str, max_count: usize) -> Result<String, FetchError> {
        let start_time = Instant::now();
        let limit = max_count.to_string();

        info!("Searching {} for '{}'", self.endpoint, search_query);
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[("q", search_query), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!("Network error for {}: {}", self.endpoint, e);
                if e.is_timeout() {
                    FetchError::Timeout {
                        seconds: self.timeout.as_secs(),
                    }
                } else {
                    FetchError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Search request failed with status: {} for {}",
                status, self.endpoint
            );
            return Err(FetchError::Status {
                status_code: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read search response: {}", e);
            FetchError::InvalidResponse {
                details: "Failed to read response body".to_string(),
            }
        })?;

        debug!(
            "Search request completed in {:?} ({} bytes)",
            start_time.elapsed(),
            body.len()
        );
        Ok(body)
    }
}

impl PostFetcher for HttpSearchFetcher {
    async fn fetch(&self, query: &str, max_count: usize) -> Result<Vec<Post>, FetchError> {
        let search_query = build_search_query(query, self.language.as_deref());
        let body = self.request(&search_query, max_count).await?;

        let posts = parse_records(&body)?
            .into_iter()
            .take(max_count)
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        info!("Retrieved {} posts for '{}'", posts.len(), search_query);
        Ok(posts)
    }
}
