//! Async HTTP client wrapping reqwest.
//!
//! One GET per run: follows redirects, applies a timeout, and treats any
//! non-2xx status as an error. Nothing is retried.

use std::time::Duration;

use crate::config::FetchConfig;
use crate::error::{Result, SectorError};

/// HTTP client used to fetch source pages.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client from the fetch configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and return its body. Non-2xx statuses fail with
    /// [`SectorError::HttpStatus`].
    pub async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "fetching");

        let r = self.client.get(url).send().await?;
        let status = r.status();

        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "non-success status");
            return Err(SectorError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let final_url = r.url().to_string();
        let body = r.text().await?;
        tracing::debug!(url, final_url = %final_url, bytes = body.len(), "fetched");

        Ok(body)
    }
}
