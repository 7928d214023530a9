use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::ApiKey;
use crate::models::{Quote, RetrievalRequest, UpstreamPage};

// Errors talking to FavQs. The service turns all of them into a sample fallback.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(StatusCode),

    #[error("Failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

// Client for the FavQs /quotes endpoint
#[derive(Debug, Clone)]
pub struct FavQsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FavQsClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::Request)?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    // Only a real key gets a client; absent or placeholder keys mean sample mode
    pub fn for_key(
        api_key: &ApiKey,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Option<Self>, UpstreamError> {
        match api_key.as_real() {
            Some(key) => Self::new(base_url, key, timeout).map(Some),
            None => Ok(None),
        }
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn quotes_url(&self, req: &RetrievalRequest) -> Result<Url, UpstreamError> {
        let endpoint = format!("{}/quotes", self.base_url);
        let url = match req.tag() {
            Some(tag) => Url::parse_with_params(&endpoint, &[("filter", tag), ("page", "1")])?,
            None => Url::parse(&endpoint)?,
        };
        Ok(url)
    }

    // One page of quotes for `req`, at most `req.count()` of them
    pub async fn fetch(&self, req: &RetrievalRequest) -> Result<Vec<Quote>, UpstreamError> {
        let url = self.quotes_url(req)?;

        let res = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Token token={}", self.api_key))
            .send()
            .await
            .map_err(UpstreamError::Request)?;

        let status = res.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let page: UpstreamPage = res.json().await.map_err(UpstreamError::Decode)?;
        Ok(page
            .quotes
            .into_iter()
            .map(Quote::from)
            // FavQs `filter` also matches body text, keep exact tag matches only
            .filter(|q| req.tag().is_none_or(|tag| q.has_tag(tag)))
            .take(req.count())
            .collect())
    }
}
