use async_trait::async_trait;
use geo_core::config::DEFAULT_NEWS_API_BASE_URL;
use geo_core::{Endpoint, Error, NewsSource, RawArticle, Result};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = "GeoImpact/1.0";
const EVERYTHING_PAGE_SIZE: u32 = 20;
const CATEGORY_PAGE_SIZE: u32 = 15;

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: Option<String>,
    articles: Option<Vec<RawArticle>>,
    code: Option<String>,
    message: Option<String>,
}

/// Client for the NewsAPI.org v2 search endpoints.
pub struct NewsApiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl NewsApiClient {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: DEFAULT_NEWS_API_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::Configuration("News API key is not configured".to_string()))
    }

    /// Builds the request URL for an endpoint. The key travels in a header, not here.
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url> {
        let path = match endpoint {
            Endpoint::Everything { .. } => "everything",
            _ => "top-headlines",
        };
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| Error::Configuration(format!("Invalid news API base URL: {}", e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            match endpoint {
                Endpoint::CountryHeadlines { country, query } => {
                    pairs.append_pair("country", country).append_pair("q", query);
                }
                Endpoint::Everything { query } => {
                    pairs
                        .append_pair("q", query)
                        .append_pair("sortBy", "publishedAt")
                        .append_pair("language", "en")
                        .append_pair("pageSize", &EVERYTHING_PAGE_SIZE.to_string());
                }
                Endpoint::CategoryHeadlines { category } => {
                    pairs
                        .append_pair("category", category)
                        .append_pair("language", "en")
                        .append_pair("pageSize", &CATEGORY_PAGE_SIZE.to_string());
                }
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    fn ensure_configured(&self) -> Result<()> {
        self.api_key().map(|_| ())
    }

    async fn fetch(&self, endpoint: &Endpoint) -> Result<Vec<RawArticle>> {
        let api_key = self.api_key()?;
        let url = self.endpoint_url(endpoint)?;
        debug!("Fetching {} from {}", endpoint, url);

        let response = self
            .client
            .get(url)
            .header("X-Api-Key", api_key)
            .send()
            .await
            .map_err(|e| Error::upstream(endpoint.label(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            return Err(Error::upstream(
                endpoint.label(),
                format!("{} - {}", status, body),
            ));
        }

        let body = response
            .json::<NewsApiResponse>()
            .await
            .map_err(|e| Error::upstream(endpoint.label(), format!("invalid response: {}", e)))?;

        if body.status.as_deref().is_some_and(|s| s != "ok") {
            return Err(Error::upstream(
                endpoint.label(),
                format!(
                    "{}: {}",
                    body.code.unwrap_or_else(|| "unknown".to_string()),
                    body.message.unwrap_or_else(|| "Unknown error".to_string())
                ),
            ));
        }

        Ok(body.articles.unwrap_or_default())
    }
}
