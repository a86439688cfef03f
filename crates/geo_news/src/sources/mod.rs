use std::sync::Arc;
use geo_core::{Config, NewsSource, Result};

pub mod newsapi;

pub use newsapi::NewsApiClient;

/// Builds the news source described by the configuration.
pub fn create_source(config: &Config) -> Result<Arc<dyn NewsSource>> {
    let client = NewsApiClient::new(config.news_api_key.clone())?
        .with_base_url(config.news_api_base_url.clone());
    Ok(Arc::new(client))
}
