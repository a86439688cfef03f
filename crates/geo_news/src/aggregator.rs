use chrono::{DateTime, SecondsFormat, Utc};
use futures::future::join_all;
use geo_core::types::DEFAULT_SOURCE_NAME;
use geo_core::{Article, ArticleSource, Endpoint, NewsFeed, NewsQuery, NewsSource, RawArticle, Result};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::descriptions::synthesize_description;

/// Upper bound on articles returned per aggregation.
pub const MAX_ARTICLES: usize = 20;
/// Descriptions shorter than this (in characters) are replaced.
pub const MIN_DESCRIPTION_CHARS: usize = 50;

/// Fans a query out to every endpoint shape of a news source and merges the results.
pub struct NewsAggregator {
    source: Arc<dyn NewsSource>,
}

impl fmt::Debug for NewsAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsAggregator")
            .field("source", &self.source.name())
            .finish()
    }
}

impl NewsAggregator {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self { source }
    }

    pub async fn aggregate(&self, query: &NewsQuery) -> Result<Vec<Article>> {
        self.source.ensure_configured()?;

        info!(
            "📰 Aggregating '{}' news (country={}, category={}) from {}",
            query.q,
            query.country,
            query.category,
            self.source.name()
        );

        let endpoints = Endpoint::for_query(query);
        let fetches = endpoints.iter().map(|endpoint| async move {
            match self.source.fetch(endpoint).await {
                Ok(articles) => {
                    debug!("{} returned {} articles", endpoint, articles.len());
                    articles
                }
                Err(e) => {
                    warn!("⚠️ Skipping {} endpoint: {}", endpoint, e);
                    Vec::new()
                }
            }
        });

        let raw: Vec<RawArticle> = join_all(fetches).await.into_iter().flatten().collect();
        let fetched = raw.len();
        let articles = normalize(raw, Utc::now());
        info!("✨ Kept {} of {} fetched articles", articles.len(), fetched);

        Ok(articles)
    }

    pub async fn feed(&self, query: &NewsQuery) -> Result<NewsFeed> {
        self.aggregate(query).await.map(NewsFeed::new)
    }
}

/// Filters, de-duplicates, backfills, sorts and truncates merged upstream results.
pub fn normalize(raw: Vec<RawArticle>, now: DateTime<Utc>) -> Vec<Article> {
    let mut seen = HashSet::new();
    let mut articles: Vec<Article> = raw
        .into_iter()
        .filter(|article| article.title().is_some() && article.url().is_some())
        .filter(|article| seen.insert(article.title().unwrap_or_default().to_string()))
        .enumerate()
        .map(|(index, article)| to_article(article, index, now))
        .collect();

    // Stable and descending; unparsable timestamps (None) sort last.
    articles.sort_by(|a, b| b.published_timestamp().cmp(&a.published_timestamp()));
    articles.truncate(MAX_ARTICLES);
    articles
}

fn to_article(raw: RawArticle, index: usize, now: DateTime<Utc>) -> Article {
    let title = raw.title().unwrap_or_default().to_string();
    let upstream_content = raw.content.clone().filter(|c| !c.is_empty());

    let mut description = raw
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .or_else(|| upstream_content.clone())
        .unwrap_or_default();
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        description = synthesize_description(&title).to_string();
    }

    let source = raw.source_name().unwrap_or(DEFAULT_SOURCE_NAME).to_string();
    let url = raw.url().unwrap_or_default().to_string();
    let published_at = raw
        .published_at
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true));

    Article {
        id: format!("article-{}", index),
        content: upstream_content.unwrap_or_else(|| description.clone()),
        title,
        description,
        url,
        source: ArticleSource { name: source },
        published_at,
        url_to_image: raw.url_to_image.filter(|u| !u.is_empty()),
    }
}
