use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_QUERY: &str = "geopolitics";
pub const DEFAULT_COUNTRY: &str = "in";
pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_SOURCE_NAME: &str = "International News";

pub const DEFAULT_SUMMARY: &str = "Analysis completed";
pub const DEFAULT_CONTEXT: &str = "Context analysis provided";
pub const DEFAULT_IMPACT: &str = "Impact analysis provided";
pub const DEFAULT_TIMELINE: &str = "Medium-term";

/// An article as returned by the news search API. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub source: Option<RawSource>,
    pub published_at: Option<String>,
    pub url_to_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl RawArticle {
    /// Title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn url(&self) -> Option<&str> {
        non_empty(self.url.as_deref())
    }

    pub fn source_name(&self) -> Option<&str> {
        non_empty(self.source.as_ref().and_then(|s| s.name.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub name: String,
}

/// A normalized news item surfaced to the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub url: String,
    pub source: ArticleSource,
    pub published_at: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
}

impl Article {
    /// `published_at` as a timestamp, or `None` when it is not RFC 3339.
    pub fn published_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
    }
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parameters of one feed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsQuery {
    pub q: String,
    pub country: String,
    pub category: String,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            q: DEFAULT_QUERY.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl NewsQuery {
    /// Replaces blank parameters with their defaults.
    pub fn normalized(self) -> Self {
        fn or_default(value: String, default: &str) -> String {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value
            }
        }

        Self {
            q: or_default(self.q, DEFAULT_QUERY),
            country: or_default(self.country, DEFAULT_COUNTRY),
            category: or_default(self.category, DEFAULT_CATEGORY),
        }
    }
}

/// One of the upstream query shapes issued per aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Country-scoped headlines matching the topic.
    CountryHeadlines { country: String, query: String },
    /// Global full-text search sorted by publish time.
    Everything { query: String },
    /// Category-scoped top headlines.
    CategoryHeadlines { category: String },
}

impl Endpoint {
    pub fn for_query(query: &NewsQuery) -> [Endpoint; 3] {
        [
            Endpoint::CountryHeadlines {
                country: query.country.clone(),
                query: query.q.clone(),
            },
            Endpoint::Everything {
                query: query.q.clone(),
            },
            Endpoint::CategoryHeadlines {
                category: query.category.clone(),
            },
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::CountryHeadlines { .. } => "country-headlines",
            Endpoint::Everything { .. } => "everything",
            Endpoint::CategoryHeadlines { .. } => "category-headlines",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFeed {
    pub articles: Vec<Article>,
    pub total_results: usize,
    pub message: String,
}

impl NewsFeed {
    pub fn new(articles: Vec<Article>) -> Self {
        let total_results = articles.len();
        Self {
            articles,
            total_results,
            message: format!("Found {} recent geopolitical news articles", total_results),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Case-insensitive match on the three labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The India-focused report derived from one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub geopolitical_context: String,
    pub impact_for_india: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub key_takeaways: Vec<String>,
    pub timeline: String,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            summary: DEFAULT_SUMMARY.to_string(),
            geopolitical_context: DEFAULT_CONTEXT.to_string(),
            impact_for_india: DEFAULT_IMPACT.to_string(),
            sentiment: Sentiment::Neutral,
            key_takeaways: Vec::new(),
            timeline: DEFAULT_TIMELINE.to_string(),
        }
    }
}

/// Body of an analysis request. `description` stands in for `content` when
/// the full body text is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The text to analyze: `content`, else `description`, ignoring blanks.
    pub fn body(&self) -> Option<&str> {
        if !self.content.trim().is_empty() {
            return Some(&self.content);
        }
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}
