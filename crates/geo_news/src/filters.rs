use chrono::{DateTime, Duration, Utc};
use geo_core::Article;
use std::fmt;
use std::str::FromStr;

/// Topic filters offered by the feed. Keyword filters match the lower-cased
/// title, description and content of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TopicFilter {
    #[default]
    All,
    IndiaChina,
    IndiaUsa,
    GlobalConflicts,
    Economic,
    Security,
    Diplomatic,
    /// Published within the last 24 hours.
    Latest,
}

impl TopicFilter {
    pub const ALL: [TopicFilter; 8] = [
        TopicFilter::All,
        TopicFilter::IndiaChina,
        TopicFilter::IndiaUsa,
        TopicFilter::GlobalConflicts,
        TopicFilter::Economic,
        TopicFilter::Security,
        TopicFilter::Diplomatic,
        TopicFilter::Latest,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TopicFilter::All => "all",
            TopicFilter::IndiaChina => "india-china",
            TopicFilter::IndiaUsa => "india-usa",
            TopicFilter::GlobalConflicts => "global-conflicts",
            TopicFilter::Economic => "economic",
            TopicFilter::Security => "security",
            TopicFilter::Diplomatic => "diplomatic",
            TopicFilter::Latest => "latest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TopicFilter::All => "All News",
            TopicFilter::IndiaChina => "India-China",
            TopicFilter::IndiaUsa => "India-USA",
            TopicFilter::GlobalConflicts => "Global Conflicts",
            TopicFilter::Economic => "Economic",
            TopicFilter::Security => "Security & Defense",
            TopicFilter::Diplomatic => "Diplomatic",
            TopicFilter::Latest => "Latest Updates",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            TopicFilter::IndiaChina => &["china", "chinese"],
            TopicFilter::IndiaUsa => &["usa", "america", "united states"],
            TopicFilter::GlobalConflicts => &["conflict", "war", "tension", "crisis"],
            TopicFilter::Economic => &["economic", "trade", "economy", "financial"],
            TopicFilter::Security => &["security", "defense", "military", "strategic"],
            TopicFilter::Diplomatic => &["diplomatic", "foreign", "relations", "partnership"],
            TopicFilter::All | TopicFilter::Latest => &[],
        }
    }

    pub fn matches(&self, article: &Article, now: DateTime<Utc>) -> bool {
        match self {
            TopicFilter::All => true,
            TopicFilter::Latest => article
                .published_timestamp()
                .is_some_and(|published| now - published <= Duration::hours(24)),
            _ => {
                let text = format!(
                    "{} {} {}",
                    article.title, article.description, article.content
                )
                .to_lowercase();
                self.keywords().iter().any(|keyword| text.contains(keyword))
            }
        }
    }

    pub fn apply<'a>(&self, articles: &'a [Article], now: DateTime<Utc>) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a, now)).collect()
    }
}

impl fmt::Display for TopicFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TopicFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "latest-24h" {
            return Ok(TopicFilter::Latest);
        }
        TopicFilter::ALL
            .iter()
            .find(|filter| filter.id() == s)
            .copied()
            .ok_or_else(|| {
                let ids: Vec<&str> = TopicFilter::ALL.iter().map(|f| f.id()).collect();
                format!("Unknown topic filter '{}'. Available: {}", s, ids.join(", "))
            })
    }
}
