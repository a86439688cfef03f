use chrono::{DateTime, SecondsFormat, Utc};
use geo_core::{Article, ArticleSource};

/// Fixed articles shown when the live feed cannot be loaded.
pub fn fallback_articles(now: DateTime<Utc>) -> Vec<Article> {
    let published_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let sample = |id: &str, title: &str, description: &str, content: &str, url: &str, source: &str| Article {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: content.to_string(),
        url: url.to_string(),
        source: ArticleSource { name: source.to_string() },
        published_at: published_at.clone(),
        url_to_image: None,
    };

    vec![
        sample(
            "fallback-1",
            "India-China Border Tensions Continue Amid Diplomatic Talks",
            "Recent developments in the India-China border region highlight ongoing diplomatic efforts to maintain peace and stability.",
            "Diplomatic channels remain open between India and China as both nations work towards resolving border disputes through peaceful dialogue.",
            "https://example.com/news1",
            "Geopolitical News",
        ),
        sample(
            "fallback-2",
            "India-US Strategic Partnership Strengthens in Indo-Pacific",
            "The United States and India continue to deepen their strategic partnership in the Indo-Pacific region.",
            "Both nations are working together to ensure regional stability and counter emerging security challenges.",
            "https://example.com/news2",
            "Strategic Affairs",
        ),
        sample(
            "fallback-3",
            "Global Economic Shifts Impact India's Trade Relations",
            "Changing global economic dynamics are reshaping India's international trade partnerships.",
            "India is adapting to new economic realities while maintaining its position as a key global player.",
            "https://example.com/news3",
            "Economic Times",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::TopicFilter;

    #[test]
    fn test_fallback_articles() {
        let now = Utc::now();
        let articles = fallback_articles(now);
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].id, "fallback-1");
        assert!(articles.iter().all(|a| a.published_timestamp().is_some()));
        assert_eq!(TopicFilter::Latest.apply(&articles, now).len(), 3);
        assert_eq!(TopicFilter::IndiaChina.apply(&articles, now).len(), 1);
    }
}
