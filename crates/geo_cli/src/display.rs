use chrono::{DateTime, Local, Utc};
use geo_core::Article;
use geo_news::samples::fallback_articles;
use geo_news::TopicFilter;
use std::fmt::Write;
use tracing::{info, warn};

pub const SAMPLE_DATA_WARNING: &str = "Using sample data - NewsAPI may be temporarily unavailable";

/// Picks the articles to show for an aggregation outcome, plus a banner when
/// the live feed failed and samples stand in for it.
pub fn resolve_feed(
    result: geo_core::Result<Vec<Article>>,
    now: DateTime<Utc>,
) -> (Vec<Article>, Option<String>) {
    match result {
        Ok(articles) if articles.is_empty() => {
            info!("No live articles, showing samples");
            (fallback_articles(now), None)
        }
        Ok(articles) => (articles, None),
        Err(e) => {
            warn!("Failed to load live feed: {}", e);
            (fallback_articles(now), Some(SAMPLE_DATA_WARNING.to_string()))
        }
    }
}

/// "Just now", "5h ago", or a local date for anything older than a day.
pub fn format_age(published_at: &str, now: DateTime<Utc>) -> String {
    let Some(published) = geo_core::types::parse_timestamp(published_at) else {
        return published_at.to_string();
    };
    let hours = (now - published).num_minutes() as f64 / 60.0;

    if hours < 1.0 {
        "Just now".to_string()
    } else if hours < 24.0 {
        format!("{}h ago", hours.floor() as i64)
    } else {
        published
            .with_timezone(&Local)
            .format("%d %b %Y, %H:%M")
            .to_string()
    }
}

pub fn render_card(article: &Article, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] {}",
        article.source.name,
        format_age(&article.published_at, now)
    );
    let _ = writeln!(out, "{}", article.title);
    let _ = writeln!(out, "  {}", article.description);
    let _ = writeln!(out, "  {}  (id: {})", article.url, article.id);
    out
}

pub fn render_feed(articles: &[Article], filter: TopicFilter, now: DateTime<Utc>) -> String {
    let visible = filter.apply(articles, now);
    let mut out = String::new();

    let _ = writeln!(out, "Global Geopolitical News Feed");
    let _ = writeln!(
        out,
        "{} articles available, filter: {}\n",
        articles.len(),
        filter.label()
    );

    if visible.is_empty() {
        let _ = writeln!(out, "No articles found for the selected filter.");
        return out;
    }
    for article in visible {
        let _ = writeln!(out, "{}", render_card(article, now));
    }
    out
}

pub fn warning_banner(message: &str) -> String {
    format!("⚠️  {} (re-run to retry)", message)
}

pub fn error_panel(title: &str, message: &str) -> String {
    let width = title.chars().count().max(message.chars().count()) + 4;
    let border = "─".repeat(width);
    format!(
        "┌{border}┐\n  {title}\n  {message}\n\n  Run the command again to retry.\n└{border}┘"
    )
}
