pub mod aggregator;
pub mod descriptions;
pub mod filters;
pub mod samples;
pub mod sources;

pub use aggregator::NewsAggregator;
pub use filters::TopicFilter;
pub use sources::{create_source, NewsApiClient};

pub mod prelude {
    pub use super::aggregator::NewsAggregator;
    pub use super::filters::TopicFilter;
    pub use geo_core::{Article, NewsFeed, NewsQuery, Result, Error};
}
