pub mod config;
pub mod error;
pub mod models;
pub mod sources;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use models::GenerativeModel;
pub use sources::NewsSource;
pub use types::{
    AnalysisResult, AnalyzeRequest, Article, ArticleSource, Endpoint, NewsFeed, NewsQuery,
    RawArticle, RawSource, Sentiment,
};
