use std::sync::Arc;
use geo_core::{Config, Result};
use geo_inference::{create_model, AnalysisGenerator, InferenceConfig};
use geo_news::{create_source, NewsAggregator};

#[derive(Debug, Clone)]
pub struct AppState {
    pub aggregator: Arc<NewsAggregator>,
    pub analyzer: Arc<AnalysisGenerator>,
}

impl AppState {
    pub fn new(aggregator: NewsAggregator, analyzer: AnalysisGenerator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            analyzer: Arc::new(analyzer),
        }
    }

    /// Wires the NewsAPI source and the named model from configuration.
    pub fn from_config(config: &Config, model: &str) -> Result<Self> {
        let aggregator = NewsAggregator::new(create_source(config)?);
        let analyzer = AnalysisGenerator::new(create_model(&InferenceConfig::from_config(config, model))?);
        Ok(Self::new(aggregator, analyzer))
    }
}
