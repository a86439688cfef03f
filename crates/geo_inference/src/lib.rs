use geo_core::config::{Config, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use std::fmt;

pub mod analysis;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod report;

pub use analysis::AnalysisGenerator;
pub use models::create_model;
pub use parser::{parse_analysis, ParsedAnalysis};

/// Selects and configures the generative model.
#[derive(Clone)]
pub struct InferenceConfig {
    /// `gemini` or `dummy`
    pub backend: String,
    pub api_key: Option<String>,
    pub model_name: String,
    pub base_url: String,
}

impl fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("backend", &self.backend)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            backend: "gemini".to_string(),
            api_key: None,
            model_name: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

impl InferenceConfig {
    pub fn from_config(config: &Config, backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            api_key: config.google_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.clone(),
        }
    }
}

pub mod prelude {
    pub use super::InferenceConfig;
    pub use super::analysis::AnalysisGenerator;
    pub use super::models::create_model;
    pub use geo_core::{AnalysisResult, AnalyzeRequest, Result, Error};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DummyModel;
    use geo_core::AnalyzeRequest;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_inference_pipeline() {
        let generator = AnalysisGenerator::new(Arc::new(DummyModel::new()));
        let analysis = generator
            .analyze(&AnalyzeRequest::new("Test Article", "Some body text."))
            .await
            .unwrap();
        assert_eq!(analysis.summary, "Offline summary of: Test Article");
    }

    #[test]
    fn test_config_from_environment_settings() {
        let config = Config {
            google_api_key: Some("key".to_string()),
            gemini_model: "gemini-1.5-flash".to_string(),
            ..Config::default()
        };
        let inference = InferenceConfig::from_config(&config, "gemini");
        assert_eq!(inference.api_key.as_deref(), Some("key"));
        assert_eq!(inference.model_name, "gemini-1.5-flash");
        assert!(!format!("{:?}", inference).contains("\"key\""));
    }
}
