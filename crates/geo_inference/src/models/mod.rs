use std::sync::Arc;
use geo_core::{Error, GenerativeModel, Result};

use crate::InferenceConfig;

pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

pub const AVAILABLE_MODELS: [&str; 2] = ["gemini", "dummy"];

/// Builds the model named by `config.backend`.
pub fn create_model(config: &InferenceConfig) -> Result<Arc<dyn GenerativeModel>> {
    match config.backend.to_lowercase().as_str() {
        "gemini" => {
            let model = GeminiModel::new(config.api_key.clone())?
                .with_model_name(config.model_name.clone())
                .with_base_url(config.base_url.clone());
            Ok(Arc::new(model))
        }
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Configuration(format!(
            "Unknown model '{}'. Available models: {}",
            other,
            AVAILABLE_MODELS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model() {
        let config = InferenceConfig::default();
        let model = create_model(&config).unwrap();
        assert_eq!(model.name(), "gemini-2.0-flash");

        let config = InferenceConfig {
            backend: "Dummy".to_string(),
            ..InferenceConfig::default()
        };
        assert_eq!(create_model(&config).unwrap().name(), "Dummy");

        let config = InferenceConfig {
            backend: "ollama".to_string(),
            ..InferenceConfig::default()
        };
        let err = create_model(&config).unwrap_err();
        assert!(err.to_string().contains("Available models: gemini, dummy"));
    }
}
