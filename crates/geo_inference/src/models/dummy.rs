use std::fmt;
use async_trait::async_trait;
use geo_core::{GenerativeModel, Result};
use serde_json::json;

use crate::prompt::prompt_title;

/// Offline model that answers every prompt with a fixed, well-formed analysis.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let title = prompt_title(prompt).unwrap_or("the article");
        let response = json!({
            "summary": format!("Offline summary of: {}", title),
            "geopoliticalContext": "Generated without a language model; no context was analyzed.",
            "impactForIndia": format!("Run with the Gemini model to assess how \"{}\" affects India.", title),
            "sentiment": "neutral",
            "keyTakeaways": [format!("Headline: {}", title)],
            "timeline": "Medium-term",
        });
        Ok(response.to_string())
    }
}
