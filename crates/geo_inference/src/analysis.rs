use std::fmt;
use std::sync::Arc;
use geo_core::{AnalysisResult, AnalyzeRequest, Error, GenerativeModel, Result};
use tracing::{debug, info, warn};

use crate::parser::{parse_analysis, ParsedAnalysis};
use crate::prompt::analysis_prompt;

const RESPONSE_PREVIEW_CHARS: usize = 200;

/// Turns one article into an India-impact report through a generative model.
pub struct AnalysisGenerator {
    model: Arc<dyn GenerativeModel>,
}

impl fmt::Debug for AnalysisGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisGenerator")
            .field("model", &self.model)
            .finish()
    }
}

impl AnalysisGenerator {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        let (title, body) = validate(request)?;

        info!("🤖 Generating analysis for '{}' with {}", title, self.model_name());
        let raw = self
            .model
            .generate(&analysis_prompt(title, body))
            .await
            .map_err(|e| match e {
                Error::Configuration(_) | Error::Generation(_) => e,
                other => Error::Generation(other.to_string()),
            })?;
        debug!("Raw model response: {}...", preview(&raw));

        match parse_analysis(&raw) {
            ParsedAnalysis::Parsed(analysis) => {
                info!("✨ Analysis parsed for '{}'", title);
                Ok(analysis)
            }
            ParsedAnalysis::Recovered { analysis, reason } => {
                warn!("⚠️ Model response for '{}' was not valid JSON ({}), recovered from text", title, reason);
                Ok(analysis)
            }
        }
    }
}

fn validate(request: &AnalyzeRequest) -> Result<(&str, &str)> {
    let missing = || Error::InvalidInput("Title and content are required".to_string());
    if request.title.trim().is_empty() {
        return Err(missing());
    }
    let body = request.body().ok_or_else(missing)?;
    Ok((&request.title, body))
}

fn preview(text: &str) -> String {
    text.chars().take(RESPONSE_PREVIEW_CHARS).collect()
}
