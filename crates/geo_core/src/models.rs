use async_trait::async_trait;
use std::fmt;
use crate::Result;

#[async_trait]
pub trait GenerativeModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Sends a single prompt and returns the raw completion text
    async fn generate(&self, prompt: &str) -> Result<String>;
}
