use async_trait::async_trait;
use crate::types::{Endpoint, RawArticle};
use crate::Result;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the name of the news provider
    fn name(&self) -> &str;

    /// Fails with `Error::Configuration` when the source cannot be queried at all
    fn ensure_configured(&self) -> Result<()> {
        Ok(())
    }

    /// Fetches the raw articles for one endpoint shape
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Vec<RawArticle>>;
}
