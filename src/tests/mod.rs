mod pipeline;

use crate::resolver::errors::PipelineError;
use crate::resolver::fetchers::Fetcher;
use async_trait::async_trait;

/// Serves the same body for every url.
pub struct StaticFetcher(pub &'static str);

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, PipelineError> {
        Ok(self.0.to_string())
    }

    fn name(&self) -> &'static str {
        "Static"
    }
}

/// Answers every url with a 404.
pub struct MissingFetcher;

#[async_trait]
impl Fetcher for MissingFetcher {
    async fn fetch(&self, url: &str) -> Result<String, PipelineError> {
        Err(PipelineError::NotFound {
            url: url.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "Missing"
    }
}
