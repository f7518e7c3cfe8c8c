pub mod github;
pub mod plain;
pub mod youtube;

pub use github::GithubFetcher;
pub use plain::PlainFetcher;
pub use youtube::YoutubeFetcher;

use crate::resolver::errors::PipelineError;
use async_trait::async_trait;

/// Retrieves the raw content a parser works on.
///
/// Implementations never retry; a failed request is reported as is.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, PipelineError>;

    /// Name of this fetcher for logging/debugging
    fn name(&self) -> &'static str;
}
