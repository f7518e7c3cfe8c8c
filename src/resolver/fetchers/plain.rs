use crate::resolver::errors::PipelineError;
use crate::resolver::fetchers::Fetcher;
use async_trait::async_trait;
use reqwest::StatusCode;

/// GET the page itself.
///
/// Only a 404 fails by default; other statuses hand their body to the parser
/// unless `strict_status` is set.
pub struct PlainFetcher {
    client: reqwest::Client,
    strict_status: bool,
}

impl PlainFetcher {
    pub fn new(client: reqwest::Client, strict_status: bool) -> Self {
        Self {
            client,
            strict_status,
        }
    }
}

#[async_trait]
impl Fetcher for PlainFetcher {
    async fn fetch(&self, url: &str) -> Result<String, PipelineError> {
        log::debug!("{url}: requesting");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(PipelineError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            if self.strict_status {
                return Err(PipelineError::HttpStatus {
                    url: url.to_string(),
                    status,
                });
            }
            log::warn!("{url}: {status}, parsing body anyway");
        }

        Ok(resp.text().await?)
    }

    fn name(&self) -> &'static str {
        "Plain"
    }
}
