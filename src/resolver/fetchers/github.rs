use crate::resolver::errors::PipelineError;
use crate::resolver::fetchers::Fetcher;
use crate::resolver::identifiers::repository_id;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};

/// Repository metadata from the GitHub REST API.
pub struct GithubFetcher {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GithubFetcher {
    pub fn new(client: reqwest::Client, api_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn endpoint(&self, owner: &str, name: &str) -> String {
        format!("{}/repos/{owner}/{name}", self.api_url)
    }
}

#[async_trait]
impl Fetcher for GithubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, PipelineError> {
        let id = repository_id(url)?;
        let endpoint = self.endpoint(&id.owner, &id.name);
        log::debug!("fetch github api: {endpoint}");

        let mut req = self
            .client
            .get(&endpoint)
            .header(ACCEPT, "application/vnd.github+json");

        match self.token {
            Some(ref token) => req = req.header(AUTHORIZATION, format!("token {token}")),
            None => log::debug!("no github token configured, request is anonymous"),
        }

        let resp = req.send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }

    fn name(&self) -> &'static str {
        "GithubApi"
    }
}
