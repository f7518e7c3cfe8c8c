use crate::resolver::errors::PipelineError;
use crate::resolver::fetchers::Fetcher;
use crate::resolver::identifiers::video_id;
use async_trait::async_trait;
use reqwest::header::ACCEPT;

const VIDEO_PARTS: &str = "statistics,contentDetails,snippet";

/// Video metadata from the YouTube Data API v3.
pub struct YoutubeFetcher {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl YoutubeFetcher {
    pub fn new(client: reqwest::Client, api_url: &str, api_key: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl Fetcher for YoutubeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, PipelineError> {
        let id = video_id(url)?;
        let endpoint = format!("{}/youtube/v3/videos", self.api_url);
        log::debug!("fetch youtube api: {endpoint} id={id}");

        let resp = self
            .client
            .get(&endpoint)
            .header(ACCEPT, "application/json")
            .query(&[
                ("part", VIDEO_PARTS),
                ("id", id.as_str()),
                ("key", self.api_key.as_deref().unwrap_or_default()),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.text().await?)
    }

    fn name(&self) -> &'static str {
        "YoutubeApi"
    }
}
