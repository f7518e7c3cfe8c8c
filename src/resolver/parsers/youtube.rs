use crate::resolver::errors::PipelineError;
use crate::resolver::parsers::Parser;
use crate::resolver::types::{ItemMeta, ItemType, MetaValue, NormalizedItem};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct VideoList {
    items: Vec<Video>,
}

#[derive(Debug, Deserialize)]
struct Video {
    snippet: Snippet,
    statistics: Statistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: Option<String>,
    channel_title: Option<String>,
    description: Option<String>,
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: Option<String>,
}

// The API sends counters as strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
}

/// `GET /youtube/v3/videos` payloads; only the first item is used.
pub struct YoutubeParser;

impl Parser for YoutubeParser {
    fn parse(&self, url: &str, body: &str) -> Result<NormalizedItem, PipelineError> {
        let list: VideoList = serde_json::from_str(body)?;
        let video = list
            .items
            .into_iter()
            .next()
            .ok_or_else(|| PipelineError::structural("video list has no items"))?;

        let meta: ItemMeta = [
            ("viewCount", video.statistics.view_count),
            ("likeCount", video.statistics.like_count),
        ]
        .into_iter()
        .filter_map(|(key, count)| count.map(|c| (key.to_string(), MetaValue::Text(c))))
        .collect();

        let snippet = video.snippet;
        let mut item = NormalizedItem::new(url, ItemType::Video).with_provider("youtube");
        item.title = snippet.title.filter(|s| !s.is_empty());
        item.author = snippet.channel_title.filter(|s| !s.is_empty());
        item.description = snippet.description.filter(|s| !s.is_empty());
        item.image_url = snippet
            .thumbnails
            .and_then(|t| t.high)
            .and_then(|t| t.url)
            .filter(|s| !s.is_empty());
        item.meta = Some(meta);

        Ok(item)
    }

    fn name(&self) -> &'static str {
        "YoutubeApi"
    }
}
