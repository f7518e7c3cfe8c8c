use crate::resolver::errors::PipelineError;
use crate::resolver::parsers::Parser;
use crate::resolver::types::{ItemMeta, ItemType, MetaValue, NormalizedItem};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Repository {
    name: Option<String>,
    full_name: Option<String>,
    description: Option<String>,
    owner: Owner,
    stargazers_count: Option<u64>,
    forks_count: Option<u64>,
    watchers_count: Option<u64>,
    open_issues: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Owner {
    avatar_url: Option<String>,
}

/// `GET /repos/{owner}/{repo}` payloads.
pub struct GithubParser;

impl Parser for GithubParser {
    fn parse(&self, url: &str, body: &str) -> Result<NormalizedItem, PipelineError> {
        let repo: Repository = serde_json::from_str(body)?;

        let meta: ItemMeta = [
            ("starsCount", repo.stargazers_count),
            ("forksCount", repo.forks_count),
            ("watchersCount", repo.watchers_count),
            ("issuesCount", repo.open_issues),
        ]
        .into_iter()
        .filter_map(|(key, count)| count.map(|c| (key.to_string(), MetaValue::Count(c))))
        .collect();

        let mut item = NormalizedItem::new(url, ItemType::Repository).with_provider("github");
        item.title = repo.name.filter(|s| !s.is_empty());
        item.author = repo.full_name.filter(|s| !s.is_empty());
        item.description = repo.description.filter(|s| !s.is_empty());
        item.image_url = repo.owner.avatar_url.filter(|s| !s.is_empty());
        item.meta = Some(meta);

        Ok(item)
    }

    fn name(&self) -> &'static str {
        "GithubApi"
    }
}
