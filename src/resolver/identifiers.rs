use crate::resolver::errors::PipelineError;
use once_cell::sync::Lazy;
use regex::Regex;

/// `youtu.be/<id>`, id ends at `/`, `:`, a query, a fragment or the end
static SHORT_VIDEO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"youtu\.be/(?P<id>[^/:?#]+)(?:[/:?#]|$)").expect("Failed to compile video regex")
});

static REPOSITORY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?(?:[^./]+\.)?github\.com/(?P<owner>[^/:?#]+)/(?P<name>[^/:?#]+)")
        .expect("Failed to compile repository regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

/// Extract a YouTube video id from either the short-host form or the `v` query parameter.
pub fn video_id(url: &str) -> Result<String, PipelineError> {
    if let Some(id) = SHORT_VIDEO_REGEX
        .captures(url)
        .and_then(|caps| caps.name("id"))
    {
        return Ok(id.as_str().to_string());
    }

    query_param(url, "v").ok_or_else(|| PipelineError::identifier("video id", url))
}

/// Extract the `owner/name` pair of a GitHub repository URL.
pub fn repository_id(url: &str) -> Result<RepositoryId, PipelineError> {
    let caps = REPOSITORY_REGEX
        .captures(url)
        .ok_or_else(|| PipelineError::identifier("repository owner and name", url))?;

    let owner = caps["owner"].to_string();
    let name = caps["name"].trim_end_matches(".git").to_string();
    if name.is_empty() {
        return Err(PipelineError::identifier("repository owner and name", url));
    }

    Ok(RepositoryId { owner, name })
}

// Works on scheme-less input, which `url::Url` refuses to parse.
fn query_param(url: &str, key: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.into_owned())
}
