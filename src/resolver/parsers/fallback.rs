use crate::resolver::errors::PipelineError;
use crate::resolver::parsers::Parser;
use crate::resolver::types::{ItemType, NormalizedItem};
use crate::scrape::{meta_content, select_attr, select_text};
use scraper::Html;

/// Generic website metadata, used when no provider claims the URL.
pub struct FallbackParser;

impl FallbackParser {
    /// Image from `link[rel=apple-touch-icon]`, anchored on the page host when relative.
    fn touch_icon(document: &Html, url: &str) -> Option<String> {
        let href = select_attr(document, r#"link[rel="apple-touch-icon"]"#, "href")?;
        let href = href.trim();

        if href.starts_with("http://") || href.starts_with("https://") {
            return Some(href.to_string());
        }
        if let Some(rest) = href.strip_prefix("//") {
            return Some(format!("https://{rest}"));
        }

        let url_parsed = reqwest::Url::parse(url).ok()?;
        let host = url_parsed.host_str()?;
        let host = match url_parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        Some(format!(
            "{}://{host}/{}",
            url_parsed.scheme(),
            href.trim_start_matches('/')
        ))
    }
}

impl Parser for FallbackParser {
    fn parse(&self, url: &str, body: &str) -> Result<NormalizedItem, PipelineError> {
        let document = Html::parse_document(body);

        let mut item = NormalizedItem::new(url, ItemType::Website);
        item.title = select_text(&document, "title").or_else(|| meta_content(&document, "og:title"));
        item.description = meta_content(&document, "description")
            .or_else(|| meta_content(&document, "og:description"));
        item.author = meta_content(&document, "twitter:creator")
            .or_else(|| meta_content(&document, "og:site_name"))
            .or_else(|| meta_content(&document, "application-name"));
        item.image_url = meta_content(&document, "twitter:image:src")
            .or_else(|| meta_content(&document, "og:image"))
            .or_else(|| meta_content(&document, "twitter:image"))
            .or_else(|| Self::touch_icon(&document, url));

        Ok(item)
    }

    fn name(&self) -> &'static str {
        "Fallback"
    }
}
