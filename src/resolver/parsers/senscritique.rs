use crate::resolver::errors::PipelineError;
use crate::resolver::parsers::Parser;
use crate::resolver::types::{ItemType, NormalizedItem};
use crate::scrape::{select_attr, select_text, title_parts};
use scraper::Html;

/// Catalogue pages for films, series, books, albums and games.
///
/// The item type comes from the first path segment (`/film/...`, `/livre/...`).
pub struct SensCritiqueParser;

impl SensCritiqueParser {
    fn catalogue_type(url: &str) -> Result<ItemType, PipelineError> {
        let (_, path) = url
            .split_once("senscritique.com/")
            .ok_or_else(|| PipelineError::structural(format!("no catalogue path in {url}")))?;

        let segment = path
            .split(['/', '?', '#'])
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| PipelineError::structural(format!("no catalogue path in {url}")))?;

        Ok(ItemType::from_catalogue_segment(segment).unwrap_or_else(|| {
            log::debug!("unknown senscritique section {segment}, classifying as website");
            ItemType::Website
        }))
    }
}

impl Parser for SensCritiqueParser {
    fn parse(&self, url: &str, body: &str) -> Result<NormalizedItem, PipelineError> {
        let item_type = Self::catalogue_type(url)?;
        let document = Html::parse_document(body);

        let mut item = NormalizedItem::new(url, item_type).with_provider("senscritique");
        item.title = title_parts(&document).into_iter().next();
        item.author = select_text(&document, r#"span[itemprop="creator"]"#)
            .or_else(|| select_text(&document, r#"span[itemprop="director"]"#));
        item.image_url = select_attr(&document, ".lightview", "href");

        Ok(item)
    }

    fn name(&self) -> &'static str {
        "SC"
    }
}
