use crate::resolver::errors::PipelineError;
use crate::resolver::parsers::Parser;
use crate::resolver::types::{ItemType, NormalizedItem};
use crate::scrape::meta_content;
use scraper::Html;

pub struct MediumParser;

impl Parser for MediumParser {
    fn parse(&self, url: &str, body: &str) -> Result<NormalizedItem, PipelineError> {
        let document = Html::parse_document(body);

        let mut item = NormalizedItem::new(url, ItemType::Article).with_provider("medium");
        item.title = meta_content(&document, "og:title");
        item.author = meta_content(&document, "author");
        item.description = meta_content(&document, "og:description");
        item.image_url = meta_content(&document, "og:image");

        Ok(item)
    }

    fn name(&self) -> &'static str {
        "Medium"
    }
}
