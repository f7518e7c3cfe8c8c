use crate::resolver::errors::PipelineError;
use crate::resolver::parsers::Parser;
use crate::resolver::types::{ItemType, NormalizedItem};
use crate::scrape::{select_attr, select_first_text, select_text};
use scraper::Html;

/// Book product pages on livre.fnac.com.
pub struct FnacParser;

impl Parser for FnacParser {
    fn parse(&self, url: &str, body: &str) -> Result<NormalizedItem, PipelineError> {
        let document = Html::parse_document(body);

        let mut item = NormalizedItem::new(url, ItemType::Book).with_provider("fnac");
        item.title = select_text(&document, ".f-productHeader-Title");
        // older product pages only list the author in the characteristics table
        item.author = select_first_text(&document, ".authorStrate__name")
            .or_else(|| select_first_text(&document, ".characteristicsDashboard__definition"));
        item.image_url = select_attr(&document, ".js-ProductVisuals-imagePreview", "src");

        Ok(item)
    }

    fn name(&self) -> &'static str {
        "Fnac"
    }
}
