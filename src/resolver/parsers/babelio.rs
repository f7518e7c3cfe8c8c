use crate::resolver::errors::PipelineError;
use crate::resolver::parsers::Parser;
use crate::resolver::types::{ItemType, NormalizedItem};
use crate::scrape::{meta_content, title_parts};
use scraper::Html;

/// Book pages; the `<title>` reads "Title - Author - Babelio".
pub struct BabelioParser;

impl Parser for BabelioParser {
    fn parse(&self, url: &str, body: &str) -> Result<NormalizedItem, PipelineError> {
        let document = Html::parse_document(body);
        let mut headers = title_parts(&document).into_iter();

        let mut item = NormalizedItem::new(url, ItemType::Book).with_provider("babelio");
        item.title = headers.next();
        item.author = headers.next();
        item.image_url = meta_content(&document, "og:image");

        Ok(item)
    }

    fn name(&self) -> &'static str {
        "Babelio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.babelio.com/livres/Herbert-Dune/3411";

    #[test]
    fn test_parse_book() {
        let html = r#"<html><head>
            <title>Dune - Frank Herbert - Babelio</title>
            <meta property="og:image" content="https://www.babelio.com/couv/dune.jpg">
        </head><body></body></html>"#;

        let item = BabelioParser.parse(URL, html).unwrap();
        assert_eq!(item.title.as_deref(), Some("Dune"));
        assert_eq!(item.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(item.image_url.as_deref(), Some("https://www.babelio.com/couv/dune.jpg"));
        assert_eq!(item.item_type, ItemType::Book);
        assert_eq!(item.product_url, URL);
    }

    #[test]
    fn test_title_without_separator() {
        let html = "<html><head><title>Babelio</title></head></html>";

        let item = BabelioParser.parse(URL, html).unwrap();
        assert_eq!(item.title.as_deref(), Some("Babelio"));
        assert!(item.author.is_none());
        assert!(item.image_url.is_none());
    }
}
