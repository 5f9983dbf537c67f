use scraper::Html;

use crate::error::ScaleError;
use crate::model::RecipeSource;

mod json_ld;

pub use self::json_ld::JsonLdExtractor;

pub trait Extractor {
    fn can_parse(&self, document: &Html) -> bool;
    fn parse(&self, document: &Html) -> Result<RecipeSource, ScaleError>;
}

/// Runs every known extractor over a page and returns the first recipe found.
pub fn extract_recipe(html: &str) -> Result<RecipeSource, ScaleError> {
    let document = Html::parse_document(html);
    let extractors: Vec<Box<dyn Extractor>> = vec![Box::new(JsonLdExtractor)];

    for extractor in extractors {
        if extractor.can_parse(&document) {
            return extractor.parse(&document);
        }
    }

    Err(ScaleError::NoExtractorMatched)
}
