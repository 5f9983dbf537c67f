use crate::error::ScaleError;
use crate::extractors::Extractor;
use crate::model::RecipeSource;
use html_escape::decode_html_entities;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;

lazy_static! {
    static ref SCRIPT_SELECTOR: Selector =
        Selector::parse("script[type='application/ld+json']").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
}

pub struct JsonLdExtractor;

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "recipeIngredient", default)]
    recipe_ingredient: IngredientList,
    #[serde(rename = "recipeYield", default)]
    recipe_yield: Option<RecipeYield>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IngredientList {
    Single(String),
    Multiple(Vec<String>),
}

impl Default for IngredientList {
    fn default() -> Self {
        IngredientList::Multiple(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YieldValue {
    Number(f64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeYield {
    Single(YieldValue),
    Multiple(Vec<YieldValue>),
}

impl YieldValue {
    fn servings(&self) -> Option<f64> {
        match self {
            YieldValue::Number(n) => Some(*n),
            YieldValue::String(s) => NUMBER_RE
                .find(s)
                .and_then(|m| m.as_str().parse::<f64>().ok()),
        }
    }
}

impl RecipeYield {
    /// The first number stated in the yield, e.g. `4` for "4 servings".
    fn servings(&self) -> Option<f64> {
        match self {
            RecipeYield::Single(value) => value.servings(),
            RecipeYield::Multiple(values) => values.iter().find_map(YieldValue::servings),
        }
    }
}

fn decode_html_symbols(text: &str) -> String {
    // some sites double-encode entities
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

impl From<JsonLdRecipe> for RecipeSource {
    fn from(recipe: JsonLdRecipe) -> Self {
        let ingredients = match recipe.recipe_ingredient {
            IngredientList::Single(line) => vec![line],
            IngredientList::Multiple(lines) => lines,
        };
        RecipeSource {
            name: recipe
                .name
                .map(|name| decode_html_symbols(&name))
                .unwrap_or_default(),
            ingredients: ingredients
                .iter()
                .map(|line| decode_html_symbols(line).trim().to_string())
                .filter(|line| !line.is_empty())
                .collect(),
            servings: recipe.recipe_yield.as_ref().and_then(RecipeYield::servings),
        }
    }
}

fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = json_str.trim().to_string();

    // Skip any leading junk before the first object
    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        if let Some(start) = cleaned.find('{') {
            cleaned = cleaned[start..].to_string();
        }
    }

    // Trailing commas
    cleaned = cleaned.replace(",]", "]").replace(",}", "}");

    // HTML comments
    cleaned = cleaned.replace(r"<!--", "").replace("-->", "");

    cleaned
}

fn is_recipe(item: &Value) -> bool {
    match item.get("@type") {
        Some(Value::String(t)) => t == "Recipe",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Recipe")),
        _ => item.get("recipeIngredient").is_some(),
    }
}

/// Finds the recipe object in a JSON-LD document: the top-level object, an
/// element of a top-level array, or an entry in `@graph`.
fn find_recipe(json_ld: &Value) -> Option<&Value> {
    if let Some(items) = json_ld.as_array() {
        return items.iter().find_map(find_recipe);
    }
    if is_recipe(json_ld) {
        return Some(json_ld);
    }
    json_ld
        .get("@graph")
        .and_then(Value::as_array)
        .and_then(|items| items.iter().find(|item| is_recipe(item)))
}

fn scripts(document: &Html) -> impl Iterator<Item = Value> + '_ {
    document.select(&SCRIPT_SELECTOR).filter_map(|script| {
        let cleaned = sanitize_json(&script.inner_html());
        serde_json::from_str::<Value>(&cleaned).ok()
    })
}

impl Extractor for JsonLdExtractor {
    fn can_parse(&self, document: &Html) -> bool {
        scripts(document).any(|json_ld| find_recipe(&json_ld).is_some())
    }

    fn parse(&self, document: &Html) -> Result<RecipeSource, ScaleError> {
        let mut last_error = None;

        for json_ld in scripts(document) {
            let Some(recipe) = find_recipe(&json_ld) else {
                continue;
            };
            debug!("Trying JSON-LD recipe: {:#?}", recipe);

            match serde_json::from_value::<JsonLdRecipe>(recipe.clone()) {
                Ok(recipe) => {
                    let source = RecipeSource::from(recipe);
                    if source.ingredients.is_empty() {
                        last_error = Some("Recipe has no ingredients".to_string());
                        continue;
                    }
                    debug!("Found recipe {:?} with {} ingredients", source.name, source.ingredients.len());
                    return Ok(source);
                }
                Err(e) => last_error = Some(e.to_string()),
            }
        }

        Err(match last_error {
            Some(message) => ScaleError::ParseError(message),
            None => ScaleError::NoExtractorMatched,
        })
    }
}
