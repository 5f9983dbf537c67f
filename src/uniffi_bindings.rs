//! UniFFI bindings for calckitchen
//!
//! FFI-compatible types and functions for native hosts (iOS, Android).
//! Scaling is synchronous; the URL import manages its own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{
    format_quantity as render_quantity, ParsedIngredient, ScaleError, ScaledRecipe, ScalerConfig,
};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible parsed ingredient line
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub original: String,
    /// Leading quantity, if the line had one
    pub quantity: Option<f64>,
    pub unit: String,
    pub ingredient_name: String,
    pub scaled_quantity: Option<f64>,
    pub display_quantity: String,
    /// The fully rendered scaled line
    pub display_line: String,
    pub notes: Vec<String>,
}

impl From<ParsedIngredient> for FfiIngredient {
    fn from(ingredient: ParsedIngredient) -> Self {
        FfiIngredient {
            display_line: ingredient.display_line(),
            original: ingredient.original,
            quantity: ingredient.quantity,
            unit: ingredient.unit,
            ingredient_name: ingredient.ingredient_name,
            scaled_quantity: ingredient.scaled_quantity,
            display_quantity: ingredient.display_quantity,
            notes: ingredient.notes,
        }
    }
}

/// FFI-compatible scaled recipe
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiScaledRecipe {
    /// Recipe name (empty string if none)
    pub name: String,
    pub factor: f64,
    pub original_servings: Option<f64>,
    pub desired_servings: Option<f64>,
    pub ingredients: Vec<FfiIngredient>,
}

impl From<ScaledRecipe> for FfiScaledRecipe {
    fn from(recipe: ScaledRecipe) -> Self {
        FfiScaledRecipe {
            name: recipe.name.unwrap_or_default(),
            factor: recipe.factor.value(),
            original_servings: recipe.servings.map(|s| s.original),
            desired_servings: recipe.servings.map(|s| s.desired),
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiScaleError {
    /// Failed to fetch a recipe page
    FetchError { message: String },
    /// Failed to read a recipe from the page
    ParseError { message: String },
    /// No extractor found a recipe
    NoExtractorMatched { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Builder configuration error
    BuilderError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiScaleError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiScaleError::ParseError { message } => write!(f, "Parse error: {}", message),
            FfiScaleError::NoExtractorMatched { message } => {
                write!(f, "No extractor matched: {}", message)
            }
            FfiScaleError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiScaleError::BuilderError { message } => write!(f, "Builder error: {}", message),
            FfiScaleError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiScaleError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiScaleError {}

impl From<ScaleError> for FfiScaleError {
    fn from(err: ScaleError) -> Self {
        match err {
            ScaleError::FetchError(e) => FfiScaleError::FetchError {
                message: e.to_string(),
            },
            ScaleError::ParseError(msg) => FfiScaleError::ParseError { message: msg },
            ScaleError::NoExtractorMatched => FfiScaleError::NoExtractorMatched {
                message: "No extractor could find a recipe on this page".to_string(),
            },
            ScaleError::InvalidInput(msg) => FfiScaleError::InvalidInput { message: msg },
            ScaleError::BuilderError(msg) => FfiScaleError::BuilderError { message: msg },
            ScaleError::ConfigError(e) => FfiScaleError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Scale ingredient lines by a direct multiplier
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn scale_ingredients(text: String, factor: f64) -> FfiScaledRecipe {
    crate::scale_text(&text, crate::ScaleFactor::multiplier(factor)).into()
}

/// Scale ingredient lines from one serving count to another
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn scale_ingredients_for_servings(text: String, original: f64, desired: f64) -> FfiScaledRecipe {
    crate::scale_servings(&text, original, desired).into()
}

/// Render a decimal quantity with a fraction glyph, e.g. `2.5` as `2½`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn format_quantity(value: f64) -> String {
    render_quantity(value)
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiScaleError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiScaleError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Fetch a recipe page and scale it to `desired_servings`
///
/// # Arguments
/// * `url` - The URL of the recipe page
/// * `desired_servings` - Servings wanted; the page must declare a yield
/// * `timeout_seconds` - Optional request timeout
///
/// Rules and fetch settings come from `calckitchen.toml` and `CALCKITCHEN__*`.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn scale_recipe_from_url(
    url: String,
    desired_servings: f64,
    timeout_seconds: Option<u64>,
) -> Result<FfiScaledRecipe, FfiScaleError> {
    let rt = create_runtime()?;
    rt.block_on(async { scale_recipe_from_url_async(&url, desired_servings, timeout_seconds).await })
}

async fn scale_recipe_from_url_async(
    url: &str,
    desired_servings: f64,
    timeout_seconds: Option<u64>,
) -> Result<FfiScaledRecipe, FfiScaleError> {
    let config = ScalerConfig::load().map_err(ScaleError::from)?;
    let mut builder = crate::RecipeScaler::builder()
        .url(url)
        .desired_servings(desired_servings)
        .config(config);

    if let Some(timeout_secs) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    let recipe = builder.build().await?;
    Ok(recipe.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_ingredients() {
        let recipe = scale_ingredients("2 cups all-purpose flour\n3 large eggs".to_string(), 2.0);
        assert_eq!(recipe.factor, 2.0);
        assert_eq!(recipe.name, "");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].display_line, "4 cups all-purpose flour");
        assert_eq!(recipe.ingredients[1].display_quantity, "6");
    }

    #[test]
    fn test_scale_ingredients_for_servings() {
        let recipe = scale_ingredients_for_servings("1 cup milk".to_string(), 2.0, 3.0);
        assert_eq!(recipe.original_servings, Some(2.0));
        assert_eq!(recipe.desired_servings, Some(3.0));
        assert_eq!(recipe.ingredients[0].display_line, "1½ cup milk");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(0.75), "¾");
    }

    #[test]
    fn test_error_conversion() {
        let err: FfiScaleError = ScaleError::InvalidInput("empty".to_string()).into();
        assert!(matches!(err, FfiScaleError::InvalidInput { .. }));
        assert_eq!(err.to_string(), "Invalid input: empty");

        let err: FfiScaleError = ScaleError::NoExtractorMatched.into();
        assert!(matches!(err, FfiScaleError::NoExtractorMatched { .. }));
    }

    #[test]
    fn test_config_error_conversion() {
        let err = crate::config::parse_config("[rules]\negg_rounding_tolerance = \"lots\"")
            .unwrap_err();
        let err: FfiScaleError = ScaleError::from(err).into();
        assert!(matches!(err, FfiScaleError::ConfigError { .. }));
    }

    #[test]
    fn test_scale_recipe_from_url() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/rice")
            .with_status(200)
            .with_body(
                r#"<html><head><script type="application/ld+json">
                {"@type": "Recipe", "name": "Rice", "recipeYield": "2",
                 "recipeIngredient": ["1 cup rice", "3 eggs", "1 tsp baking powder"]}
                </script></head><body></body></html>"#,
            )
            .create();

        let recipe =
            scale_recipe_from_url(format!("{}/rice", server.url()), 6.0, Some(5)).unwrap();
        assert_eq!(recipe.name, "Rice");
        assert_eq!(recipe.factor, 3.0);
        assert_eq!(recipe.ingredients[0].display_line, "3 cup rice");
        assert_eq!(recipe.ingredients[1].display_quantity, "9");
        // loaded rules: leavening threshold 2.0 is exceeded
        assert_eq!(recipe.ingredients[2].notes.len(), 1);
    }

    #[test]
    fn test_scale_recipe_from_url_fetch_failure() {
        // Nothing listens on port 9
        let result = scale_recipe_from_url("http://127.0.0.1:9/recipe".to_string(), 4.0, Some(1));
        assert!(matches!(result, Err(FfiScaleError::FetchError { .. })));
    }
}
