//! Kitchen calculators: parse free-form ingredient lines, scale their
//! quantities and render them back with friendly fractions.
//!
//! ```
//! use calckitchen::{scale_text, ScaleFactor};
//!
//! let recipe = scale_text("1/2 teaspoon salt", ScaleFactor::multiplier(0.5));
//! let salt = &recipe.ingredients[0];
//! assert_eq!(salt.display_quantity, "¼");
//! assert_eq!(salt.notes.len(), 1);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod extractors;
pub mod fetch;
pub mod format;
pub mod fractions;
pub mod matcher;
pub mod model;
pub mod quantity;
pub mod scaling;
pub mod units;

pub mod uniffi_bindings;

pub use builder::{InputSource, RecipeScaler, RecipeScalerBuilder, Scaling};
pub use config::ScalerConfig;
pub use error::ScaleError;
pub use format::format_quantity;
pub use matcher::{PrefixMatch, PrefixMatcher};
pub use model::{ParsedIngredient, RecipeSource, ScaledRecipe, Servings};
pub use quantity::{parse_quantity, QuantityTokenizer};
pub use scaling::{scale_servings, scale_text, IngredientScaler, ScaleFactor, ScalingRules};
pub use units::UnitMatcher;

/// Fetch a recipe page and return its ingredient list and yield.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let source = calckitchen::fetch_recipe("https://example.com/recipe").await?;
/// println!("{} serves {:?}", source.name, source.servings);
/// # Ok(())
/// # }
/// ```
pub async fn fetch_recipe(url: &str) -> Result<RecipeSource, ScaleError> {
    let config = ScalerConfig::load()?;
    let fetcher = fetch::RequestFetcher::with_config(&config.fetch, None)?;
    let html = fetcher.fetch(url).await?;
    extractors::extract_recipe(&html)
}

/// Scale a recipe page to `desired` servings using the yield it declares.
pub async fn scale_recipe_url(url: &str, desired: f64) -> Result<ScaledRecipe, ScaleError> {
    let config = ScalerConfig::load()?;
    RecipeScaler::builder()
        .url(url)
        .desired_servings(desired)
        .config(config)
        .build()
        .await
}
