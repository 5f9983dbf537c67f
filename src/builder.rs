use std::time::Duration;

use log::info;

use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::extractors::extract_recipe;
use crate::fetch::RequestFetcher;
use crate::model::{RecipeSource, ScaledRecipe, Servings};
use crate::scaling::{IngredientScaler, ScaleFactor};
use crate::units::UnitMatcher;

/// Where the ingredient lines come from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Fetch a recipe page and read its JSON-LD
    Url(String),
    /// An already downloaded recipe page
    Html(String),
    /// Ingredient lines, one per line
    Text(String),
}

/// How the scale factor is chosen
#[derive(Debug, Clone, Copy)]
pub enum Scaling {
    /// A direct multiplier
    Factor(f64),
    /// From one serving count to another
    Servings { original: f64, desired: f64 },
    /// To a serving count, starting from the yield the recipe page declares
    DesiredServings(f64),
}

/// Builder for configuring and executing a recipe scale
#[derive(Debug, Default)]
pub struct RecipeScalerBuilder {
    source: Option<InputSource>,
    scaling: Option<Scaling>,
    timeout: Option<Duration>,
    config: Option<ScalerConfig>,
    units: Option<UnitMatcher>,
}

impl RecipeScalerBuilder {
    /// Scale the ingredients of a recipe page
    ///
    /// # Example
    /// ```
    /// use calckitchen::RecipeScaler;
    ///
    /// let builder = RecipeScaler::builder()
    ///     .url("https://example.com/recipe")
    ///     .desired_servings(8.0);
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Url(url.into()));
        self
    }

    /// Scale the ingredients of a recipe page already in memory
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.source = Some(InputSource::Html(html.into()));
        self
    }

    /// Scale free-form ingredient lines
    ///
    /// # Example
    /// ```
    /// use calckitchen::RecipeScaler;
    ///
    /// let builder = RecipeScaler::builder()
    ///     .text("2 cups flour\n3 large eggs")
    ///     .factor(2.0);
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Multiply every quantity by `factor`
    pub fn factor(mut self, factor: f64) -> Self {
        self.scaling = Some(Scaling::Factor(factor));
        self
    }

    /// Scale from `original` servings to `desired` servings
    pub fn servings(mut self, original: f64, desired: f64) -> Self {
        self.scaling = Some(Scaling::Servings { original, desired });
        self
    }

    /// Scale to `desired` servings using the yield declared by the recipe page
    pub fn desired_servings(mut self, desired: f64) -> Self {
        self.scaling = Some(Scaling::DesiredServings(desired));
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use explicit configuration instead of the defaults
    pub fn config(mut self, config: ScalerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom unit vocabulary
    pub fn units(mut self, units: UnitMatcher) -> Self {
        self.units = Some(units);
        self
    }

    /// Resolve the source, pick the scale factor and scale every line
    ///
    /// # Errors
    /// Returns `ScaleError` if:
    /// - No input source was specified
    /// - Text input is empty
    /// - Fetching or extracting a recipe page fails
    /// - `desired_servings()` is used with a source that declares no yield
    ///
    /// # Example
    /// ```no_run
    /// # use calckitchen::RecipeScaler;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipe = RecipeScaler::builder()
    ///     .url("https://example.com/recipe")
    ///     .desired_servings(6.0)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ScaledRecipe, ScaleError> {
        let source = self.source.ok_or_else(|| {
            ScaleError::BuilderError(
                "No input source specified. Use .text(), .html() or .url()".to_string(),
            )
        })?;
        let config = self.config.unwrap_or_default();

        let (name, text, declared) = match source {
            InputSource::Text(text) => {
                if text.trim().is_empty() {
                    return Err(ScaleError::InvalidInput(
                        "Ingredient text cannot be empty".to_string(),
                    ));
                }
                (None, text, None)
            }
            InputSource::Html(html) => split_source(extract_recipe(&html)?),
            InputSource::Url(url) => {
                let fetcher = RequestFetcher::with_config(&config.fetch, self.timeout)?;
                let html = fetcher.fetch(&url).await?;
                split_source(extract_recipe(&html)?)
            }
        };

        let (factor, servings) = resolve_scaling(self.scaling, declared)?;
        info!("Scaling {} by {}", name.as_deref().unwrap_or("ingredients"), factor);

        let mut scaler = IngredientScaler::default().with_rules(config.rules);
        if let Some(units) = self.units {
            scaler = scaler.with_units(units);
        }

        let mut recipe = scaler.scale_recipe(&text, factor, servings);
        recipe.name = name;
        Ok(recipe)
    }
}

fn split_source(source: RecipeSource) -> (Option<String>, String, Option<f64>) {
    let text = source.ingredient_text();
    let name = Some(source.name).filter(|n| !n.is_empty());
    (name, text, source.servings)
}

fn resolve_scaling(
    scaling: Option<Scaling>,
    declared: Option<f64>,
) -> Result<(ScaleFactor, Option<Servings>), ScaleError> {
    match scaling {
        None => Ok((ScaleFactor::IDENTITY, None)),
        Some(Scaling::Factor(factor)) => Ok((ScaleFactor::multiplier(factor), None)),
        Some(Scaling::Servings { original, desired }) => Ok((
            ScaleFactor::from_servings(original, desired),
            Some(Servings { original, desired }),
        )),
        Some(Scaling::DesiredServings(desired)) => {
            let original = declared.ok_or_else(|| {
                ScaleError::BuilderError(
                    "The recipe declares no yield. Use .servings(original, desired) instead"
                        .to_string(),
                )
            })?;
            Ok((
                ScaleFactor::from_servings(original, desired),
                Some(Servings { original, desired }),
            ))
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeScaler;

impl RecipeScaler {
    /// Creates a new builder for scaling a recipe
    ///
    /// # Example
    /// ```
    /// use calckitchen::RecipeScaler;
    ///
    /// let builder = RecipeScaler::builder();
    /// ```
    pub fn builder() -> RecipeScalerBuilder {
        RecipeScalerBuilder::default()
    }
}
