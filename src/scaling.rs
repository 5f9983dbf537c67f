use std::fmt;

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::format::{format_count, format_quantity, round_half_up};
use crate::matcher::PrefixMatcher;
use crate::model::{ParsedIngredient, ScaledRecipe, Servings};
use crate::quantity::QuantityTokenizer;
use crate::units::UnitMatcher;

lazy_static! {
    static ref EGG_RE: Regex = Regex::new(r"(?i)eggs?").unwrap();
    static ref LEAVENING_RE: Regex = Regex::new(r"(?i)baking (?:powder|soda)|yeast").unwrap();
    static ref SEASONING_RE: Regex = Regex::new(r"(?i)salt|pepper|spices?").unwrap();
}

/// Multiplier applied to every recognised quantity.
///
/// No bounds are enforced: zero, negative and non-finite factors are accepted
/// and flow straight into the results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub const IDENTITY: ScaleFactor = ScaleFactor(1.0);

    /// A direct multiplier, e.g. `2.0` to double a recipe.
    pub fn multiplier(value: f64) -> Self {
        ScaleFactor(value)
    }

    /// `desired / original`. An original of zero yields infinity or NaN.
    pub fn from_servings(original: f64, desired: f64) -> Self {
        ScaleFactor(desired / original)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True for factors that produce meaningful quantities.
    pub fn is_sane(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<f64> for ScaleFactor {
    fn from(value: f64) -> Self {
        ScaleFactor(value)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}x", p, self.0),
            None => write!(f, "{}x", self.0),
        }
    }
}

/// Thresholds for ingredients that do not scale linearly.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScalingRules {
    /// Distance from the nearest whole egg above which a note is attached.
    #[serde(default = "default_egg_rounding_tolerance")]
    pub egg_rounding_tolerance: f64,
    /// Factors above this get a leavening note.
    #[serde(default = "default_leavening_factor_threshold")]
    pub leavening_factor_threshold: f64,
}

fn default_egg_rounding_tolerance() -> f64 {
    0.3
}

fn default_leavening_factor_threshold() -> f64 {
    2.0
}

impl Default for ScalingRules {
    fn default() -> Self {
        Self {
            egg_rounding_tolerance: default_egg_rounding_tolerance(),
            leavening_factor_threshold: default_leavening_factor_threshold(),
        }
    }
}

/// Parses ingredient lines and scales their quantities.
#[derive(Debug, Clone, Default)]
pub struct IngredientScaler {
    tokenizer: QuantityTokenizer,
    units: UnitMatcher,
    rules: ScalingRules,
}

impl IngredientScaler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(mut self, rules: ScalingRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_units(mut self, units: UnitMatcher) -> Self {
        self.units = units;
        self
    }

    pub fn rules(&self) -> &ScalingRules {
        &self.rules
    }

    /// Parses one ingredient line and scales it by `factor`.
    ///
    /// A line without a leading quantity passes through untouched.
    pub fn parse_line(&self, line: &str, factor: ScaleFactor) -> ParsedIngredient {
        let trimmed = line.trim();
        let (quantity, rest) = self.tokenizer.match_prefix(trimmed).split_or(trimmed);
        let Some(quantity) = quantity else {
            debug!("No quantity in {:?}, passing through", line);
            return ParsedIngredient::passthrough(line);
        };

        let (unit, name) = self.units.match_prefix(rest).split_or(rest);
        let unit = unit.unwrap_or_default();
        let scaled = quantity * factor.value();

        let mut ingredient = ParsedIngredient {
            original: line.to_string(),
            quantity: Some(quantity),
            unit,
            ingredient_name: name.to_string(),
            scaled_quantity: Some(scaled),
            display_quantity: format_quantity(scaled),
            notes: Vec::new(),
        };
        self.apply_rules(&mut ingredient, factor);

        debug!(
            "Parsed {:?}: {} {:?} {:?} -> {}",
            line, quantity, ingredient.unit, ingredient.ingredient_name, ingredient.display_quantity
        );
        ingredient
    }

    fn apply_rules(&self, ingredient: &mut ParsedIngredient, factor: ScaleFactor) {
        let name = ingredient.ingredient_name.clone();
        let scaled = ingredient.scaled_quantity.unwrap_or(f64::NAN);

        if EGG_RE.is_match(&name) {
            let rounded = round_half_up(scaled);
            ingredient.display_quantity = format_count(scaled);
            if (scaled - rounded).abs() > self.rules.egg_rounding_tolerance {
                ingredient.notes.push(format!(
                    "Use {} eggs (calculated {:.2}). For more precision, beat an extra egg and add only part of it.",
                    format_count(scaled),
                    scaled
                ));
            }
        }

        if LEAVENING_RE.is_match(&name) && factor.value() > self.rules.leavening_factor_threshold {
            ingredient.notes.push(format!(
                "Leavening doesn't scale linearly. Try increasing it by only 1.5x instead of {}.",
                factor
            ));
        }

        if SEASONING_RE.is_match(&name) && factor.value() != 1.0 {
            ingredient
                .notes
                .push("Seasonings don't always scale evenly. Taste and adjust as you go.".to_string());
        }
    }

    /// Parses every non-blank line of `text` in order.
    pub fn scale_text(&self, text: &str, factor: ScaleFactor) -> Vec<ParsedIngredient> {
        if !factor.is_sane() {
            warn!("Scaling with degenerate factor {}", factor);
        }
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.parse_line(line, factor))
            .collect()
    }

    /// Scales a whole ingredient block into a [`ScaledRecipe`].
    pub fn scale_recipe(
        &self,
        text: &str,
        factor: ScaleFactor,
        servings: Option<Servings>,
    ) -> ScaledRecipe {
        ScaledRecipe {
            name: None,
            factor,
            servings,
            ingredients: self.scale_text(text, factor),
        }
    }
}

/// Scales an ingredient block with the default vocabulary and rules.
///
/// ```
/// use calckitchen::{scale_text, ScaleFactor};
///
/// let recipe = scale_text("2 cups all-purpose flour\n3 large eggs", ScaleFactor::multiplier(2.0));
/// assert_eq!(recipe.ingredients[0].display_line(), "4 cups all-purpose flour");
/// assert_eq!(recipe.ingredients[1].display_line(), "6 large eggs");
/// ```
pub fn scale_text(text: &str, factor: ScaleFactor) -> ScaledRecipe {
    IngredientScaler::default().scale_recipe(text, factor, None)
}

/// Scales an ingredient block from one serving count to another.
pub fn scale_servings(text: &str, original: f64, desired: f64) -> ScaledRecipe {
    let factor = ScaleFactor::from_servings(original, desired);
    IngredientScaler::default().scale_recipe(text, factor, Some(Servings { original, desired }))
}
