use serde::{Deserialize, Serialize};

use crate::scaling::ScaleFactor;

/// One ingredient line after parsing and scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIngredient {
    /// The line as it was given.
    pub original: String,
    /// Leading quantity, `None` when the line has no recognisable number.
    pub quantity: Option<f64>,
    /// Unit text as written, empty when no unit followed the quantity.
    pub unit: String,
    pub ingredient_name: String,
    /// `quantity * factor`, before any display rounding.
    pub scaled_quantity: Option<f64>,
    pub display_quantity: String,
    /// Advisory notes for ingredients that don't scale linearly.
    pub notes: Vec<String>,
}

impl ParsedIngredient {
    /// A line that carries no quantity and is rendered verbatim.
    pub fn passthrough(line: &str) -> Self {
        ParsedIngredient {
            original: line.to_string(),
            quantity: None,
            unit: String::new(),
            ingredient_name: line.trim().to_string(),
            scaled_quantity: None,
            display_quantity: String::new(),
            notes: Vec::new(),
        }
    }

    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }

    /// Renders the scaled line, e.g. `"4 cups all-purpose flour"`.
    pub fn display_line(&self) -> String {
        if !self.has_quantity() {
            return self.original.clone();
        }
        [
            self.display_quantity.as_str(),
            self.unit.as_str(),
            self.ingredient_name.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Serving counts a scale factor was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Servings {
    pub original: f64,
    pub desired: f64,
}

/// The result of scaling a block of ingredient lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledRecipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub factor: ScaleFactor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<Servings>,
    pub ingredients: Vec<ParsedIngredient>,
}

impl ScaledRecipe {
    pub fn display_lines(&self) -> Vec<String> {
        self.ingredients.iter().map(|i| i.display_line()).collect()
    }

    /// Every advisory note paired with the name of the ingredient it belongs to.
    pub fn notes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ingredients.iter().flat_map(|ingredient| {
            ingredient
                .notes
                .iter()
                .map(move |note| (ingredient.ingredient_name.as_str(), note.as_str()))
        })
    }
}

/// Ingredient list and yield read from a recipe page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeSource {
    pub name: String,
    pub ingredients: Vec<String>,
    /// Declared yield, when the page states one as a number.
    pub servings: Option<f64>,
}

impl RecipeSource {
    /// Ingredients joined one per line, ready for scaling.
    pub fn ingredient_text(&self) -> String {
        self.ingredients.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(quantity: &str, unit: &str, name: &str) -> ParsedIngredient {
        ParsedIngredient {
            original: String::new(),
            quantity: Some(1.0),
            unit: unit.to_string(),
            ingredient_name: name.to_string(),
            scaled_quantity: Some(1.0),
            display_quantity: quantity.to_string(),
            notes: Vec::new(),
        }
    }

    #[test]
    fn test_display_line_skips_empty_parts() {
        assert_eq!(ingredient("2", "", "onions").display_line(), "2 onions");
        assert_eq!(ingredient("½", "cup", "milk").display_line(), "½ cup milk");
        assert_eq!(ingredient("3", "cups", "").display_line(), "3 cups");
    }

    #[test]
    fn test_passthrough_renders_original() {
        let line = "  Fresh herbs, for garnish";
        let ing = ParsedIngredient::passthrough(line);
        assert_eq!(ing.display_line(), line);
        assert_eq!(ing.ingredient_name, "Fresh herbs, for garnish");
        assert!(!ing.has_quantity());
    }

    #[test]
    fn test_notes_are_paired_with_ingredient() {
        let mut salt = ingredient("1", "tsp", "salt");
        salt.notes.push("Taste and adjust.".to_string());
        let recipe = ScaledRecipe {
            name: None,
            factor: ScaleFactor::multiplier(2.0),
            servings: None,
            ingredients: vec![ingredient("2", "cups", "flour"), salt],
        };
        let notes: Vec<_> = recipe.notes().collect();
        assert_eq!(notes, vec![("salt", "Taste and adjust.")]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ingredient("2", "cups", "flour")).unwrap();
        assert_eq!(json["ingredientName"], "flour");
        assert_eq!(json["displayQuantity"], "2");
        assert_eq!(json["scaledQuantity"], 1.0);
    }

    #[test]
    fn test_recipe_source_text() {
        let source = RecipeSource {
            name: "Pancakes".to_string(),
            ingredients: vec!["1 cup flour".to_string(), "1 egg".to_string()],
            servings: Some(4.0),
        };
        assert_eq!(source.ingredient_text(), "1 cup flour\n1 egg");
    }
}
