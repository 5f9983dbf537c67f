//! Plain-text and JSON renderings of a scaled recipe.

use crate::model::ScaledRecipe;

/// The scaled lines only, one per line.
pub fn to_text(recipe: &ScaledRecipe) -> String {
    recipe.display_lines().join("\n")
}

/// Human-readable summary for copying to the clipboard.
///
/// Not meant to be parsed back; the layout may change between versions.
pub fn to_clipboard_text(recipe: &ScaledRecipe, decimals: usize) -> String {
    let mut output = String::new();

    if let Some(name) = recipe.name.as_deref().filter(|n| !n.is_empty()) {
        output.push_str(name);
        output.push('\n');
    }

    output.push_str(&format!("Scaled {:.*}", decimals, recipe.factor));
    if let Some(servings) = recipe.servings {
        output.push_str(&format!(
            " ({} → {} servings)",
            servings.original, servings.desired
        ));
    }
    output.push_str("\n\n");

    for line in recipe.display_lines() {
        output.push_str("- ");
        output.push_str(&line);
        output.push('\n');
    }

    let notes: Vec<_> = recipe.notes().collect();
    if !notes.is_empty() {
        output.push_str("\nNotes:\n");
        for (ingredient, note) in notes {
            output.push_str(&format!("- {}: {}\n", ingredient, note));
        }
    }

    output
}

pub fn to_json(recipe: &ScaledRecipe) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(recipe)
}
