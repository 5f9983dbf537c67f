use calckitchen::units::UnitMatcher;
use calckitchen::{
    format_quantity, parse_quantity, scale_servings, scale_text, IngredientScaler, PrefixMatch,
    ScaleFactor,
};

#[test]
fn test_fraction_glyph_line_passes_through() {
    // Typed glyphs are not read as quantities
    let recipe = scale_text("½ cup sugar", ScaleFactor::multiplier(2.0));
    let ing = &recipe.ingredients[0];

    assert_eq!(ing.quantity, None);
    assert_eq!(ing.display_line(), "½ cup sugar");
}

#[test]
fn test_quantity_glued_to_text() {
    assert_eq!(
        parse_quantity("2x chicken breasts"),
        PrefixMatch::Matched {
            value: 2.0,
            remainder: "x chicken breasts"
        }
    );
}

#[test]
fn test_unit_like_word_without_match_stays_in_name() {
    let recipe = scale_text("2 large onions", ScaleFactor::multiplier(2.0));
    let ing = &recipe.ingredients[0];

    assert_eq!(ing.unit, "");
    assert_eq!(ing.ingredient_name, "large onions");
}

#[test]
fn test_zero_factor() {
    let recipe = scale_text("2 cups flour\n3 eggs", ScaleFactor::multiplier(0.0));

    assert_eq!(recipe.display_lines(), vec!["0 cups flour", "0 eggs"]);
}

#[test]
fn test_negative_factor_is_not_rejected() {
    let recipe = scale_text("1 cup milk", ScaleFactor::multiplier(-1.5));
    let ing = &recipe.ingredients[0];

    assert_eq!(ing.scaled_quantity, Some(-1.5));
    assert_eq!(ing.display_quantity, "-2½");
}

#[test]
fn test_zero_quantity_with_negative_factor_shows_zero() {
    let recipe = scale_text("0 cups flour", ScaleFactor::multiplier(-2.0));
    let ing = &recipe.ingredients[0];

    assert!(ing.scaled_quantity.unwrap().is_sign_negative());
    assert_eq!(ing.display_quantity, "0");
    assert_eq!(ing.display_line(), "0 cups flour");
}

#[test]
fn test_zero_original_servings() {
    let recipe = scale_servings("2 cups flour\n2 eggs\n1 tsp salt", 0.0, 4.0);

    assert!(recipe.factor.value().is_infinite());
    assert_eq!(
        recipe.display_lines(),
        vec!["Infinity cups flour", "Infinity eggs", "Infinity tsp salt"]
    );
}

#[test]
fn test_zero_over_zero_servings() {
    let recipe = scale_servings("2 cups flour\n2 eggs", 0.0, 0.0);

    assert!(recipe.factor.value().is_nan());
    assert_eq!(recipe.display_lines(), vec!["NaN cups flour", "NaN eggs"]);
    // NaN never exceeds the egg tolerance
    assert!(recipe.ingredients[1].notes.is_empty());
}

#[test]
fn test_huge_factor() {
    let recipe = scale_text("1 tsp yeast", ScaleFactor::multiplier(1e6));
    let ing = &recipe.ingredients[0];

    assert_eq!(ing.display_quantity, "1000000");
    assert_eq!(ing.notes.len(), 1);
}

#[test]
fn test_eggplant_matches_egg_rule() {
    let recipe = scale_text("1 eggplant", ScaleFactor::multiplier(1.5));
    let ing = &recipe.ingredients[0];

    assert_eq!(ing.display_quantity, "2");
    assert_eq!(ing.notes.len(), 1);
}

#[test]
fn test_windows_line_endings_and_indentation() {
    let recipe = scale_text("  1 cup rice\r\n\t2 cups water\r\n", ScaleFactor::multiplier(2.0));

    assert_eq!(recipe.display_lines(), vec!["2 cup rice", "4 cups water"]);
    assert_eq!(recipe.ingredients[0].original, "1 cup rice");
}

#[test]
fn test_empty_text() {
    let recipe = scale_text("", ScaleFactor::multiplier(2.0));
    assert!(recipe.ingredients.is_empty());
}

#[test]
fn test_custom_vocabulary_first_match_wins() {
    let units = UnitMatcher::with_vocabulary(&["fl", r"fl\.? ?oz"]).unwrap();
    let scaler = IngredientScaler::default().with_units(units);
    let ing = scaler.parse_line("8 fl oz cream", ScaleFactor::multiplier(0.5));

    assert_eq!(ing.unit, "fl");
    assert_eq!(ing.ingredient_name, "oz cream");
    assert_eq!(ing.display_line(), "4 fl oz cream");
}

#[test]
fn test_default_vocabulary_reads_fluid_ounces() {
    let recipe = scale_text("8 fl oz cream", ScaleFactor::multiplier(0.5));
    let ing = &recipe.ingredients[0];

    assert_eq!(ing.unit, "fl oz");
    assert_eq!(ing.ingredient_name, "cream");
}

#[test]
fn test_format_quantity_just_below_whole() {
    assert_eq!(format_quantity(2.999), "3");
    assert_eq!(format_quantity(2.93), "2⅞");
}
