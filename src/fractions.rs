//! Fraction glyph tables used when rendering quantities.
//!
//! Display-only: the quantity tokenizer reads ASCII `a/b` text and never
//! consults them.

/// Glyphs the formatter may show, in ascending order of value.
pub const GLYPHS: [&str; 9] = ["⅛", "¼", "⅓", "⅜", "½", "⅝", "⅔", "¾", "⅞"];

/// Returns the decimal value of a fraction glyph, if it is one of the tabulated ones.
pub fn glyph_value(glyph: &str) -> Option<f64> {
    let value = match glyph {
        "⅛" => 0.125,
        "¼" => 0.25,
        "⅓" => 1.0 / 3.0,
        "⅜" => 0.375,
        "½" => 0.5,
        "⅝" => 0.625,
        "⅔" => 2.0 / 3.0,
        "¾" => 0.75,
        "⅞" => 0.875,
        _ => return None,
    };
    Some(value)
}

/// Returns the glyph whose value is closest to `fraction`.
///
/// Ties resolve to the first glyph in [`GLYPHS`] order.
pub fn closest_glyph(fraction: f64) -> &'static str {
    let mut best = GLYPHS[0];
    let mut best_distance = f64::INFINITY;
    for glyph in GLYPHS {
        let Some(value) = glyph_value(glyph) else {
            continue;
        };
        let distance = (value - fraction).abs();
        if distance < best_distance {
            best = glyph;
            best_distance = distance;
        }
    }
    best
}
