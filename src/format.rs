use crate::fractions::closest_glyph;

/// Renders a quantity as a whole number followed by a fraction glyph.
///
/// The fractional part rounded to the nearest eighth decides whether a glyph
/// is shown at all: nothing for zero, a carry into the whole part for a full
/// eighth count. Otherwise the glyph closest to the unrounded fraction is
/// used, so thirds render as `⅓` and `⅔`. Non-finite values render as `NaN`,
/// `Infinity` or `-Infinity`, and negative zero renders as `0`.
///
/// ```
/// use calckitchen::format_quantity;
///
/// assert_eq!(format_quantity(2.5), "2½");
/// assert_eq!(format_quantity(0.25), "¼");
/// assert_eq!(format_quantity(3.0), "3");
/// assert_eq!(format_quantity(1.0 + 2.0 / 3.0), "1⅔");
/// ```
pub fn format_quantity(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }

    // + 0.0 turns -0 into 0
    let mut whole = value.floor() + 0.0;
    let fraction = value - whole;
    let eighths = (fraction * 8.0).round();

    if eighths == 0.0 {
        return format!("{}", whole);
    }
    if eighths >= 8.0 {
        whole += 1.0;
        return format!("{}", whole);
    }

    let glyph = closest_glyph(fraction);
    if whole == 0.0 {
        glyph.to_string()
    } else {
        format!("{}{}", whole, glyph)
    }
}

/// Rounds half-way values up, toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Renders a whole count, e.g. a number of eggs.
pub fn format_count(value: f64) -> String {
    match non_finite(value) {
        Some(text) => text.to_string(),
        None => format!("{}", round_half_up(value)),
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}
