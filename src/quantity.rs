use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::matcher::{PrefixMatch, PrefixMatcher};

lazy_static! {
    // "2 1/2"
    static ref MIXED_NUMBER_RE: Regex = Regex::new(r"^(\d+)\s+(\d+)/(\d+)\s*").unwrap();
    // "1/2"
    static ref SIMPLE_FRACTION_RE: Regex = Regex::new(r"^(\d+)/(\d+)\s*").unwrap();
    // "2", "2.5", ".5"
    static ref DECIMAL_RE: Regex = Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)\s*").unwrap();
}

/// The numeric notations recognised at the start of an ingredient line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityPattern {
    MixedNumber,
    SimpleFraction,
    Decimal,
}

impl QuantityPattern {
    fn regex(self) -> &'static Regex {
        match self {
            QuantityPattern::MixedNumber => &*MIXED_NUMBER_RE,
            QuantityPattern::SimpleFraction => &*SIMPLE_FRACTION_RE,
            QuantityPattern::Decimal => &*DECIMAL_RE,
        }
    }

    /// Converts the captures of this pattern into a value. Division is
    /// unguarded, so `1/0` yields infinity and `0/0` yields NaN.
    fn value(self, caps: &Captures<'_>) -> Option<f64> {
        let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<f64>().ok());
        match self {
            QuantityPattern::MixedNumber => Some(num(1)? + num(2)? / num(3)?),
            QuantityPattern::SimpleFraction => Some(num(1)? / num(2)?),
            QuantityPattern::Decimal => num(1),
        }
    }
}

/// Extracts the leading quantity of an ingredient line.
///
/// Patterns are tried in order and the first one that matches wins, so a
/// mixed number is never read as its leading integer.
#[derive(Debug, Clone)]
pub struct QuantityTokenizer {
    patterns: Vec<QuantityPattern>,
}

impl Default for QuantityTokenizer {
    fn default() -> Self {
        Self {
            patterns: vec![
                QuantityPattern::MixedNumber,
                QuantityPattern::SimpleFraction,
                QuantityPattern::Decimal,
            ],
        }
    }
}

impl QuantityTokenizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefixMatcher for QuantityTokenizer {
    type Output = f64;

    fn match_prefix<'a>(&self, input: &'a str) -> PrefixMatch<'a, f64> {
        for pattern in &self.patterns {
            let Some(caps) = pattern.regex().captures(input) else {
                continue;
            };
            let Some(value) = pattern.value(&caps) else {
                continue;
            };
            let end = caps.get(0).map_or(0, |m| m.end());
            return PrefixMatch::Matched {
                value,
                remainder: &input[end..],
            };
        }
        PrefixMatch::NotMatched
    }
}

/// Convenience wrapper around the default tokenizer.
pub fn parse_quantity(input: &str) -> PrefixMatch<'_, f64> {
    QuantityTokenizer::default().match_prefix(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(input: &str) -> (f64, &str) {
        match parse_quantity(input) {
            PrefixMatch::Matched { value, remainder } => (value, remainder),
            PrefixMatch::NotMatched => panic!("expected a quantity in {:?}", input),
        }
    }

    #[test]
    fn test_integer() {
        assert_eq!(matched("2 cups flour"), (2.0, "cups flour"));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(matched("1.5 tsp vanilla"), (1.5, "tsp vanilla"));
        assert_eq!(matched(".5 cup milk"), (0.5, "cup milk"));
    }

    #[test]
    fn test_simple_fraction() {
        assert_eq!(matched("1/2 teaspoon salt"), (0.5, "teaspoon salt"));
    }

    #[test]
    fn test_mixed_number_wins_over_integer() {
        assert_eq!(matched("2 1/2 cups flour"), (2.5, "cups flour"));
    }

    #[test]
    fn test_no_space_after_quantity() {
        assert_eq!(matched("200g butter"), (200.0, "g butter"));
    }

    #[test]
    fn test_whole_line_is_quantity() {
        assert_eq!(matched("3"), (3.0, ""));
    }

    #[test]
    fn test_fraction_glyph_is_not_recognised() {
        assert_eq!(parse_quantity("½ cup sugar"), PrefixMatch::NotMatched);
    }

    #[test]
    fn test_text_without_quantity() {
        assert_eq!(parse_quantity("salt to taste"), PrefixMatch::NotMatched);
        assert_eq!(parse_quantity("a pinch of salt"), PrefixMatch::NotMatched);
    }

    #[test]
    fn test_zero_denominator_is_unguarded() {
        let (value, remainder) = matched("1/0 cup water");
        assert!(value.is_infinite());
        assert_eq!(remainder, "cup water");

        let (value, _) = matched("0/0 cup water");
        assert!(value.is_nan());
    }
}
