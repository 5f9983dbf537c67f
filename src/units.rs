use lazy_static::lazy_static;
use regex::Regex;

use crate::matcher::{PrefixMatch, PrefixMatcher};

/// Unit words and abbreviations, tried in this order. The first entry that
/// matches wins; there is no longest-match search.
pub const DEFAULT_VOCABULARY: &[&str] = &[
    // volume
    r"cups?",
    r"tablespoons?",
    r"tbsps?",
    r"tbs",
    r"teaspoons?",
    r"tsps?",
    r"fluid ounces?",
    r"fl\.? ?oz",
    r"milliliters?",
    r"millilitres?",
    r"ml",
    r"liters?",
    r"litres?",
    r"l",
    r"quarts?",
    r"qt",
    r"pints?",
    r"pt",
    r"gallons?",
    r"gal",
    // weight
    r"ounces?",
    r"oz",
    r"pounds?",
    r"lbs?",
    r"grams?",
    r"g",
    r"kilograms?",
    r"kg",
    // count
    r"cloves?",
    r"pinch(?:es)?",
    r"dash(?:es)?",
    r"cans?",
    r"packages?",
    r"pkgs?",
    r"sticks?",
    r"slices?",
    r"pieces?",
    r"bunch(?:es)?",
    r"sprigs?",
    r"heads?",
];

lazy_static! {
    static ref DEFAULT_PATTERNS: Vec<Regex> = DEFAULT_VOCABULARY
        .iter()
        .map(|entry| compile_entry(entry).unwrap())
        .collect();
}

/// Anchors a vocabulary entry at the start of the input. The unit must end on
/// a word boundary and may carry a trailing period ("tsp.").
fn compile_entry(entry: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)^((?:{})\b\.?)\s*", entry))
}

/// Matches a unit token at the start of the text that follows a quantity.
#[derive(Debug, Clone)]
pub struct UnitMatcher {
    patterns: Vec<Regex>,
}

impl Default for UnitMatcher {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }
}

impl UnitMatcher {
    /// Builds a matcher from a custom ordered vocabulary of regex fragments.
    pub fn with_vocabulary<S: AsRef<str>>(vocabulary: &[S]) -> Result<Self, regex::Error> {
        let patterns = vocabulary
            .iter()
            .map(|entry| compile_entry(entry.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl PrefixMatcher for UnitMatcher {
    type Output = String;

    fn match_prefix<'a>(&self, input: &'a str) -> PrefixMatch<'a, String> {
        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(input) {
                let unit = caps.get(1).map_or("", |m| m.as_str());
                let end = caps.get(0).map_or(0, |m| m.end());
                return PrefixMatch::Matched {
                    value: unit.to_string(),
                    remainder: &input[end..],
                };
            }
        }
        PrefixMatch::NotMatched
    }
}

/// Splits `rest` into `(unit, ingredient name)` using the default vocabulary.
/// The unit is empty when nothing in the vocabulary matches.
pub fn split_unit(rest: &str) -> (String, String) {
    let (unit, name) = UnitMatcher::default().match_prefix(rest).split_or(rest);
    (unit.unwrap_or_default(), name.to_string())
}
