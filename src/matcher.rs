/// Outcome of matching a token at the start of some input.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefixMatch<'a, T> {
    /// The token matched; `remainder` is the input after the token and any
    /// trailing whitespace.
    Matched { value: T, remainder: &'a str },
    /// Nothing matched; the caller keeps the original input.
    NotMatched,
}

impl<'a, T> PrefixMatch<'a, T> {
    pub fn is_matched(&self) -> bool {
        matches!(self, PrefixMatch::Matched { .. })
    }

    /// Splits a match into `(Some(value), remainder)`, or `(None, input)` when
    /// nothing matched.
    pub fn split_or(self, input: &'a str) -> (Option<T>, &'a str) {
        match self {
            PrefixMatch::Matched { value, remainder } => (Some(value), remainder),
            PrefixMatch::NotMatched => (None, input),
        }
    }
}

/// A matcher anchored at the start of its input.
pub trait PrefixMatcher {
    type Output;

    fn match_prefix<'a>(&self, input: &'a str) -> PrefixMatch<'a, Self::Output>;
}
