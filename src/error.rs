use thiserror::Error;

/// Errors from the surfaces that fetch, extract or configure recipes.
///
/// Parsing and scaling ingredient text never fails; degenerate numbers flow
/// through to the output instead.
#[derive(Error, Debug)]
pub enum ScaleError {
    /// Failed to fetch a recipe page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// A recipe page was found but could not be read
    #[error("Failed to parse recipe: {0}")]
    ParseError(String),

    /// No extractor found a recipe on the page
    #[error("No extractor could find a recipe on this page")]
    NoExtractorMatched,

    /// Input that cannot be scaled, such as an empty ingredient list
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
