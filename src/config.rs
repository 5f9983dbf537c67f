use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::scaling::ScalingRules;

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScalerConfig {
    /// Thresholds for non-linear ingredients
    #[serde(default)]
    pub rules: ScalingRules,
    /// Recipe page fetching
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Text and JSON output
    #[serde(default)]
    pub export: ExportConfig,
}

/// Configuration for fetching recipe pages
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Configuration for rendered output
#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Decimal places used when printing the scale factor
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; CalcKitchenBot/1.0)".to_string()
}

fn default_decimals() -> usize {
    2
}

impl ScalerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with CALCKITCHEN__ prefix
    /// 2. calckitchen.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: CALCKITCHEN__FETCH__TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from `calckitchen.toml` and `CALCKITCHEN__*` variables.
pub fn load_config() -> Result<ScalerConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("calckitchen").required(false))
        // Use double underscore for nested: CALCKITCHEN__RULES__EGG_ROUNDING_TOLERANCE
        .add_source(
            Environment::with_prefix("CALCKITCHEN")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Parse configuration from a TOML string, falling back to defaults for
/// anything left out.
pub fn parse_config(toml: &str) -> Result<ScalerConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_decimals(), 2);
        assert!(default_user_agent().contains("CalcKitchenBot"));
    }

    #[test]
    fn test_default_config_matches_rules() {
        let config = ScalerConfig::default();
        assert_eq!(config.rules.egg_rounding_tolerance, 0.3);
        assert_eq!(config.rules.leavening_factor_threshold, 2.0);
        assert_eq!(config.fetch.timeout, 30);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            [rules]
            egg_rounding_tolerance = 0.1

            [fetch]
            timeout = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.rules.egg_rounding_tolerance, 0.1);
        assert_eq!(config.rules.leavening_factor_threshold, 2.0);
        assert_eq!(config.fetch.timeout, 5);
        assert!(config.fetch.user_agent.contains("CalcKitchenBot"));
        assert_eq!(config.export.decimals, 2);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.fetch.timeout, 30);
    }

    #[test]
    fn test_load_config_without_file() {
        // No calckitchen.toml in the test working directory
        let result = load_config();
        assert!(result.is_ok());
    }
}
