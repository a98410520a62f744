//! Calculator configuration: currency label and projection horizon rules

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for horizon selection and chart labelling.
///
/// Every field has a default, so a JSON file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Currency shown in axis labels (e.g. "Annual Cost (R)")
    pub currency_symbol: String,

    /// Days used to annualize daily energy use
    pub days_per_year: f64,

    /// Shortest annual horizon, in years
    pub annual_min_horizon_years: u32,

    /// Years shown past the payback year in annual mode
    pub annual_padding_years: u32,

    /// Longest annual horizon that will be projected; longer paybacks are
    /// rejected as invalid input. Defaults to the largest representable horizon
    pub annual_max_horizon_years: u32,

    /// Shortest monthly horizon, in months
    pub monthly_min_horizon_months: u32,

    /// Longest monthly horizon, in months
    pub monthly_max_horizon_months: u32,

    /// Monthly horizon as a multiple of the break-even month
    pub monthly_horizon_multiplier: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R".to_string(),
            days_per_year: 365.0,
            annual_min_horizon_years: 15,
            annual_padding_years: 5,
            annual_max_horizon_years: u32::MAX,
            monthly_min_horizon_months: 24,
            monthly_max_horizon_months: 120,
            monthly_horizon_multiplier: 2,
        }
    }
}

impl CalculatorConfig {
    /// Load a configuration from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::debug!("Loaded calculator config from {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from `path` if given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, LoadError> {
        match path {
            Some(p) => Self::from_json_path(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.currency_symbol, "R");
        assert_eq!(config.annual_min_horizon_years, 15);
        assert_eq!(config.monthly_min_horizon_months, 24);
        assert_eq!(config.monthly_max_horizon_months, 120);
        assert_eq!(config.annual_max_horizon_years, u32::MAX);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = CalculatorConfig::from_json_str(r#"{"currency_symbol": "$"}"#).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.days_per_year, 365.0);
        assert_eq!(config.annual_padding_years, 5);
    }

    #[test]
    fn test_annual_limit_override() {
        let config = CalculatorConfig::from_json_str(r#"{"annual_max_horizon_years": 100}"#).unwrap();
        assert_eq!(config.annual_max_horizon_years, 100);
        assert_eq!(config.monthly_max_horizon_months, 120);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(CalculatorConfig::from_json_str("{not json").is_err());
    }
}
