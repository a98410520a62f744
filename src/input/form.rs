//! Raw request fields as submitted by a web form or JSON client

use super::data::{CalculationInput, EnergyUnit, ProjectionMode};
use crate::error::InputError;
use serde::Deserialize;

/// A field that may arrive as text (form posts) or as a JSON number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn to_number(&self, field: &'static str) -> Result<f64, InputError> {
        match self {
            FieldValue::Number(n) => Ok(*n),
            FieldValue::Text(s) => parse_number(field, s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// Parse a user-typed number, tolerating surrounding whitespace
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, InputError> {
    text.trim().parse::<f64>().map_err(|_| InputError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

/// Unvalidated calculator request using the public form field names
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculationForm {
    pub panel_cost: Option<FieldValue>,
    pub panel_wattage: Option<FieldValue>,
    pub current_cost: Option<FieldValue>,
    pub daily_energy: Option<FieldValue>,
    pub peak_power: Option<FieldValue>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub energy_unit: Option<String>,
}

fn required(value: &Option<FieldValue>, field: &'static str) -> Result<f64, InputError> {
    value
        .as_ref()
        .ok_or(InputError::MissingField(field))?
        .to_number(field)
}

impl CalculationForm {
    /// Convert text fields into a validated `CalculationInput`
    pub fn parse(&self) -> Result<CalculationInput, InputError> {
        let panel_cost = required(&self.panel_cost, "panel_cost")?;
        let panel_wattage = required(&self.panel_wattage, "panel_wattage")?;
        let current_cost = required(&self.current_cost, "current_cost")?;
        let daily_energy = required(&self.daily_energy, "daily_energy")?;
        let peak_power = required(&self.peak_power, "peak_power")?;

        let mode = ProjectionMode::from_form_value(self.mode.as_deref());
        let energy_unit = match self.energy_unit.as_deref() {
            Some(unit) if !unit.trim().is_empty() => unit.parse::<EnergyUnit>()?,
            _ => EnergyUnit::default(),
        };

        let input = CalculationInput::new(
            panel_cost,
            panel_wattage,
            current_cost,
            daily_energy,
            peak_power,
            mode,
        )
        .with_energy_unit(energy_unit);
        input.validate()?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(values: [&str; 5]) -> CalculationForm {
        CalculationForm {
            panel_cost: Some(values[0].into()),
            panel_wattage: Some(values[1].into()),
            current_cost: Some(values[2].into()),
            daily_energy: Some(values[3].into()),
            peak_power: Some(values[4].into()),
            mode: None,
            energy_unit: None,
        }
    }

    #[test]
    fn test_parse_text_fields() {
        let input = form(["5000", " 400 ", "2", "10", "2000"]).parse().unwrap();
        assert_eq!(input.panel_cost, 5000.0);
        assert_eq!(input.panel_wattage, 400.0);
        assert_eq!(input.mode, ProjectionMode::Annual);
        assert_eq!(input.energy_unit, EnergyUnit::KilowattHours);
    }

    #[test]
    fn test_missing_field() {
        let mut f = form(["5000", "400", "2", "10", "2000"]);
        f.peak_power = None;
        assert_eq!(f.parse().unwrap_err(), InputError::MissingField("peak_power"));
    }

    #[test]
    fn test_unparsable_number() {
        let err = form(["5000", "four hundred", "2", "10", "2000"]).parse().unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not convert 'four hundred' to a number for panel_wattage"
        );
    }

    #[test]
    fn test_validation_failure_passes_through() {
        let err = form(["5000", "0", "2", "10", "2000"]).parse().unwrap_err();
        assert_eq!(err.to_string(), "panel wattage must be positive");
    }

    #[test]
    fn test_mode_and_unit() {
        let mut f = form(["5000", "400", "2", "10000", "2000"]);
        f.mode = Some("monthly".to_string());
        f.energy_unit = Some("Wh".to_string());
        let input = f.parse().unwrap();
        assert_eq!(input.mode, ProjectionMode::Monthly);
        assert_eq!(input.daily_energy_kwh(), 10.0);

        f.energy_unit = Some("joules".to_string());
        assert!(matches!(f.parse(), Err(InputError::UnknownEnergyUnit(_))));
    }

    #[test]
    fn test_deserialize_json_numbers_and_strings() {
        let f: CalculationForm = serde_json::from_str(
            r#"{"panel_cost": 5000, "panel_wattage": "400", "current_cost": 2.5,
                "daily_energy": "10", "peak_power": 2000, "mode": "monthly"}"#,
        )
        .unwrap();
        let input = f.parse().unwrap();
        assert_eq!(input.panel_wattage, 400.0);
        assert_eq!(input.current_cost_per_kwh, 2.5);
        assert_eq!(input.mode, ProjectionMode::Monthly);
    }
}
