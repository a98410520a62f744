//! Calculation input record, projection mode and energy unit

use crate::error::{CalcError, InputError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const HOURS_PER_DAY: f64 = 24.0;
const WH_PER_KWH: f64 = 1000.0;

/// Time unit of the projection axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// One period per year
    #[default]
    Annual,
    /// One period per month
    Monthly,
}

impl ProjectionMode {
    /// Number of periods in one year
    pub fn periods_per_year(&self) -> f64 {
        match self {
            ProjectionMode::Annual => 1.0,
            ProjectionMode::Monthly => 12.0,
        }
    }

    /// Axis label for the period index
    pub fn axis_label(&self) -> &'static str {
        match self {
            ProjectionMode::Annual => "Years",
            ProjectionMode::Monthly => "Months",
        }
    }

    /// Adjective used for per-period cost labels
    pub fn period_adjective(&self) -> &'static str {
        match self {
            ProjectionMode::Annual => "Annual",
            ProjectionMode::Monthly => "Monthly",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionMode::Annual => "annual",
            ProjectionMode::Monthly => "monthly",
        }
    }

    /// Lenient parse used for web form values: only "monthly" selects
    /// monthly mode, anything else (including nothing) is annual.
    pub fn from_form_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("monthly") => ProjectionMode::Monthly,
            _ => ProjectionMode::Annual,
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectionMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" => Ok(ProjectionMode::Annual),
            "monthly" => Ok(ProjectionMode::Monthly),
            other => Err(InputError::UnknownMode(other.to_string())),
        }
    }
}

/// Unit of the daily energy figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    #[default]
    #[value(name = "kwh")]
    #[serde(rename = "kwh")]
    KilowattHours,
    #[value(name = "wh")]
    #[serde(rename = "wh")]
    WattHours,
}

impl EnergyUnit {
    /// Convert an amount in this unit to kWh
    pub fn to_kwh(&self, amount: f64) -> f64 {
        match self {
            EnergyUnit::KilowattHours => amount,
            EnergyUnit::WattHours => amount / WH_PER_KWH,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyUnit::KilowattHours => "kwh",
            EnergyUnit::WattHours => "wh",
        }
    }
}

impl FromStr for EnergyUnit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kwh" => Ok(EnergyUnit::KilowattHours),
            "wh" => Ok(EnergyUnit::WattHours),
            other => Err(InputError::UnknownEnergyUnit(other.to_string())),
        }
    }
}

/// The five user measurements plus how to interpret and project them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Price of one panel
    pub panel_cost: f64,

    /// Rated output of one panel (W)
    pub panel_wattage: f64,

    /// Grid tariff (currency per kWh)
    pub current_cost_per_kwh: f64,

    /// Daily consumption, in `energy_unit`
    pub daily_energy: f64,

    /// Peak load the system must supply (W)
    pub peak_power_w: f64,

    #[serde(default)]
    pub mode: ProjectionMode,

    #[serde(default)]
    pub energy_unit: EnergyUnit,
}

impl CalculationInput {
    pub fn new(
        panel_cost: f64,
        panel_wattage: f64,
        current_cost_per_kwh: f64,
        daily_energy: f64,
        peak_power_w: f64,
        mode: ProjectionMode,
    ) -> Self {
        Self {
            panel_cost,
            panel_wattage,
            current_cost_per_kwh,
            daily_energy,
            peak_power_w,
            mode,
            energy_unit: EnergyUnit::KilowattHours,
        }
    }

    pub fn with_energy_unit(mut self, energy_unit: EnergyUnit) -> Self {
        self.energy_unit = energy_unit;
        self
    }

    pub fn with_mode(mut self, mode: ProjectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Daily energy converted to kWh
    pub fn daily_energy_kwh(&self) -> f64 {
        self.energy_unit.to_kwh(self.daily_energy)
    }

    /// Whether running at peak power all day would cover the daily demand.
    /// Advisory only: storage or grid backup can make up a shortfall.
    pub fn peak_supply_covers_demand(&self) -> bool {
        self.peak_power_w * HOURS_PER_DAY >= self.daily_energy_kwh() * WH_PER_KWH
    }

    /// Check the input, reporting the first violation only
    pub fn validate(&self) -> Result<(), CalcError> {
        let fields = [
            ("panel cost", self.panel_cost),
            ("panel wattage", self.panel_wattage),
            ("electricity cost", self.current_cost_per_kwh),
            ("daily energy", self.daily_energy),
            ("peak power", self.peak_power_w),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CalcError::invalid(format!("{} must be a finite number", name)));
        }

        if self.panel_wattage <= 0.0 {
            return Err(CalcError::invalid("panel wattage must be positive"));
        }

        let non_negative = [
            ("panel cost", self.panel_cost),
            ("electricity cost", self.current_cost_per_kwh),
            ("daily energy", self.daily_energy),
            ("peak power", self.peak_power_w),
        ];
        if let Some((name, _)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(CalcError::invalid(format!("{} cannot be negative", name)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> CalculationInput {
        CalculationInput::new(5000.0, 400.0, 2.0, 10.0, 2000.0, ProjectionMode::Annual)
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(base_input().validate().is_ok());
    }

    #[test]
    fn test_zero_wattage_rejected() {
        let mut input = base_input();
        input.panel_wattage = 0.0;
        assert_eq!(
            input.validate(),
            Err(CalcError::invalid("panel wattage must be positive"))
        );

        input.panel_wattage = -100.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_negative_fields_named_in_message() {
        let cases: [(fn(&mut CalculationInput), &str); 3] = [
            (|i| i.current_cost_per_kwh = -0.5, "electricity cost"),
            (|i| i.daily_energy = -1.0, "daily energy"),
            (|i| i.peak_power_w = -10.0, "peak power"),
        ];

        for (mutate, field) in cases {
            let mut input = base_input();
            mutate(&mut input);
            let err = input.validate().unwrap_err();
            assert_eq!(err.message(), format!("{} cannot be negative", field));
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let mut input = base_input();
        input.panel_wattage = 0.0;
        input.daily_energy = -1.0;
        assert_eq!(input.validate().unwrap_err().message(), "panel wattage must be positive");

        let mut input = base_input();
        input.current_cost_per_kwh = -1.0;
        input.peak_power_w = -1.0;
        assert_eq!(input.validate().unwrap_err().message(), "electricity cost cannot be negative");
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut input = base_input();
        input.daily_energy = f64::NAN;
        assert_eq!(input.validate().unwrap_err().message(), "daily energy must be a finite number");

        let mut input = base_input();
        input.panel_cost = f64::INFINITY;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_energy_unit_normalization() {
        let wh = base_input().with_energy_unit(EnergyUnit::WattHours);
        assert_eq!(wh.daily_energy_kwh(), 0.01);
        assert_eq!(base_input().daily_energy_kwh(), 10.0);
    }

    #[test]
    fn test_peak_supply_advisory() {
        // 2000 W * 24 h = 48 kWh >= 10 kWh
        assert!(base_input().peak_supply_covers_demand());

        let mut input = base_input();
        input.peak_power_w = 100.0; // 2.4 kWh/day
        assert!(!input.peak_supply_covers_demand());
        // never blocks
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Monthly".parse::<ProjectionMode>().unwrap(), ProjectionMode::Monthly);
        assert_eq!(" annual ".parse::<ProjectionMode>().unwrap(), ProjectionMode::Annual);
        assert!("weekly".parse::<ProjectionMode>().is_err());

        assert_eq!(ProjectionMode::from_form_value(Some("MONTHLY")), ProjectionMode::Monthly);
        assert_eq!(ProjectionMode::from_form_value(Some("weekly")), ProjectionMode::Annual);
        assert_eq!(ProjectionMode::from_form_value(None), ProjectionMode::Annual);
    }

    #[test]
    fn test_energy_unit_parsing() {
        assert_eq!("kWh".parse::<EnergyUnit>().unwrap(), EnergyUnit::KilowattHours);
        assert_eq!("wh".parse::<EnergyUnit>().unwrap(), EnergyUnit::WattHours);
        assert!("mwh".parse::<EnergyUnit>().is_err());
    }
}
