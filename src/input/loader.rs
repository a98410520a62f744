//! Load calculation scenarios from CSV

use super::data::{CalculationInput, EnergyUnit, ProjectionMode};
use crate::error::{InputError, LoadError};
use csv::Reader;
use std::path::Path;

/// Raw CSV row; mode and energy_unit columns are optional
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    scenario_id: String,
    panel_cost: f64,
    panel_wattage: f64,
    current_cost_per_kwh: f64,
    daily_energy: f64,
    peak_power_w: f64,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    energy_unit: Option<String>,
}

/// One named input from a scenario file
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub scenario_id: String,
    pub input: CalculationInput,
}

impl CsvRow {
    fn into_scenario(self) -> Result<Scenario, LoadError> {
        let parsed = parse_optional::<ProjectionMode>(self.mode.as_deref())
            .and_then(|mode| {
                parse_optional::<EnergyUnit>(self.energy_unit.as_deref()).map(|unit| (mode, unit))
            });
        let (mode, energy_unit) = parsed.map_err(|source| LoadError::Row {
            scenario_id: self.scenario_id.clone(),
            source,
        })?;

        let input = CalculationInput::new(
            self.panel_cost,
            self.panel_wattage,
            self.current_cost_per_kwh,
            self.daily_energy,
            self.peak_power_w,
            mode,
        )
        .with_energy_unit(energy_unit);

        Ok(Scenario {
            scenario_id: self.scenario_id,
            input,
        })
    }
}

fn parse_optional<T>(value: Option<&str>) -> Result<T, InputError>
where
    T: std::str::FromStr<Err = InputError> + Default,
{
    match value {
        Some(v) if !v.trim().is_empty() => v.parse(),
        _ => Ok(T::default()),
    }
}

/// Load scenarios from a CSV file.
///
/// Values are not validated here; invalid inputs surface per scenario
/// when they are run.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, LoadError> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>, LoadError> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>, LoadError> {
    let mut scenarios = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario()?);
    }
    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
