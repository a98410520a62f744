//! Batch evaluation of many independent calculation scenarios
//!
//! Each scenario is projected on its own; a failing scenario is reported
//! alongside the others instead of aborting the batch.

use crate::config::CalculatorConfig;
use crate::error::CalcError;
use crate::input::{CalculationInput, ProjectionMode, Scenario};
use crate::projection::{round_to, Calculator, Projection};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;

/// Outcome of one scenario in a batch
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub scenario_id: String,
    pub mode: ProjectionMode,
    pub result: Result<Projection, CalcError>,
}

/// Flat summary row for CSV output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "ScenarioId")]
    pub scenario_id: String,
    #[serde(rename = "Mode")]
    pub mode: String,
    #[serde(rename = "RequiredCapacityW")]
    pub required_capacity_w: Option<f64>,
    #[serde(rename = "TotalSolarCost")]
    pub total_solar_cost: Option<f64>,
    #[serde(rename = "AnnualGridCost")]
    pub annual_grid_cost: Option<f64>,
    #[serde(rename = "PaybackPeriod")]
    pub payback_period: String,
    #[serde(rename = "Horizon")]
    pub horizon: Option<u32>,
    #[serde(rename = "Error")]
    pub error: String,
}

impl ScenarioOutcome {
    pub fn summary_row(&self) -> SummaryRow {
        match &self.result {
            Ok(p) => SummaryRow {
                scenario_id: self.scenario_id.clone(),
                mode: self.mode.to_string(),
                required_capacity_w: Some(round_to(p.result.required_capacity_w, 1)),
                total_solar_cost: Some(round_to(p.result.total_solar_cost, 2)),
                annual_grid_cost: Some(round_to(p.result.annual_grid_cost, 2)),
                payback_period: p.result.payback.rounded(2).to_string(),
                horizon: Some(p.series.horizon),
                error: String::new(),
            },
            Err(e) => SummaryRow {
                scenario_id: self.scenario_id.clone(),
                mode: self.mode.to_string(),
                required_capacity_w: None,
                total_solar_cost: None,
                annual_grid_cost: None,
                payback_period: String::new(),
                horizon: None,
                error: e.to_string(),
            },
        }
    }
}

/// Shares one calculator configuration across many scenarios
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    calculator: Calculator,
}

impl ScenarioRunner {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::new(config),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Run a single input
    pub fn run(&self, input: &CalculationInput) -> Result<Projection, CalcError> {
        self.calculator.calculate(input)
    }

    /// Run all scenarios in parallel; output order matches input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        let outcomes: Vec<ScenarioOutcome> = scenarios
            .par_iter()
            .map(|s| ScenarioOutcome {
                scenario_id: s.scenario_id.clone(),
                mode: s.input.mode,
                result: self.calculator.calculate(&s.input),
            })
            .collect();

        let mut failed = 0;
        for outcome in &outcomes {
            if let Err(e) = &outcome.result {
                log::warn!("Scenario {} failed: {}", outcome.scenario_id, e);
                failed += 1;
            }
        }
        log::info!(
            "Ran {} scenarios ({} ok, {} failed)",
            outcomes.len(),
            outcomes.len() - failed,
            failed
        );

        outcomes
    }
}

/// Write one summary row per scenario, in the given order
pub fn write_summary_csv<W: Write>(outcomes: &[ScenarioOutcome], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        csv_writer.serialize(outcome.summary_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}
