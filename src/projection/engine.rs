//! Core cost projection: sizing, payback and horizon selection

use crate::config::CalculatorConfig;
use crate::error::CalcError;
use crate::input::{CalculationInput, ProjectionMode};
use super::payback::Payback;
use super::series::{BreakEven, ProjectionSeries};
use serde::Serialize;

/// Scalar figures derived from one input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub cost_per_watt: f64,

    /// System size; always the peak load
    pub required_capacity_w: f64,

    pub total_solar_cost: f64,

    pub annual_energy_kwh: f64,

    /// What the grid would cost per year, i.e. the annual saving from solar
    pub annual_grid_cost: f64,

    pub payback: Payback,
}

/// Full output of one calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub input: CalculationInput,
    pub result: CalculationResult,
    pub series: ProjectionSeries,

    /// Present only when payback is finite and falls inside the horizon
    pub break_even: Option<BreakEven>,
}

/// Stateless calculator; one instance can serve any number of inputs
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Validate the input and run the projection
    pub fn calculate(&self, input: &CalculationInput) -> Result<Projection, CalcError> {
        input.validate()?;

        if !input.peak_supply_covers_demand() {
            log::debug!(
                "Peak power {:.1} W cannot supply {:.2} kWh/day on its own",
                input.peak_power_w,
                input.daily_energy_kwh()
            );
        }

        let result = self.summarize(input);
        ensure_finite("total solar cost", result.total_solar_cost)?;
        ensure_finite("annual grid cost", result.annual_grid_cost)?;
        if let Some(years) = result.payback.years() {
            ensure_finite("payback period", years)?;
        }

        let horizon = self.horizon(input.mode, result.payback)?;
        let series = ProjectionSeries::linear(
            input.mode,
            horizon,
            result.annual_grid_cost / input.mode.periods_per_year(),
            result.total_solar_cost,
        );
        if let Some(last) = series.grid_cumulative.last() {
            ensure_finite("cumulative grid cost", *last)?;
        }
        let break_even = break_even_within(input.mode, horizon, &result);

        log::debug!(
            "Projected {} mode over {} periods: total cost {:.2}, grid {:.2}/yr, payback {}",
            input.mode,
            horizon,
            result.total_solar_cost,
            result.annual_grid_cost,
            result.payback
        );

        Ok(Projection {
            input: input.clone(),
            result,
            series,
            break_even,
        })
    }

    /// Scalar formulas; assumes a validated input
    fn summarize(&self, input: &CalculationInput) -> CalculationResult {
        let cost_per_watt = input.panel_cost / input.panel_wattage;
        let required_capacity_w = input.peak_power_w;
        let total_solar_cost = required_capacity_w * cost_per_watt;

        let annual_energy_kwh = input.daily_energy_kwh() * self.config.days_per_year;
        let annual_grid_cost = annual_energy_kwh * input.current_cost_per_kwh;

        CalculationResult {
            cost_per_watt,
            required_capacity_w,
            total_solar_cost,
            annual_energy_kwh,
            annual_grid_cost,
            payback: Payback::from_costs(total_solar_cost, annual_grid_cost),
        }
    }

    /// Last period index to project.
    ///
    /// Annual: payback year plus padding, at least the minimum. Paybacks
    /// past `annual_max_horizon_years` are rejected rather than truncated.
    /// Monthly: a multiple of the break-even month, clamped between the
    /// minimum and `monthly_max_horizon_months`.
    pub fn horizon(&self, mode: ProjectionMode, payback: Payback) -> Result<u32, CalcError> {
        let cfg = &self.config;

        match (mode, payback) {
            (ProjectionMode::Annual, Payback::Never) => Ok(cfg.annual_min_horizon_years),
            (ProjectionMode::Annual, Payback::Finite(years)) => {
                let padded = years.ceil() + cfg.annual_padding_years as f64;
                let horizon = padded.max(cfg.annual_min_horizon_years as f64);
                if horizon > cfg.annual_max_horizon_years as f64 {
                    return Err(CalcError::invalid(format!(
                        "payback period of {:.0} years is too long to project",
                        years
                    )));
                }
                Ok(horizon as u32)
            }
            (ProjectionMode::Monthly, Payback::Never) => Ok(cfg.monthly_min_horizon_months),
            (ProjectionMode::Monthly, Payback::Finite(years)) => {
                let break_even_month = (years * 12.0).ceil();
                let scaled = break_even_month * cfg.monthly_horizon_multiplier as f64;
                Ok(scaled
                    .max(cfg.monthly_min_horizon_months as f64)
                    .min(cfg.monthly_max_horizon_months as f64) as u32)
            }
        }
    }
}

/// Derived figures must stay representable; overflow is reported, not serialized
fn ensure_finite(name: &str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid(format!("{} is too large to compute", name)))
    }
}

fn break_even_within(
    mode: ProjectionMode,
    horizon: u32,
    result: &CalculationResult,
) -> Option<BreakEven> {
    let years = result.payback.years()?;
    let period = years * mode.periods_per_year();
    (period <= horizon as f64).then_some(BreakEven {
        period,
        cost: result.total_solar_cost,
    })
}
