//! Period-indexed cost series for the grid and solar alternatives

use crate::input::ProjectionMode;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Cost comparison over periods `0..=horizon`.
///
/// All four value vectors are parallel to `periods`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub mode: ProjectionMode,

    /// Last period index (inclusive)
    pub horizon: u32,

    pub periods: Vec<u32>,

    /// Running total paid to the grid
    pub grid_cumulative: Vec<f64>,

    /// Running total paid for the solar system (upfront, so flat)
    pub solar_cumulative: Vec<f64>,

    /// Grid cost incurred in each period
    pub grid_periodic: Vec<f64>,

    /// Solar cost incurred in each period
    pub solar_periodic: Vec<f64>,
}

/// One period of a series, as written to CSV
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesRow {
    #[serde(rename = "Period")]
    pub period: u32,
    #[serde(rename = "GridCumulative")]
    pub grid_cumulative: f64,
    #[serde(rename = "SolarCumulative")]
    pub solar_cumulative: f64,
    #[serde(rename = "GridPeriodic")]
    pub grid_periodic: f64,
    #[serde(rename = "SolarPeriodic")]
    pub solar_periodic: f64,
}

impl ProjectionSeries {
    /// Build the series for a constant per-period grid cost against an
    /// upfront solar cost paid at period 0.
    pub fn linear(
        mode: ProjectionMode,
        horizon: u32,
        grid_cost_per_period: f64,
        total_solar_cost: f64,
    ) -> Self {
        let periods: Vec<u32> = (0..=horizon).collect();
        let upfront = |p: &u32| if *p == 0 { total_solar_cost } else { 0.0 };

        Self {
            mode,
            horizon,
            grid_cumulative: periods.iter().map(|&p| grid_cost_per_period * p as f64).collect(),
            solar_cumulative: vec![total_solar_cost; periods.len()],
            grid_periodic: vec![grid_cost_per_period; periods.len()],
            solar_periodic: periods.iter().map(upfront).collect(),
            periods,
        }
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = SeriesRow> + '_ {
        self.periods.iter().enumerate().map(move |(i, &period)| SeriesRow {
            period,
            grid_cumulative: self.grid_cumulative[i],
            solar_cumulative: self.solar_cumulative[i],
            grid_periodic: self.grid_periodic[i],
            solar_periodic: self.solar_periodic[i],
        })
    }

    /// Write one CSV row per period, with a header
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in self.rows() {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Where the solar and grid cumulative costs cross on the period axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    /// Position in periods of the series' mode (fractional)
    pub period: f64,

    /// Cumulative cost at the crossing
    pub cost: f64,
}
