//! Renderer-agnostic chart descriptions built from a projection
//!
//! The calculator only describes what to draw: axis labels, the period axis,
//! named value series and an optional break-even marker. Front ends map
//! these onto whatever plotting library they use.

use crate::config::CalculatorConfig;
use crate::projection::{Projection, ProjectionSeries};
use serde::Serialize;

pub const GRID_SERIES_NAME: &str = "Grid Electricity";
pub const SOLAR_SERIES_NAME: &str = "Solar System";
const GRID_COLOR: &str = "#1f77b4";
const SOLAR_COLOR: &str = "#2ca02c";
const BREAK_EVEN_COLOR: &str = "red";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Lines with markers, one per series
    Line,
    /// Bars grouped side by side per period
    GroupedBar,
}

/// One named sequence of values, parallel to the chart's periods
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl DataSeries {
    fn new(name: &str, color: &str, values: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            values: values.to_vec(),
        }
    }
}

/// Highlighted point where the solar outlay is recovered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakEvenMarker {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub kind: ChartKind,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub periods: Vec<u32>,
    pub series: Vec<DataSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_even: Option<BreakEvenMarker>,
}

/// Cumulative cost lines for grid and solar, with the break-even marker
/// when it falls inside the horizon.
pub fn cumulative_chart(projection: &Projection, config: &CalculatorConfig) -> Chart {
    let series = &projection.series;
    let break_even = match (projection.break_even, projection.result.payback.years()) {
        (Some(be), Some(years)) => Some(BreakEvenMarker {
            x: be.period,
            y: be.cost,
            label: format!("Break-Even ({:.1} yrs)", years),
            color: BREAK_EVEN_COLOR.to_string(),
        }),
        _ => None,
    };

    Chart {
        title: "Cumulative Cost: Solar vs Grid".to_string(),
        kind: ChartKind::Line,
        x_axis_label: series.mode.axis_label().to_string(),
        y_axis_label: format!("Cumulative Cost ({})", config.currency_symbol),
        periods: series.periods.clone(),
        series: vec![
            DataSeries::new(GRID_SERIES_NAME, GRID_COLOR, &series.grid_cumulative),
            DataSeries::new(SOLAR_SERIES_NAME, SOLAR_COLOR, &series.solar_cumulative),
        ],
        break_even,
    }
}

/// Per-period cost bars for grid and solar
pub fn periodic_chart(series: &ProjectionSeries, config: &CalculatorConfig) -> Chart {
    let y_label = format!("{} Cost ({})", series.mode.period_adjective(), config.currency_symbol);

    Chart {
        title: format!("{} Over Time", y_label),
        kind: ChartKind::GroupedBar,
        x_axis_label: series.mode.axis_label().to_string(),
        y_axis_label: y_label,
        periods: series.periods.clone(),
        series: vec![
            DataSeries::new(GRID_SERIES_NAME, GRID_COLOR, &series.grid_periodic),
            DataSeries::new(SOLAR_SERIES_NAME, SOLAR_COLOR, &series.solar_periodic),
        ],
        break_even: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CalculationInput, ProjectionMode};
    use crate::projection::Calculator;

    fn project(mode: ProjectionMode, cost_per_kwh: f64) -> Projection {
        let input = CalculationInput::new(5000.0, 400.0, cost_per_kwh, 10.0, 2000.0, mode);
        Calculator::default().calculate(&input).unwrap()
    }

    #[test]
    fn test_cumulative_chart_annual() {
        let config = CalculatorConfig::default();
        let chart = cumulative_chart(&project(ProjectionMode::Annual, 2.0), &config);

        assert_eq!(chart.title, "Cumulative Cost: Solar vs Grid");
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.x_axis_label, "Years");
        assert_eq!(chart.y_axis_label, "Cumulative Cost (R)");
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, GRID_SERIES_NAME);
        assert_eq!(chart.series[1].values.len(), chart.periods.len());

        let marker = chart.break_even.unwrap();
        assert_eq!(marker.label, "Break-Even (3.4 yrs)");
        assert_eq!(marker.y, 25_000.0);
    }

    #[test]
    fn test_no_marker_when_never() {
        let config = CalculatorConfig::default();
        let chart = cumulative_chart(&project(ProjectionMode::Annual, 0.0), &config);
        assert!(chart.break_even.is_none());

        let json = serde_json::to_value(&chart).unwrap();
        assert!(json.get("break_even").is_none());
    }

    #[test]
    fn test_periodic_chart_monthly_labels() {
        let config = CalculatorConfig {
            currency_symbol: "$".to_string(),
            ..Default::default()
        };
        let projection = project(ProjectionMode::Monthly, 2.0);
        let chart = periodic_chart(&projection.series, &config);

        assert_eq!(chart.kind, ChartKind::GroupedBar);
        assert_eq!(chart.x_axis_label, "Months");
        assert_eq!(chart.y_axis_label, "Monthly Cost ($)");
        assert_eq!(chart.title, "Monthly Cost ($) Over Time");
        assert_eq!(chart.series[1].values[0], 25_000.0);
        assert_eq!(chart.series[1].values[1], 0.0);

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["kind"], "grouped_bar");
    }
}
