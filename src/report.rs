//! Rounded summary figures and the success/failure response envelope

use crate::chart::{cumulative_chart, periodic_chart, Chart};
use crate::config::CalculatorConfig;
use crate::input::{CalculationForm, CalculationInput};
use crate::projection::{round_to, Calculator, Payback, Projection};
use serde::Serialize;

/// Successful calculation as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationReport {
    pub success: bool,

    /// Watts, 1 decimal
    pub required_capacity_w: f64,

    /// 2 decimals
    pub total_solar_cost: f64,

    /// Annual grid cost avoided, 2 decimals
    pub annual_savings: f64,

    /// Years to 2 decimals, or "Never"
    pub payback_period: Payback,

    pub graph_cumulative: Chart,
    pub graph_cost: Chart,
}

impl CalculationReport {
    pub fn from_projection(projection: &Projection, config: &CalculatorConfig) -> Self {
        let result = &projection.result;
        Self {
            success: true,
            required_capacity_w: round_to(result.required_capacity_w, 1),
            total_solar_cost: round_to(result.total_solar_cost, 2),
            annual_savings: round_to(result.annual_grid_cost, 2),
            payback_period: result.payback.rounded(2),
            graph_cumulative: cumulative_chart(projection, config),
            graph_cost: periodic_chart(&projection.series, config),
        }
    }
}

/// Failed calculation; carries the message only, never partial figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReport {
    pub success: bool,
    pub error: String,
}

/// What a front end sends back for one calculation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationResponse {
    Success(Box<CalculationReport>),
    Failure(FailureReport),
}

impl CalculationResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        CalculationResponse::Failure(FailureReport {
            success: false,
            error: message.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CalculationResponse::Success(_))
    }

    /// Run a typed input through the calculator
    pub fn for_input(calculator: &Calculator, input: &CalculationInput) -> Self {
        match calculator.calculate(input) {
            Ok(projection) => CalculationResponse::Success(Box::new(
                CalculationReport::from_projection(&projection, calculator.config()),
            )),
            Err(e) => CalculationResponse::failure(e.to_string()),
        }
    }

    /// Parse raw form fields and run them; any parse or validation
    /// failure becomes a failure response.
    pub fn for_form(calculator: &Calculator, form: &CalculationForm) -> Self {
        match form.parse() {
            Ok(input) => Self::for_input(calculator, &input),
            Err(e) => {
                log::debug!("Rejected calculation request: {}", e);
                CalculationResponse::failure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ProjectionMode;
    use serde_json::json;

    fn input(cost_per_kwh: f64) -> CalculationInput {
        CalculationInput::new(5000.0, 400.0, cost_per_kwh, 10.0, 2000.0, ProjectionMode::Annual)
    }

    #[test]
    fn test_success_envelope() {
        let response = CalculationResponse::for_input(&Calculator::default(), &input(2.0));
        assert!(response.is_success());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], json!(true));
        assert_eq!(json["required_capacity_w"], json!(2000.0));
        assert_eq!(json["total_solar_cost"], json!(25000.0));
        assert_eq!(json["annual_savings"], json!(7300.0));
        assert_eq!(json["payback_period"], json!(3.42));
        assert_eq!(json["graph_cumulative"]["x_axis_label"], json!("Years"));
        assert_eq!(json["graph_cost"]["y_axis_label"], json!("Annual Cost (R)"));
    }

    #[test]
    fn test_never_payback_is_token() {
        let response = CalculationResponse::for_input(&Calculator::default(), &input(0.0));
        let text = serde_json::to_string(&response).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["payback_period"], json!("Never"));
        assert_eq!(json["annual_savings"], json!(0.0));
        assert!(!text.contains("inf"));
    }

    #[test]
    fn test_rounding_of_figures() {
        let odd = CalculationInput::new(333.0, 7.0, 0.131, 3.3, 1234.56, ProjectionMode::Monthly);
        let response = CalculationResponse::for_input(&Calculator::default(), &odd);
        let CalculationResponse::Success(report) = response else {
            panic!("expected success");
        };

        assert_eq!(report.required_capacity_w, 1234.6);
        // 1234.56 * 333 / 7 = 58729.7828...
        assert_eq!(report.total_solar_cost, 58729.78);
        // 3.3 * 365 * 0.131 = 157.7895
        assert_eq!(report.annual_savings, 157.79);
    }

    #[test]
    fn test_failure_envelope() {
        let bad = CalculationInput { daily_energy: -1.0, ..input(2.0) };
        let response = CalculationResponse::for_input(&Calculator::default(), &bad);

        assert!(!response.is_success());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": false, "error": "daily energy cannot be negative"})
        );
    }

    #[test]
    fn test_unrepresentable_payback_is_failure() {
        let response = CalculationResponse::for_input(&Calculator::default(), &input(1e-320));
        let text = serde_json::to_string(&response).unwrap();

        assert!(!response.is_success());
        assert!(!text.contains("null"), "{}", text);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": false, "error": "payback period is too large to compute"})
        );
    }

    #[test]
    fn test_form_parse_failure_envelope() {
        let form = CalculationForm {
            panel_cost: Some("5000".into()),
            ..Default::default()
        };
        let response = CalculationResponse::for_form(&Calculator::default(), &form);
        assert_eq!(response, CalculationResponse::failure("missing field: panel_wattage"));
    }
}
