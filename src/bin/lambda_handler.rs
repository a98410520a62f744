//! AWS Lambda handler for solar ROI calculations
//!
//! Accepts the calculator form fields as JSON or as a urlencoded form post and
//! returns the calculation response envelope with both charts.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, RequestPayloadExt, Response};
use solar_roi::{CalculationForm, CalculationResponse, Calculator, CalculatorConfig};
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "SOLAR_ROI_CONFIG";

fn cors_builder(status: u16) -> lambda_http::http::response::Builder {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response(status: u16, body: &CalculationResponse) -> Result<Response<Body>, Error> {
    Ok(cors_builder(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Lambda handler function
async fn handler(calculator: &Calculator, event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors_builder(200).body(Body::Empty)?);
    }

    // Parse request body (JSON or form-urlencoded, by Content-Type)
    let form: CalculationForm = match event.payload::<CalculationForm>() {
        Ok(Some(form)) => form,
        Ok(None) => CalculationForm::default(),
        Err(e) => {
            log::debug!("Undecodable request body: {}", e);
            let response = CalculationResponse::failure(format!("Invalid request body: {}", e));
            return json_response(400, &response);
        }
    };

    let response = CalculationResponse::for_form(calculator, &form);
    json_response(200, &response)
}

fn load_config() -> Result<CalculatorConfig, Error> {
    let path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    Ok(CalculatorConfig::load_or_default(path.as_deref())?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let calculator = Calculator::new(load_config()?);
    let calculator = &calculator;
    run(service_fn(move |event: Request| async move { handler(calculator, event).await })).await
}
