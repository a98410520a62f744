//! Solar ROI - cost projections comparing a solar installation with grid electricity
//!
//! This library provides:
//! - System sizing and payback calculation from panel, tariff and load figures
//! - Annual or monthly cost series with break-even detection
//! - Renderer-agnostic chart descriptions and a JSON response envelope
//! - Parallel batch runs over CSV scenario files

pub mod chart;
pub mod config;
pub mod error;
pub mod input;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use error::{CalcError, InputError, LoadError};
pub use input::{CalculationForm, CalculationInput, EnergyUnit, ProjectionMode};
pub use projection::{Calculator, CalculationResult, Payback, Projection, ProjectionSeries};
pub use report::{CalculationReport, CalculationResponse};
pub use scenario::ScenarioRunner;
