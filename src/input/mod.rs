//! Calculator inputs: typed record, raw form fields and scenario files

mod data;
mod form;
pub mod loader;

pub use data::{CalculationInput, EnergyUnit, ProjectionMode};
pub use form::{parse_number, CalculationForm, FieldValue};
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
