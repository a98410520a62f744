//! Error types for calculation, input parsing and scenario loading

use thiserror::Error;

/// The only failure the calculation core can produce.
///
/// The message is meant to be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("{0}")]
    InvalidInput(String),
}

impl CalcError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CalcError::InvalidInput(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            CalcError::InvalidInput(msg) => msg,
        }
    }
}

/// Failures while turning raw text fields into a `CalculationInput`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("could not convert '{value}' to a number for {field}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown projection mode: {0} (expected annual or monthly)")]
    UnknownMode(String),

    #[error("unknown energy unit: {0} (expected kwh or wh)")]
    UnknownEnergyUnit(String),

    #[error(transparent)]
    Calculation(#[from] CalcError),
}

/// Failures while reading configuration or scenario files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scenario {scenario_id}: {source}")]
    Row {
        scenario_id: String,
        #[source]
        source: InputError,
    },
}
