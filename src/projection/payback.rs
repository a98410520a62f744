//! Payback period as an explicit finite-or-never value

use serde::{Serialize, Serializer};
use std::fmt;

/// Token used wherever a payback that never happens must be reported
pub const NEVER_TOKEN: &str = "Never";

/// Years until avoided grid cost recovers the solar outlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payback {
    /// Recovered after this many years
    Finite(f64),
    /// Grid cost is zero, so the outlay is never recovered
    Never,
}

impl Payback {
    /// Payback for an upfront cost recovered by a constant annual saving
    pub fn from_costs(total_solar_cost: f64, annual_grid_cost: f64) -> Self {
        if annual_grid_cost > 0.0 {
            Payback::Finite(total_solar_cost / annual_grid_cost)
        } else {
            Payback::Never
        }
    }

    pub fn years(&self) -> Option<f64> {
        match self {
            Payback::Finite(y) => Some(*y),
            Payback::Never => None,
        }
    }

    /// Same payback with the year figure rounded to `places` decimals
    pub fn rounded(&self, places: i32) -> Self {
        match self {
            Payback::Finite(y) => Payback::Finite(round_to(*y, places)),
            Payback::Never => Payback::Never,
        }
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Finite(y) => write!(f, "{:.2}", y),
            Payback::Never => f.write_str(NEVER_TOKEN),
        }
    }
}

/// Finite paybacks serialize as numbers, `Never` as the string "Never"
impl Serialize for Payback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payback::Finite(y) => serializer.serialize_f64(*y),
            Payback::Never => serializer.serialize_str(NEVER_TOKEN),
        }
    }
}

/// Round half away from zero to a fixed number of decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
