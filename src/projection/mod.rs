//! Cost projection engine: payback, horizon selection and period series

mod engine;
mod payback;
mod series;

pub use engine::{Calculator, CalculationResult, Projection};
pub use payback::{round_to, Payback, NEVER_TOKEN};
pub use series::{BreakEven, ProjectionSeries, SeriesRow};
