/// Post-hoc annual summary of a run.
pub mod analysis;
pub mod engine;
pub mod policy;
pub mod types;
/// Physical invariant checks for feasible runs.
pub mod validation;

pub use analysis::{SummaryMetrics, analyze};
pub use engine::{Engine, simulate};
pub use types::{
    DailyResult, ENERGY_TOLERANCE, ParameterError, ScenarioParameters, SimulationError,
    SimulationOutcome, SimulationState,
};
