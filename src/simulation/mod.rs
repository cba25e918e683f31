pub mod engine;
pub mod monte_carlo;
pub mod trial;

pub use engine::{SimulationEngine, EPS_X, TIME_STEP};
pub use monte_carlo::{run_monte_carlo, AggregateStatistics, MonteCarloConfig};
pub use trial::{run_trial, TrialOutcome};
