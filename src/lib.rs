//! # Stick Ants
//!
//! Monte Carlo simulation of point ants walking on a bounded 1-D stick.
//!
//! Each ant moves at a fixed speed, reverses direction elastically when it
//! touches a neighbor, and drops off once it walks past either end. The
//! library estimates, per starting rank, the probability that an ant leaves
//! the stick in the direction it originally faced.

pub mod ant;
pub mod cli;
pub mod direction;
pub mod error;
pub mod simulation;
pub mod stick;

pub use ant::{Ant, AntState};
pub use cli::Args;
pub use direction::Direction;
pub use error::{Result, SimError};
pub use simulation::{
    run_monte_carlo, run_trial, AggregateStatistics, MonteCarloConfig, SimulationEngine,
    TrialOutcome,
};
pub use stick::{ActiveWindow, ParticleSet, StickConfig};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        run_monte_carlo, run_trial, AggregateStatistics, Ant, AntState, Args, Direction,
        MonteCarloConfig, ParticleSet, Result, SimError, SimulationEngine, StickConfig,
        TrialOutcome,
    };
}
