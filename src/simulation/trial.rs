use crate::error::Result;
use crate::simulation::engine::SimulationEngine;
use crate::stick::{ParticleSet, StickConfig};

/// Per-id results of one completed trial
#[derive(Clone, Debug, PartialEq)]
pub struct TrialOutcome {
    /// Whether each ant's final direction matches the one it started with
    pub same_direction: Vec<bool>,
    /// How many collisions each ant participated in
    pub collisions: Vec<u32>,
}

impl TrialOutcome {
    /// Read the outcome off a finished particle set
    pub fn from_set(set: &ParticleSet) -> Self {
        let same_direction = set
            .ants
            .iter()
            .zip(&set.initial_velocities)
            .map(|(ant, &v0)| ant.velocity == v0)
            .collect();
        let collisions = set.ants.iter().map(|a| a.collisions).collect();
        Self {
            same_direction,
            collisions,
        }
    }

    /// Number of ants observed
    pub fn len(&self) -> usize {
        self.same_direction.len()
    }

    /// True for the degenerate empty outcome
    pub fn is_empty(&self) -> bool {
        self.same_direction.is_empty()
    }
}

/// Run one full randomized trial: place ants, simulate to completion,
/// compare final against initial directions
///
/// The only side effect is consuming draws from `rng`, so a seeded rng
/// reproduces the trial exactly.
pub fn run_trial(config: &StickConfig, rng: &mut fastrand::Rng) -> Result<TrialOutcome> {
    let mut set = ParticleSet::random(config, rng)?;
    let mut engine = SimulationEngine::new(config.length, config.speed);
    engine.run(&mut set);
    Ok(TrialOutcome::from_set(&set))
}
