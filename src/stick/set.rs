use crate::ant::Ant;
use crate::error::{Result, SimError};
use crate::stick::window::ActiveWindow;
use std::collections::BTreeSet;

/// Shape of one randomized trial: how many ants, on how long a stick,
/// moving how fast
#[derive(Clone, Copy, Debug)]
pub struct StickConfig {
    /// Number of ants
    pub ants: usize,
    /// Stick length
    pub length: f64,
    /// Speed magnitude shared by every ant
    pub speed: f64,
}

impl StickConfig {
    /// Reject impossible configurations before any simulation work starts
    ///
    /// Without the feasibility check, rejection sampling in
    /// [`ParticleSet::random`] never terminates when fewer than `ants`
    /// distinct integer positions fit on the stick.
    pub fn validate(&self) -> Result<()> {
        if self.ants == 0 {
            return Err(SimError::InvalidConfig("ants must be > 0".to_string()));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(SimError::InvalidConfig(
                "length must be finite and > 0".to_string(),
            ));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(SimError::InvalidConfig(
                "speed must be finite and > 0".to_string(),
            ));
        }
        // Rounding admits the integers 0..=floor(length)
        if self.ants > self.length.floor() as usize + 1 {
            return Err(SimError::InfeasiblePlacement {
                ants: self.ants,
                length: self.length,
            });
        }
        Ok(())
    }
}

/// The ants of one trial, indexed by id, plus the active id window
/// and the velocity snapshot taken at creation
#[derive(Clone, Debug)]
pub struct ParticleSet {
    pub ants: Vec<Ant>,
    pub initial_velocities: Vec<f64>,
    pub window: ActiveWindow,
}

impl ParticleSet {
    /// Place ants uniformly at distinct integer positions on the stick
    ///
    /// Positions are drawn first (rejection sampling into an ordered set),
    /// then one fair coin per ant picks its direction. Ids are assigned by
    /// ascending position rank. Draw order is fixed so a seeded rng
    /// reproduces the same trial.
    pub fn random(config: &StickConfig, rng: &mut fastrand::Rng) -> Result<Self> {
        config.validate()?;

        let mut taken: BTreeSet<u64> = BTreeSet::new();
        while taken.len() < config.ants {
            taken.insert((rng.f64() * config.length).round() as u64);
        }

        let mut ants: Vec<Ant> = taken
            .into_iter()
            .enumerate()
            .map(|(id, pos)| Ant::new(id as u32, pos as f64, config.speed))
            .collect();
        for ant in &mut ants {
            if rng.bool() {
                ant.velocity = -config.speed;
            }
        }

        Ok(Self::with_snapshot(ants))
    }

    /// Build a set from explicit ants, for deterministic scenarios
    ///
    /// Positions must be strictly ascending by id.
    pub fn from_ants(ants: Vec<Ant>) -> Result<Self> {
        if ants.is_empty() {
            return Err(SimError::InvalidConfig(
                "particle set must not be empty".to_string(),
            ));
        }
        if ants.windows(2).any(|w| w[0].position >= w[1].position) {
            return Err(SimError::InvalidConfig(
                "ant positions must be strictly ascending".to_string(),
            ));
        }
        Ok(Self::with_snapshot(ants))
    }

    fn with_snapshot(ants: Vec<Ant>) -> Self {
        let initial_velocities = ants.iter().map(|a| a.velocity).collect();
        let window = ActiveWindow::new(ants.len());
        Self {
            ants,
            initial_velocities,
            window,
        }
    }

    /// Number of ants in the set
    pub fn len(&self) -> usize {
        self.ants.len()
    }

    /// True for the degenerate empty set
    pub fn is_empty(&self) -> bool {
        self.ants.is_empty()
    }
}
