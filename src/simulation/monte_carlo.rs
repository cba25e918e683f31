use crate::error::{Result, SimError};
use crate::simulation::trial::run_trial;
use crate::stick::StickConfig;

/// Shape of a whole Monte Carlo run
#[derive(Clone, Copy, Debug)]
pub struct MonteCarloConfig {
    pub stick: StickConfig,
    /// Seed for the single random stream every trial draws from
    pub seed: u64,
    /// Total number of independent trials
    pub trials: u64,
    /// Number of evenly sized groups the trials are partitioned into
    pub groups: u64,
}

impl MonteCarloConfig {
    /// Validate the run shape before any simulation work starts
    pub fn validate(&self) -> Result<()> {
        self.stick.validate()?;
        if self.trials == 0 {
            return Err(SimError::InvalidConfig("trials must be > 0".to_string()));
        }
        if self.groups == 0 {
            return Err(SimError::InvalidConfig("groups must be > 0".to_string()));
        }
        if self.trials % self.groups != 0 {
            return Err(SimError::UnevenGroups {
                trials: self.trials,
                groups: self.groups,
            });
        }
        Ok(())
    }
}

/// Per-id probability estimates accumulated over a whole run
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateStatistics {
    /// For each id, the estimated probability of exiting in the direction
    /// the ant originally faced
    pub probabilities: Vec<f64>,
    pub trials: u64,
    pub groups: u64,
}

/// Run `trials` independent trials off one seeded stream and estimate, per
/// id, the probability that an ant leaves the stick the way it was facing
///
/// Trials are partitioned into `groups` equal parts; each group yields its
/// own ratio and the reported probability is the mean over groups. With a
/// single group this is exactly the flat accumulation.
pub fn run_monte_carlo(config: &MonteCarloConfig) -> Result<AggregateStatistics> {
    config.validate()?;

    let mut rng = fastrand::Rng::with_seed(config.seed);
    let per_group = config.trials / config.groups;
    let ants = config.stick.ants;

    let mut probability_acc = vec![0.0_f64; ants];
    for _ in 0..config.groups {
        let mut hits = vec![0_u64; ants];
        for _ in 0..per_group {
            let outcome = run_trial(&config.stick, &mut rng)?;
            for (hit, &same) in hits.iter_mut().zip(&outcome.same_direction) {
                *hit += u64::from(same);
            }
        }
        for (acc, &hit) in probability_acc.iter_mut().zip(&hits) {
            *acc += hit as f64 / per_group as f64;
        }
    }

    let probabilities = probability_acc
        .into_iter()
        .map(|acc| acc / config.groups as f64)
        .collect();

    Ok(AggregateStatistics {
        probabilities,
        trials: config.trials,
        groups: config.groups,
    })
}
