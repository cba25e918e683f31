use crate::stick::ParticleSet;

/// Time advanced per step, independent of speed magnitude
pub const TIME_STEP: f64 = 0.5;

/// Position difference indistinguishable from contact
pub const EPS_X: f64 = 0.001;

/// Discrete-time stepping engine for one trial
///
/// Advances a [`ParticleSet`] until every ant has left the stick, applying
/// exit and collision rules in id order. The step count is capped at the
/// maximum possible ant lifetime (`length / speed`) as a safety bound; a
/// well-formed trial empties the window before reaching it.
#[derive(Debug)]
pub struct SimulationEngine {
    length: f64,
    max_steps: u64,
    steps: u64,
    time: f64,
}

impl SimulationEngine {
    /// Create an engine for a stick of the given length and ant speed
    pub fn new(length: f64, speed: f64) -> Self {
        Self {
            length,
            max_steps: (length / speed / TIME_STEP).ceil() as u64,
            steps: 0,
            time: 0.0,
        }
    }

    /// Simulated time elapsed so far
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Steps taken so far
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Safety cap on the number of steps
    #[inline]
    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Advance every active ant by one time increment
    ///
    /// Ants are processed in increasing id order and each position is
    /// written before the next ant is examined, so an ant's collision check
    /// sees its left neighbor's position from *this* pass. A
    /// compute-then-commit pass would shift collision timing and change
    /// trial outcomes.
    pub fn step(&mut self, set: &mut ParticleSet) {
        let mut i = set.window.low();
        // The window bounds shrink mid-pass; re-read them every iteration
        while i < set.window.end() {
            set.ants[i].advance(TIME_STEP);
            let pos = set.ants[i].position;

            if pos < 0.0 {
                set.ants[i].exit_left();
                set.window.shrink_left();
            } else if pos > self.length {
                set.ants[i].exit_right();
                set.window.shrink_right();
            } else if i > set.window.low() {
                // Equal speed magnitudes make an elastic collision the same
                // as reversing both directions
                let (left, right) = set.ants.split_at_mut(i);
                let prev = &mut left[i - 1];
                let cur = &mut right[0];
                if (cur.position - prev.position).abs() < EPS_X && cur.velocity != prev.velocity {
                    cur.reflect();
                    prev.reflect();
                }
            }

            i += 1;
        }
        self.steps += 1;
        self.time += TIME_STEP;
    }

    /// Step until every ant has exited or the safety bound is hit
    pub fn run(&mut self, set: &mut ParticleSet) {
        while !set.window.is_empty() && self.steps < self.max_steps {
            self.step(set);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::{Ant, AntState};
    use crate::stick::{ParticleSet, StickConfig};

    fn two_ant_set() -> ParticleSet {
        ParticleSet::from_ants(vec![Ant::new(0, 3.0, 1.0), Ant::new(1, 7.0, -1.0)]).unwrap()
    }

    #[test]
    fn test_head_on_pair_meets_at_center_and_swaps_ends() {
        let mut set = two_ant_set();
        let mut engine = SimulationEngine::new(10.0, 1.0);
        engine.run(&mut set);

        assert!(set.window.is_empty());
        assert_eq!(set.ants[0].state(), AntState::ExitedLeft);
        assert_eq!(set.ants[1].state(), AntState::ExitedRight);
        // One collision each, both directions flipped
        assert_eq!(set.ants[0].collisions, 1);
        assert_eq!(set.ants[1].collisions, 1);
        assert_eq!(set.ants[0].velocity, -1.0);
        assert_eq!(set.ants[1].velocity, 1.0);
    }

    #[test]
    fn test_head_on_pair_collides_at_time_two() {
        let mut set = two_ant_set();
        let mut engine = SimulationEngine::new(10.0, 1.0);

        while set.ants[0].collisions == 0 {
            engine.step(&mut set);
        }
        // They meet at position 5 after four steps
        assert_eq!(engine.time(), 2.0);
        assert_eq!(set.ants[0].position, 5.0);
        assert_eq!(set.ants[1].position, 5.0);
    }

    #[test]
    fn test_lone_ant_exits_right_unchanged() {
        let mut set = ParticleSet::from_ants(vec![Ant::new(0, 5.0, 1.0)]).unwrap();
        let mut engine = SimulationEngine::new(10.0, 1.0);
        engine.run(&mut set);

        assert_eq!(set.ants[0].state(), AntState::ExitedRight);
        assert_eq!(set.ants[0].collisions, 0);
        assert_eq!(set.ants[0].velocity, 1.0);
        // Crosses the right end strictly after reaching it
        assert_eq!(engine.time(), 5.5);
    }

    #[test]
    fn test_lone_ant_exits_left() {
        let mut set = ParticleSet::from_ants(vec![Ant::new(0, 2.0, -1.0)]).unwrap();
        let mut engine = SimulationEngine::new(10.0, 1.0);
        engine.run(&mut set);

        assert_eq!(set.ants[0].state(), AntState::ExitedLeft);
        assert_eq!(engine.time(), 2.5);
    }

    #[test]
    fn test_sequential_update_sees_neighbor_moved_this_pass() {
        // Both positions are written in the same pass, so the pair meets at
        // the half-integer 4.5 after a single step
        let mut set =
            ParticleSet::from_ants(vec![Ant::new(0, 4.0, 1.0), Ant::new(1, 5.0, -1.0)]).unwrap();
        let mut engine = SimulationEngine::new(10.0, 1.0);
        engine.step(&mut set);

        assert_eq!(set.ants[0].position, 4.5);
        assert_eq!(set.ants[1].position, 4.5);
        assert_eq!(set.ants[0].velocity, -1.0);
        assert_eq!(set.ants[1].velocity, 1.0);
    }

    #[test]
    fn test_parallel_neighbors_never_collide() {
        let mut set =
            ParticleSet::from_ants(vec![Ant::new(0, 4.0, 1.0), Ant::new(1, 5.0, 1.0)]).unwrap();
        let mut engine = SimulationEngine::new(10.0, 1.0);
        engine.run(&mut set);

        assert_eq!(set.ants[0].collisions, 0);
        assert_eq!(set.ants[1].collisions, 0);
        assert_eq!(set.ants[0].state(), AntState::ExitedRight);
        assert_eq!(set.ants[1].state(), AntState::ExitedRight);
    }

    #[test]
    fn test_safety_bound_halts_boundary_straggler() {
        // An ant starting exactly at the right end and walking left reaches
        // position 0 on the last in-bound step and never goes strictly
        // negative before the cap
        let mut set = ParticleSet::from_ants(vec![Ant::new(0, 10.0, -1.0)]).unwrap();
        let mut engine = SimulationEngine::new(10.0, 1.0);
        engine.run(&mut set);

        assert_eq!(engine.steps(), engine.max_steps());
        assert!(set.ants[0].is_active());
        assert_eq!(set.ants[0].velocity, -1.0);
    }

    #[test]
    fn test_ordering_and_speed_conserved_through_random_run() {
        let config = StickConfig {
            ants: 10,
            length: 50.0,
            speed: 1.0,
        };
        let mut rng = fastrand::Rng::with_seed(2177);
        let mut set = ParticleSet::random(&config, &mut rng).unwrap();
        let mut engine = SimulationEngine::new(config.length, config.speed);

        while !set.window.is_empty() && engine.steps() < engine.max_steps() {
            engine.step(&mut set);

            for ant in &set.ants {
                assert_eq!(ant.velocity.abs(), config.speed);
            }
            let active: Vec<&Ant> = set.ants.iter().filter(|a| a.is_active()).collect();
            for pair in active.windows(2) {
                assert!(
                    pair[0].position <= pair[1].position,
                    "active ants out of order at step {}",
                    engine.steps()
                );
            }
            // Active ids form exactly the window range
            for ant in &set.ants {
                assert_eq!(ant.is_active(), set.window.contains(ant.id as usize));
            }
        }
    }
}
