use crate::direction::Direction;

/// Lifecycle state of an ant: on the stick, or gone off one end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AntState {
    Active,
    ExitedLeft,
    ExitedRight,
}

/// A point ant on the stick
///
/// `id` is the rank of the ant's starting position in ascending order and is
/// never reassigned. `velocity` is always `+speed` or `-speed`; collisions
/// only flip its sign.
#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    pub position: f64,
    pub velocity: f64,
    /// Number of collisions this ant has participated in
    pub collisions: u32,
    state: AntState,
}

impl Ant {
    /// Create a new active ant
    pub fn new(id: u32, position: f64, velocity: f64) -> Self {
        Self {
            id,
            position,
            velocity,
            collisions: 0,
            state: AntState::Active,
        }
    }

    /// Current lifecycle state
    #[inline]
    pub fn state(&self) -> AntState {
        self.state
    }

    /// Check if the ant is still on the stick
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == AntState::Active
    }

    /// Mark the ant as fallen off the left end
    #[inline]
    pub fn exit_left(&mut self) {
        self.state = AntState::ExitedLeft;
    }

    /// Mark the ant as fallen off the right end
    #[inline]
    pub fn exit_right(&mut self) {
        self.state = AntState::ExitedRight;
    }

    /// Advance the position by one time increment, ignoring collisions
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.position += dt * self.velocity;
    }

    /// Reverse direction after a collision
    #[inline]
    pub fn reflect(&mut self) {
        self.velocity = -self.velocity;
        self.collisions += 1;
    }

    /// The direction this ant is currently facing
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from_velocity(self.velocity)
    }
}
