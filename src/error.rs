use std::fmt;

/// Custom error types for the stick simulation
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A non-positive or non-finite configuration value
    InvalidConfig(String),
    /// The stick is too short to hold this many ants at distinct integer positions
    InfeasiblePlacement { ants: usize, length: f64 },
    /// Group count does not evenly divide the trial count
    UnevenGroups { trials: u64, groups: u64 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            SimError::InfeasiblePlacement { ants, length } => write!(
                f,
                "Cannot place {} ants at distinct integer positions on a stick of length {}",
                ants, length
            ),
            SimError::UnevenGroups { trials, groups } => write!(
                f,
                "{} groups do not evenly divide {} trials",
                groups, trials
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
