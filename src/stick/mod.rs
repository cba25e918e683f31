//! The stick and the ants placed on it

pub mod set;
pub mod window;

pub use set::{ParticleSet, StickConfig};
pub use window::ActiveWindow;
