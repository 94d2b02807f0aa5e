//! # Particle Life Simulation
//!
//! CPU all-pairs particle-life step over a flat particle store, plus the
//! parameters and configuration needed to build one.

pub mod params;
pub mod simulation;
pub mod stats;
pub mod store;

pub use params::*;
pub use simulation::*;
pub use stats::*;
pub use store::*;
