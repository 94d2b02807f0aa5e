//! # Particle Life Physics
//!
//! Leaf building blocks for the particle-life simulation: the type-pair
//! attraction matrix, the radial force kernel, and per-type colors.

pub mod attraction;
pub mod color;
pub mod constants;
pub mod error;
pub mod forces;

pub use attraction::*;
pub use color::*;
pub use constants::*;
pub use error::{Error, Result};
pub use forces::*;
