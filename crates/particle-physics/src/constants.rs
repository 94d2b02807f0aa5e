//! Tuning constants for the particle-life simulation
//!
//! These values are tuned for the look of the simulation rather than for any
//! physical meaning. They are the defaults picked up by the simulation
//! parameters and can be overridden at construction time.

/// Default number of particles
pub const DEFAULT_PARTICLE_COUNT: usize = 2000;

/// Default number of particle types
pub const DEFAULT_TYPE_COUNT: usize = 6;

/// Fixed integration time step per frame
pub const DT: f32 = 1.0e-4;

/// Interaction radius. Distances are normalized by this before hitting the kernel
pub const R_MAX: f32 = 0.3;

/// Scale applied to the accumulated acceleration
pub const FORCE_FACTOR: f32 = 10.0;

/// Time for the velocity to decay to half its value under friction
pub const FRICTION_HALF_LIFE: f32 = 0.040;

/// Normalized distance below which particles always repel
pub const BETA: f32 = 0.2;

/// Slack around the wrap bounds
pub const WRAP_OFFSET: f32 = 0.05;

/// Lower coordinate bound before a particle wraps
pub const WRAP_LOWER: f32 = -1.0 - WRAP_OFFSET;

/// Upper coordinate bound before a particle wraps
pub const WRAP_UPPER: f32 = 2.0 + WRAP_OFFSET;

/// Distance a wrapped coordinate is shifted by. Not equal to `WRAP_UPPER - WRAP_LOWER`
pub const WRAP_SHIFT: f32 = 2.0 + 2.0 * WRAP_OFFSET;

/// Half-width of the cube particles are spawned in, centered on the origin
pub const SPAWN_HALF_EXTENT: f32 = 0.5;

/// HSL saturation used for type colors
pub const TYPE_SATURATION: f32 = 0.5;

/// HSL lightness used for type colors
pub const TYPE_LIGHTNESS: f32 = 0.5;

/// Per-step friction multiplier derived from a half-life: `0.5^(dt / half_life)`
pub fn friction_factor(dt: f32, half_life: f32) -> f32 {
    0.5_f32.powf(dt / half_life)
}
