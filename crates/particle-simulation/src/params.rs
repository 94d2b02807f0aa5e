//! Simulation parameters and scenario configuration

use particle_physics::{
    friction_factor, Error, Result, DEFAULT_PARTICLE_COUNT, DEFAULT_TYPE_COUNT, DT, FORCE_FACTOR,
    FRICTION_HALF_LIFE, R_MAX, WRAP_LOWER, WRAP_SHIFT, WRAP_UPPER,
};
use serde::Deserialize;
use std::path::Path;

/// How the velocity state is stored relative to positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMode {
    /// Velocity reads and writes go straight to the position slots. The force
    /// pass then updates positions in place, in index order, and the advance
    /// pass scales every coordinate by `1 + dt`.
    #[default]
    Aliased,
    /// Velocity lives in its own zero-initialized buffer and the step is a
    /// plain semi-implicit Euler update.
    Independent,
}

/// Per-axis wrap applied after every advance.
///
/// A coordinate below `lower` is shifted up by `shift`, one above `upper` is
/// shifted down by `shift`. The defaults are not symmetric about the origin
/// and `shift` is not `upper - lower`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WrapBounds {
    pub lower: f32,
    pub upper: f32,
    pub shift: f32,
}

impl Default for WrapBounds {
    fn default() -> Self {
        Self {
            lower: WRAP_LOWER,
            upper: WRAP_UPPER,
            shift: WRAP_SHIFT,
        }
    }
}

impl WrapBounds {
    /// Wrap a single coordinate. At most one shift is applied.
    #[inline]
    pub fn wrap(&self, x: f32) -> f32 {
        if x < self.lower {
            x + self.shift
        } else if x > self.upper {
            x - self.shift
        } else {
            x
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.lower.is_finite() && self.upper.is_finite() && self.shift.is_finite()) {
            return Err(Error::InvalidConfig("wrap bounds must be finite".into()));
        }
        if self.lower >= self.upper {
            return Err(Error::InvalidConfig(format!(
                "wrap lower bound {} must be below upper bound {}",
                self.lower, self.upper
            )));
        }
        if self.shift <= 0.0 {
            return Err(Error::InvalidConfig("wrap shift must be > 0".into()));
        }
        Ok(())
    }
}

/// Tuning knobs for the step
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Fixed time step per frame
    pub dt: f32,
    /// Interaction radius
    pub r_max: f32,
    /// Scale applied to accumulated acceleration
    pub force_factor: f32,
    /// Half-life of velocity under friction
    pub friction_half_life: f32,
    pub wrap: WrapBounds,
    pub integration: IntegrationMode,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            dt: DT,
            r_max: R_MAX,
            force_factor: FORCE_FACTOR,
            friction_half_life: FRICTION_HALF_LIFE,
            wrap: WrapBounds::default(),
            integration: IntegrationMode::default(),
        }
    }
}

impl SimulationParams {
    /// Per-step velocity multiplier
    pub fn friction_factor(&self) -> f32 {
        friction_factor(self.dt, self.friction_half_life)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("dt", self.dt),
            ("r_max", self.r_max),
            ("force_factor", self.force_factor),
            ("friction_half_life", self.friction_half_life),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        self.wrap.validate()
    }
}

/// Everything needed to build a simulation from scratch.
///
/// Every field is optional in YAML:
///
/// ```yaml
/// particle_count: 2000
/// type_count: 6
/// seed: 42
/// params:
///   r_max: 0.3
///   integration: independent
///   wrap:
///     lower: -1.05
///     upper: 2.05
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub particle_count: usize,
    pub type_count: usize,
    /// Drawn from the thread RNG when absent
    pub seed: Option<u64>,
    pub params: SimulationParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            type_count: DEFAULT_TYPE_COUNT,
            seed: None,
            params: SimulationParams::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(Error::InvalidConfig("particle_count must be > 0".into()));
        }
        if self.type_count == 0 {
            return Err(Error::InvalidConfig("type_count must be > 0".into()));
        }
        self.params.validate()
    }
}
