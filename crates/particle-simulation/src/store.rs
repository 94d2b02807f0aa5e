//! Per-particle state and the buffers handed to a renderer
//!
//! Positions, velocities and colors are stored as `[f32; 3]` per particle so
//! the backing memory is a flat, row-major `3n` float buffer that can be cast
//! straight to bytes for upload.

use crate::IntegrationMode;
use glam::Vec3;
use particle_physics::{type_color, Error, Result};

/// Where velocity reads and writes land
#[derive(Clone, Debug)]
enum VelocityStorage {
    /// Velocity accessors resolve to the position slots
    Aliased,
    Independent(Vec<[f32; 3]>),
}

/// Owns type, position, velocity and color for every particle.
///
/// Particle count and types are fixed once built.
#[derive(Clone, Debug)]
pub struct ParticleStore {
    types: Vec<u32>,
    positions: Vec<[f32; 3]>,
    velocities: VelocityStorage,
    colors: Vec<[f32; 3]>,
}

impl ParticleStore {
    /// Build a store from per-particle types and positions.
    ///
    /// Every type must index into a matrix of `type_count` types. Velocities
    /// start at zero when they are independent of positions.
    pub fn new(
        types: Vec<u32>,
        positions: Vec<[f32; 3]>,
        type_count: usize,
        mode: IntegrationMode,
    ) -> Result<Self> {
        if types.is_empty() {
            return Err(Error::InvalidConfig("particle_count must be > 0".into()));
        }
        if types.len() != positions.len() {
            return Err(Error::InvalidParticle(format!(
                "{} types given for {} positions",
                types.len(),
                positions.len()
            )));
        }
        if let Some((i, ty)) = types
            .iter()
            .enumerate()
            .find(|&(_, &ty)| ty as usize >= type_count)
        {
            return Err(Error::InvalidParticle(format!(
                "particle {i} has type {ty}, only {type_count} types exist"
            )));
        }

        let colors = types
            .iter()
            .map(|&ty| type_color(ty as usize, type_count))
            .collect();

        let velocities = match mode {
            IntegrationMode::Aliased => VelocityStorage::Aliased,
            IntegrationMode::Independent => {
                VelocityStorage::Independent(vec![[0.0; 3]; types.len()])
            }
        };

        Ok(Self {
            types,
            positions,
            velocities,
            colors,
        })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn is_aliased(&self) -> bool {
        matches!(self.velocities, VelocityStorage::Aliased)
    }

    #[inline]
    pub fn particle_type(&self, i: usize) -> usize {
        self.types[i] as usize
    }

    pub fn types(&self) -> &[u32] {
        &self.types
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.positions[i])
    }

    #[inline]
    pub fn set_position(&mut self, i: usize, position: Vec3) {
        self.positions[i] = position.to_array();
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Velocity of particle `i`. Under aliasing this is its position.
    #[inline]
    pub fn velocity(&self, i: usize) -> Vec3 {
        match &self.velocities {
            VelocityStorage::Aliased => Vec3::from_array(self.positions[i]),
            VelocityStorage::Independent(velocities) => Vec3::from_array(velocities[i]),
        }
    }

    /// Overwrite the velocity of particle `i`. Under aliasing this overwrites its position.
    #[inline]
    pub fn set_velocity(&mut self, i: usize, velocity: Vec3) {
        match &mut self.velocities {
            VelocityStorage::Aliased => self.positions[i] = velocity.to_array(),
            VelocityStorage::Independent(velocities) => velocities[i] = velocity.to_array(),
        }
    }

    pub fn color(&self, i: usize) -> [f32; 3] {
        self.colors[i]
    }

    /// `3n` floats, `(x, y, z)` per particle
    pub fn position_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// `3n` floats, linear `(r, g, b)` per particle
    pub fn color_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}
