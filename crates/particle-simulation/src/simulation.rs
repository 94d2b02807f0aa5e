//! CPU particle-life simulation
//!
//! NOTE: The force pass reads and writes the same position buffer when
//! velocities are aliased. Particle `i` sees the already-updated positions of
//! every `j < i` from the same frame, so the pass must run in ascending index
//! order on a single thread. Switching to an all-old-values update changes the
//! emergent motion and is what `IntegrationMode::Independent` is for.

use crate::{FrameStats, IntegrationMode, ParticleStore, SimulationConfig, SimulationParams};
use glam::Vec3;
use particle_physics::{pair_acceleration, AttractionMatrix, Result, SPAWN_HALF_EXTENT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One simulation instance: matrix, particles, and step parameters.
///
/// `step` is the only mutator after construction. Renderers read the
/// position and color buffers between steps.
#[derive(Clone, Debug)]
pub struct Simulation {
    matrix: AttractionMatrix,
    store: ParticleStore,
    params: SimulationParams,
    friction: f32,
    seed: Option<u64>,
    frame: u64,
}

impl Simulation {
    /// Random simulation with `particle_count` particles of `type_count` types
    /// and default parameters
    pub fn init(particle_count: usize, type_count: usize, seed: Option<u64>) -> Result<Self> {
        Self::new(&SimulationConfig {
            particle_count,
            type_count,
            seed,
            ..Default::default()
        })
    }

    /// Random simulation from a full configuration.
    ///
    /// A single RNG draws the matrix, then every type, then every position,
    /// so the seed reproduces the whole initial state.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        let matrix = AttractionMatrix::generate(config.type_count, &mut rng)?;

        let types: Vec<u32> = (0..config.particle_count)
            .map(|_| rng.random_range(0..config.type_count as u32))
            .collect();

        let positions: Vec<[f32; 3]> = (0..config.particle_count)
            .map(|_| {
                [
                    rng.random_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
                    rng.random_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
                    rng.random_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
                ]
            })
            .collect();

        let mut simulation = Self::from_parts(matrix, types, positions, config.params)?;
        simulation.seed = Some(seed);
        log::info!("  Seed: {seed}");
        Ok(simulation)
    }

    /// Simulation from explicit state, for fixed scenes and tests
    pub fn from_parts(
        matrix: AttractionMatrix,
        types: Vec<u32>,
        positions: Vec<[f32; 3]>,
        params: SimulationParams,
    ) -> Result<Self> {
        params.validate()?;
        let store =
            ParticleStore::new(types, positions, matrix.type_count(), params.integration)?;

        log::info!(
            "✓ Initialized {} particles of {} types ({:?} velocity)",
            store.len(),
            matrix.type_count(),
            params.integration
        );
        for a in 0..matrix.type_count() {
            log::debug!("  attraction[{a}] = {:?}", matrix.row(a));
        }

        Ok(Self {
            matrix,
            store,
            params,
            friction: params.friction_factor(),
            seed: None,
            frame: 0,
        })
    }

    /// Advance one fixed tick.
    ///
    /// First pass: accumulate forces and apply friction and impulse to each
    /// velocity, in index order. Second pass: advance positions by velocity
    /// and wrap.
    pub fn step(&mut self) {
        let dt = self.params.dt;
        let scale = self.params.r_max * self.params.force_factor;

        for i in 0..self.store.len() {
            let acc = self.acceleration_on(i) * scale;
            let velocity = self.store.velocity(i) * self.friction + acc * dt;
            self.store.set_velocity(i, velocity);
        }

        let wrap = self.params.wrap;
        for i in 0..self.store.len() {
            let advanced = self.store.position(i) + self.store.velocity(i) * dt;
            let wrapped = advanced.to_array().map(|x| wrap.wrap(x));
            self.store.set_position(i, Vec3::from_array(wrapped));
        }

        self.frame += 1;
        log::trace!("frame {} stepped", self.frame);
    }

    /// Sum of kernel accelerations on particle `i` from the current buffer, unscaled
    fn acceleration_on(&self, i: usize) -> Vec3 {
        let position = self.store.position(i);
        let row = self.matrix.row(self.store.particle_type(i));
        let r_max = self.params.r_max;

        self.store
            .positions()
            .iter()
            .zip(self.store.types())
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(Vec3::ZERO, |acc, (_, (other, &ty))| {
                let other = Vec3::from_array(*other);
                acc + pair_acceleration(position, other, r_max, row[ty as usize])
            })
    }

    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    pub fn type_count(&self) -> usize {
        self.matrix.type_count()
    }

    pub fn matrix(&self) -> &AttractionMatrix {
        &self.matrix
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn integration(&self) -> IntegrationMode {
        self.params.integration
    }

    /// Seed the initial state was drawn from. `None` for hand-built simulations
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of completed steps
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// `3n` floats, `(x, y, z)` per particle, updated by every step
    pub fn position_buffer(&self) -> &[f32] {
        self.store.position_buffer()
    }

    /// `3n` floats, fixed after construction
    pub fn color_buffer(&self) -> &[f32] {
        self.store.color_buffer()
    }

    pub fn position_bytes(&self) -> &[u8] {
        self.store.position_bytes()
    }

    pub fn color_bytes(&self) -> &[u8] {
        self.store.color_bytes()
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats::collect(&self.store, self.frame)
    }
}
