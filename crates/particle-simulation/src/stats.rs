//! Cheap per-frame summaries for logging

use crate::ParticleStore;
use glam::Vec3;

/// Aggregate view of the particle cloud at one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub centroid: Vec3,
    pub min: Vec3,
    pub max: Vec3,
    /// Mean length of the velocity state. Under aliasing this is the mean
    /// distance from the origin, see [`FrameStats::velocity_label`].
    pub mean_speed: f32,
    /// Whether the velocity state shares position storage
    pub aliased: bool,
}

impl FrameStats {
    pub fn collect(store: &ParticleStore, frame: u64) -> Self {
        let n = store.len();
        let mut sum = Vec3::ZERO;
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut speed = 0.0;

        for i in 0..n {
            let p = store.position(i);
            sum += p;
            min = min.min(p);
            max = max.max(p);
            speed += store.velocity(i).length();
        }

        let count = n.max(1) as f32;
        Self {
            frame,
            centroid: sum / count,
            min,
            max,
            mean_speed: speed / count,
            aliased: store.is_aliased(),
        }
    }

    /// What `mean_speed` actually measures, for log lines
    pub fn velocity_label(&self) -> &'static str {
        if self.aliased {
            "mean |x|"
        } else {
            "mean |v|"
        }
    }

    /// Largest extent of the bounding box
    pub fn extent(&self) -> f32 {
        (self.max - self.min).max_element()
    }
}
