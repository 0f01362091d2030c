//! Stage one of the per-tick pipeline: the velocity update.

use crate::MIN_BATCH;
use glam::Vec3;
use particle_dynamics::{Result, SimParams, VelocityBuffer};
use rayon::prelude::*;

/// Owns the per-particle velocity buffer and applies the acceleration rule
/// to every slot each tick.
pub struct VelocityField {
    acceleration: Vec3,
    acceleration_mod: Vec3,
    velocities: VelocityBuffer,
}

impl VelocityField {
    /// Allocate a zero-filled buffer sized to the configured particle count.
    pub fn new(params: &SimParams) -> Result<Self> {
        Ok(Self {
            acceleration: params.acceleration,
            acceleration_mod: params.acceleration_mod,
            velocities: VelocityBuffer::zeroed(params.particle_count)?,
        })
    }

    pub fn len(&self) -> usize {
        self.velocities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }

    /// Apply `velocity[i] += (acceleration + i * acceleration_mod) * dt` to
    /// every slot.
    ///
    /// Each slot is written only by its own index, so the range is fanned
    /// out across the worker pool in batches and joined before returning.
    /// The raw index (not a normalized fraction) scales the modifier, which
    /// layers the drift by particle identity.
    pub fn update(&mut self, dt: f32) {
        let acceleration = self.acceleration;
        let acceleration_mod = self.acceleration_mod;

        self.velocities
            .as_mut_slice()
            .par_iter_mut()
            .with_min_len(MIN_BATCH)
            .enumerate()
            .for_each(|(i, velocity)| {
                *velocity += (acceleration + i as f32 * acceleration_mod) * dt;
            });
    }

    /// Read-only view for the integration stage.
    pub fn velocities(&self) -> &[Vec3] {
        self.velocities.as_slice()
    }
}
