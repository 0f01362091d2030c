//! Run configuration for the drift pipeline.

use crate::error::{Result, SimError};
use glam::Vec3;

/// Immutable per-run configuration. Set once at construction, never mutated
/// during ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Number of particles; fixed for the lifetime of the run. Zero is a
    /// permitted degenerate run where every stage is a no-op.
    pub particle_count: usize,

    /// Radius of the initial placement sphere. Affects initial positions
    /// only, never the dynamics.
    pub placement_radius: f32,

    /// Base acceleration applied to every particle.
    pub acceleration: Vec3,

    /// Additional acceleration per particle index. The raw integer index
    /// scales this vector, so higher-index particles drift faster and the
    /// cloud fans out into layers.
    pub acceleration_mod: Vec3,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            particle_count: 10_000,
            placement_radius: 10.0,
            acceleration: Vec3::new(0.0002, 0.0001, 0.0002),
            acceleration_mod: Vec3::new(0.0001, 0.0001, 0.0001),
        }
    }
}

impl SimParams {
    /// Reject malformed values before any buffer is allocated.
    pub fn validate(&self) -> Result<()> {
        if !self.placement_radius.is_finite() || self.placement_radius < 0.0 {
            return Err(SimError::Config(format!(
                "placement radius must be a non-negative finite value, got {}",
                self.placement_radius
            )));
        }
        if !self.acceleration.is_finite() {
            return Err(SimError::Config(format!(
                "acceleration must be finite, got {}",
                self.acceleration
            )));
        }
        if !self.acceleration_mod.is_finite() {
            return Err(SimError::Config(format!(
                "acceleration modifier must be finite, got {}",
                self.acceleration_mod
            )));
        }
        Ok(())
    }

    /// Acceleration applied to the particle at `index`:
    /// `acceleration + index * acceleration_mod`.
    pub fn acceleration_for(&self, index: usize) -> Vec3 {
        self.acceleration + index as f32 * self.acceleration_mod
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        SimParams::default().validate().expect("defaults are valid");
    }

    #[test]
    fn negative_radius_is_rejected() {
        let params = SimParams {
            placement_radius: -1.0,
            ..SimParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn non_finite_acceleration_is_rejected() {
        let params = SimParams {
            acceleration: Vec3::new(f32::NAN, 0.0, 0.0),
            ..SimParams::default()
        };
        assert!(params.validate().is_err());

        let params = SimParams {
            acceleration_mod: Vec3::new(0.0, f32::INFINITY, 0.0),
            ..SimParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn acceleration_scales_with_raw_index() {
        let params = SimParams {
            acceleration: Vec3::new(1.0, 0.0, 0.0),
            acceleration_mod: Vec3::new(0.1, 0.0, 0.0),
            ..SimParams::default()
        };

        assert_eq!(params.acceleration_for(0), Vec3::new(1.0, 0.0, 0.0));
        // Index 10 contributes ten full modifier vectors, not 10/N of one.
        let expected = Vec3::new(1.0, 0.0, 0.0) + 10.0 * Vec3::new(0.1, 0.0, 0.0);
        assert_eq!(params.acceleration_for(10), expected);
    }
}
