//! Fixed-size velocity storage.

use crate::error::{Result, SimError};
use glam::Vec3;

/// Per-particle velocity slots: allocated once, zero-filled, never resized.
///
/// Slot `i` belongs to particle `i` for the lifetime of the run. The field
/// stage is the only writer; the integration stage gets a read-only view.
#[derive(Debug)]
pub struct VelocityBuffer {
    slots: Vec<Vec3>,
}

impl VelocityBuffer {
    /// Allocate `count` zero-filled slots, failing instead of aborting when
    /// the backing allocation cannot be made.
    pub fn zeroed(count: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(count)
            .map_err(|source| SimError::Allocation { count, source })?;
        slots.resize(count, Vec3::ZERO);
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.slots
    }

    pub fn as_mut_slice(&mut self) -> &mut [Vec3] {
        &mut self.slots
    }
}
