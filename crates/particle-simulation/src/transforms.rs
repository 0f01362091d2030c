//! Access to externally owned particle positions.

use glam::Vec3;

/// Capability handed to the simulation for reading and writing particle
/// positions by index.
///
/// The store is owned by the placement/rendering side, which must keep one
/// slot per particle (in particle-index order) alive and un-shared for the
/// simulation's lifetime. The bulk views are what the parallel integration
/// stage works over; the indexed accessors are conveniences on top of them.
pub trait TransformAccess {
    fn positions(&self) -> &[Vec3];

    fn positions_mut(&mut self) -> &mut [Vec3];

    fn len(&self) -> usize {
        self.positions().len()
    }

    fn is_empty(&self) -> bool {
        self.positions().is_empty()
    }

    fn position(&self, index: usize) -> Vec3 {
        self.positions()[index]
    }

    fn set_position(&mut self, index: usize, position: Vec3) {
        self.positions_mut()[index] = position;
    }
}

/// Owned position store, the default backing for headless runs and tests.
#[derive(Debug, Clone)]
pub struct TransformStore {
    positions: Vec<Vec3>,
}

impl TransformStore {
    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    pub fn zeroed(count: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; count],
        }
    }
}

impl TransformAccess for TransformStore {
    fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_accessors_follow_the_bulk_view() {
        let mut store = TransformStore::zeroed(3);
        store.set_position(1, Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(store.len(), 3);
        assert_eq!(store.position(1), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(store.positions()[0], Vec3::ZERO);
    }
}
