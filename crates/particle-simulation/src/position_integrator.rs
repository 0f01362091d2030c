//! Stage two of the per-tick pipeline: position integration.

use crate::transforms::TransformAccess;
use crate::MIN_BATCH;
use glam::Vec3;
use rayon::prelude::*;

/// Advance every position by `velocity[i] * dt`.
///
/// `velocities` is taken read-only and must be the fully updated buffer for
/// this tick; the owning simulation sequences this call strictly after the
/// velocity stage joins. Positions are paired with velocity slots by index,
/// so no two workers ever touch the same slot.
pub fn integrate<T>(dt: f32, velocities: &[Vec3], transforms: &mut T)
where
    T: TransformAccess + ?Sized,
{
    let positions = transforms.positions_mut();
    debug_assert_eq!(positions.len(), velocities.len());

    positions
        .par_iter_mut()
        .with_min_len(MIN_BATCH)
        .zip(velocities.par_iter())
        .for_each(|(position, velocity)| {
            *position += *velocity * dt;
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::TransformStore;

    #[test]
    fn positions_accumulate_velocity_times_dt() {
        let velocities = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, 0.0, -4.0),
        ];
        let mut store = TransformStore::from_positions(vec![Vec3::ONE; 3]);

        integrate(0.5, &velocities, &mut store);

        assert_eq!(store.position(0), Vec3::new(1.5, 1.0, 1.0));
        assert_eq!(store.position(1), Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(store.position(2), Vec3::new(1.0, 1.0, -1.0));
    }

    #[test]
    fn velocities_are_left_untouched() {
        let velocities = vec![Vec3::new(3.0, 0.0, 0.0); 8];
        let before = velocities.clone();
        let mut store = TransformStore::zeroed(8);

        integrate(1.0, &velocities, &mut store);

        assert_eq!(velocities, before);
    }

    #[test]
    fn empty_set_is_a_no_op() {
        let mut store = TransformStore::zeroed(0);
        integrate(1.0, &[], &mut store);
        assert!(store.is_empty());
    }
}
