//! Initial particle placement.

use glam::Vec3;
use rand::Rng;

/// Uniformly sample `count` points inside a sphere of `radius`.
///
/// Direction comes from a random azimuth and cosine-of-inclination; the
/// cube-root radius scaling keeps the distribution uniform by volume rather
/// than clustering toward the center.
pub fn scatter_in_sphere<R: Rng>(rng: &mut R, count: usize, radius: f32) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(count);

    for _ in 0..count {
        let theta = rng.random::<f32>() * std::f32::consts::TAU;
        let cos_phi = rng.random::<f32>() * 2.0 - 1.0;
        let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
        let r = rng.random::<f32>().powf(1.0 / 3.0) * radius;

        positions.push(Vec3::new(
            r * sin_phi * theta.cos(),
            r * sin_phi * theta.sin(),
            r * cos_phi,
        ));
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_inside_the_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        let radius = 10.0;
        let positions = scatter_in_sphere(&mut rng, 1000, radius);

        assert_eq!(positions.len(), 1000);
        for p in &positions {
            assert!(
                p.length() <= radius * 1.0001,
                "sample {p} escaped the placement sphere"
            );
        }
    }

    #[test]
    fn zero_radius_collapses_to_the_origin() {
        let mut rng = StdRng::seed_from_u64(7);
        let positions = scatter_in_sphere(&mut rng, 10, 0.0);
        assert!(positions.iter().all(|p| *p == Vec3::ZERO));
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let a = scatter_in_sphere(&mut StdRng::seed_from_u64(42), 64, 5.0);
        let b = scatter_in_sphere(&mut StdRng::seed_from_u64(42), 64, 5.0);
        assert_eq!(a, b);
    }
}
