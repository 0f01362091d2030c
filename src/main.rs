//! Layered Particle Drift
//!
//! Scatters particles in a sphere and advances them with an index-biased
//! acceleration rule, two parallel stages per tick.

use particle_dynamics::SimParams;
use particle_simulation::{scatter_in_sphere, DriftSimulation, TransformAccess, TransformStore};
use std::time::Instant;

const TICKS: u64 = 600;
const DT: f32 = 1.0 / 60.0;
const PROBE_INTERVAL: u64 = 120;

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = SimParams::default();
    log::info!(
        "Starting drift simulation: {} particles in a {} unit sphere",
        params.particle_count,
        params.placement_radius
    );

    let mut rng = rand::rng();
    let positions = scatter_in_sphere(&mut rng, params.particle_count, params.placement_radius);
    let mut transforms = TransformStore::from_positions(positions);
    log::info!("✓ Placed {} particles", transforms.len());

    let mut sim = match DriftSimulation::new(params) {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = sim.start(&transforms) {
        log::error!("simulation failed to start: {err}");
        std::process::exit(1);
    }

    let started = Instant::now();
    for tick in 1..=TICKS {
        if let Err(err) = sim.tick(DT, &mut transforms) {
            log::error!("tick {tick} failed: {err}");
            break;
        }

        // The highest index drifts fastest, so it makes the best probe.
        if tick % PROBE_INTERVAL == 0 {
            if let Some(&probe) = transforms.positions().last() {
                log::info!("tick {:>4}: last particle at {:.3}", tick, probe);
            }
        }
    }

    let elapsed = started.elapsed();
    let per_second = sim.ticks() as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    log::info!(
        "✓ {} ticks over {} particles in {:.2?} ({:.0} ticks/s)",
        sim.ticks(),
        params.particle_count,
        elapsed,
        per_second
    );

    sim.stop();
}
