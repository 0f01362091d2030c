//! Tick lifecycle for the drift pipeline.

use crate::position_integrator;
use crate::transforms::TransformAccess;
use crate::velocity_field::VelocityField;
use glam::Vec3;
use particle_dynamics::{Result, SimError, SimParams};

/// Lifecycle states of a [`DriftSimulation`].
///
/// `Ticking` is only ever observable from inside a tick (the simulation is
/// exclusively borrowed for its duration); it exists so a tick that panics
/// mid-flight leaves the simulation unusable instead of half-updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Uninitialized,
    Ready,
    Ticking,
    Disposed,
}

/// Owns the two-stage pipeline and sequences it: velocity update, join,
/// position integration, join. At most one tick is ever in flight.
pub struct DriftSimulation {
    params: SimParams,
    state: SimState,
    field: Option<VelocityField>,
    ticks: u64,
}

impl DriftSimulation {
    /// Validate the configuration. No buffer is allocated until [`start`].
    ///
    /// [`start`]: DriftSimulation::start
    pub fn new(params: SimParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            state: SimState::Uninitialized,
            field: None,
            ticks: 0,
        })
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// Completed ticks since start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Allocate the zero-filled velocity buffer and bind the position store.
    ///
    /// Fails without allocating anything further if the store length does
    /// not match the configured particle count; a failed start leaves no
    /// buffer behind.
    pub fn start<T>(&mut self, transforms: &T) -> Result<()>
    where
        T: TransformAccess + ?Sized,
    {
        if self.state != SimState::Uninitialized {
            return Err(SimError::Precondition(format!(
                "start requires an uninitialized simulation, state is {:?}",
                self.state
            )));
        }
        if transforms.len() != self.params.particle_count {
            return Err(SimError::Config(format!(
                "position store holds {} slots but {} particles are configured",
                transforms.len(),
                self.params.particle_count
            )));
        }

        self.field = Some(VelocityField::new(&self.params)?);
        self.state = SimState::Ready;
        log::info!(
            "simulation started: {} particles, velocity buffer allocated",
            self.params.particle_count
        );
        Ok(())
    }

    /// Run one tick: velocity update, then position integration, each fanned
    /// out over the worker pool.
    ///
    /// The integration stage starts only after the velocity stage has fully
    /// joined (it reads the buffer the field just wrote), and this call
    /// returns only after the integration stage has joined too. Once it
    /// returns, the updated positions are safe to read and the next tick may
    /// be scheduled.
    pub fn tick<T>(&mut self, dt: f32, transforms: &mut T) -> Result<()>
    where
        T: TransformAccess + ?Sized,
    {
        if self.state != SimState::Ready {
            return Err(SimError::Precondition(format!(
                "tick requires a started simulation, state is {:?}",
                self.state
            )));
        }
        // Also rejects NaN.
        if !(dt >= 0.0) {
            return Err(SimError::Precondition(format!(
                "dt must be non-negative, got {dt}"
            )));
        }
        if transforms.len() != self.params.particle_count {
            return Err(SimError::Precondition(format!(
                "position store shrank or grew mid-run: {} slots for {} particles",
                transforms.len(),
                self.params.particle_count
            )));
        }
        let Some(field) = self.field.as_mut() else {
            return Err(SimError::Precondition(
                "velocity buffer missing despite ready state".to_string(),
            ));
        };

        self.state = SimState::Ticking;
        field.update(dt);
        position_integrator::integrate(dt, field.velocities(), transforms);
        self.state = SimState::Ready;
        self.ticks += 1;
        Ok(())
    }

    /// Release the velocity buffer. Idempotent: repeated stops are no-ops.
    ///
    /// A stop can never observe a tick in flight: [`tick`] holds the
    /// exclusive borrow until both stages have joined. Dropping the
    /// simulation without calling stop releases the buffer the same way.
    ///
    /// [`tick`]: DriftSimulation::tick
    pub fn stop(&mut self) {
        if self.state == SimState::Disposed {
            return;
        }
        if self.field.take().is_some() {
            log::info!("simulation stopped after {} ticks, buffer released", self.ticks);
        }
        self.state = SimState::Disposed;
    }

    /// Read-only view of the velocity buffer, available while started.
    pub fn velocities(&self) -> Option<&[Vec3]> {
        self.field.as_ref().map(VelocityField::velocities)
    }
}
