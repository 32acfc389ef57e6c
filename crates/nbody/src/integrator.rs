//! Fixed-step time integration.
//!
//! This module provides the [`Integrator`] trait and the semi-implicit
//! Euler scheme the simulator runs on. Integrators borrow the registry for
//! the duration of a tick and retain no state of their own.

use crate::error::{Error, Result};
use crate::forces::ForceModel;
use crate::registry::BodyRegistry;

/// A time integrator for N-body systems.
pub trait Integrator: Send + Sync {
    /// Advance the system by one tick of `dt` simulated seconds.
    ///
    /// Either the whole tick applies or none of it: forces for every body
    /// are computed from start-of-tick positions before any state is
    /// mutated, and an error leaves the registry — clock included —
    /// exactly as it was.
    ///
    /// # Arguments
    ///
    /// * `registry` - Body state, modified in place on success
    /// * `dt` - Timestep in seconds, must be > 0; smaller values reduce
    ///   integration error at the cost of more calls per simulated span
    /// * `force` - Force model evaluated once per tick
    fn step(&self, registry: &mut BodyRegistry, dt: f64, force: &dyn ForceModel) -> Result<()>;

    /// Advance by `n_steps` equal ticks.
    ///
    /// Stops at the first failing tick; completed ticks stay applied.
    ///
    /// # Returns
    ///
    /// The registry clock in seconds after the final tick.
    fn integrate(
        &self,
        registry: &mut BodyRegistry,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> Result<f64> {
        for _ in 0..n_steps {
            self.step(registry, dt, force)?;
        }
        Ok(registry.time())
    }
}

/// Semi-implicit (symplectic-leaning) Euler.
///
/// Per tick, for every non-stationary body:
///
/// 1. `velocity += (net_force / mass) * dt`
/// 2. `position += velocity * dt`
///
/// Velocity is updated fully before the position update uses it. The
/// order matters: swapping to explicit Euler or leapfrog changes every
/// orbit measurably, and for a stationary central mass this scheme
/// conserves angular momentum to machine precision. Stationary bodies
/// are skipped here but participate fully as force sources.
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(&self, registry: &mut BodyRegistry, dt: f64, force: &dyn ForceModel) -> Result<()> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "timestep must be positive and finite, got {dt}"
            )));
        }

        // Phase 1: every net force, from start-of-tick positions. A
        // failure here returns before any body has been touched.
        let forces = force.net_forces(registry)?;

        // Phase 2: kick then drift.
        for (body, net) in registry.bodies_mut().iter_mut().zip(forces.iter()) {
            if body.is_stationary() {
                continue;
            }
            let acceleration = *net / body.mass();
            body.velocity += acceleration * dt;
            body.position += body.velocity * dt;
        }

        registry.advance_clock(dt);
        Ok(())
    }
}
