//! Force models for the N-body core.
//!
//! A [`ForceModel`] produces the net force on every body at once, indexed
//! like the registry's storage. Whole-buffer evaluation is what lets the
//! integrator guarantee synchronous updates: every force is computed from
//! start-of-tick positions before any position is written.

use nalgebra::Vector3;

use crate::error::Result;
use crate::registry::BodyRegistry;

pub mod gravity;


pub use gravity::NewtonianGravity;

/// CODATA gravitational constant in m³ kg⁻¹ s⁻²
pub const G_SI: f64 = 6.67430e-11;

/// A source of net force on bodies in an N-body system.
pub trait ForceModel: Send + Sync {
    /// Net force in newtons on every body, indexed like
    /// `registry.bodies()`.
    ///
    /// The buffer is computed entirely from the registry state as passed
    /// in; an error means no usable forces exist for this tick and the
    /// caller must not mutate anything.
    fn net_forces(&self, registry: &BodyRegistry) -> Result<Vec<Vector3<f64>>>;

    /// Potential energy diagnostic in joules (optional).
    ///
    /// Default implementation returns 0.0. Only meaningful on states the
    /// force model accepts; `net_forces` rejects degenerate geometry
    /// before any step proceeds.
    fn potential_energy(&self, _registry: &BodyRegistry) -> f64 {
        0.0
    }
}
