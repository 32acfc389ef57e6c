use nalgebra::{Point3, Vector3};

/// Dense index of a body within its registry.
///
/// Handles are assigned in insertion order and stay valid for the whole
/// run, since the body set is fixed after assembly. Using indices (rather
/// than opaque ids or references) lets per-body force buffers line up with
/// the registry's storage directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

/// A point mass participating in gravitational simulation.
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) name: String,
    pub(crate) mass: f64,   // kg, immutable after construction
    pub(crate) radius: f64, // meters, display sizing only
    pub(crate) stationary: bool,
    /// Heliocentric Cartesian position in meters
    pub position: Point3<f64>,
    /// Velocity in m/s
    pub velocity: Vector3<f64>,
}

impl Body {
    /// Unique name within the simulation run
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mass in kilograms, strictly positive
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Display radius in meters (no collision effect)
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Stationary bodies are skipped by integrators but still exert force
    pub fn is_stationary(&self) -> bool {
        self.stationary
    }

    /// Linear momentum in kg·m/s
    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    /// Kinetic energy in joules
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    /// Separation distance to another body in meters
    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).norm()
    }

    /// Angular momentum per unit mass about the origin (r × v)
    pub fn specific_angular_momentum(&self) -> Vector3<f64> {
        self.position.coords.cross(&self.velocity)
    }
}
