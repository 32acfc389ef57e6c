use std::collections::HashMap;

use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyHandle};
use crate::error::{Error, Result};
use crate::snapshot::BodySnapshot;

/// Authoritative store for the fixed set of simulated bodies.
///
/// Bodies are kept in insertion order in a dense `Vec`; a name index
/// supports driver-side lookup. The registry exclusively owns the
/// collection — integrators borrow it for the duration of a tick and keep
/// no state of their own across ticks. There is no removal: the body set
/// is fixed for the lifetime of a run.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    names: HashMap<String, BodyHandle>,
    time: f64, // simulated seconds since assembly
}

impl BodyRegistry {
    /// Creates an empty registry at simulation time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a body and registers it.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique identifier within this run
    /// * `mass` - kg, must be strictly positive and finite
    /// * `position` - Meters
    /// * `velocity` - m/s
    /// * `radius` - Meters, display sizing only
    /// * `stationary` - Pin the body: integrators never move it, but it
    ///   still acts as a force source
    ///
    /// # Errors
    ///
    /// `Error::InvalidParameter` if the mass is not strictly positive or
    /// the name is already registered.
    pub fn create(
        &mut self,
        name: &str,
        mass: f64,
        position: Point3<f64>,
        velocity: Vector3<f64>,
        radius: f64,
        stationary: bool,
    ) -> Result<BodyHandle> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "body '{name}' must have positive finite mass, got {mass}"
            )));
        }
        if self.names.contains_key(name) {
            return Err(Error::InvalidParameter(format!(
                "body name '{name}' is already registered"
            )));
        }

        let handle = BodyHandle(self.bodies.len());
        self.bodies.push(Body {
            name: name.to_owned(),
            mass,
            radius,
            stationary,
            position,
            velocity,
        });
        self.names.insert(name.to_owned(), handle);
        Ok(handle)
    }

    /// All bodies in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable view for integrators.
    ///
    /// Slices can't grow or shrink, so the fixed-set invariant holds;
    /// mass, name, and the stationary flag stay immutable through `Body`'s
    /// field visibility.
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Iterates bodies with their handles, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyHandle(i), b))
    }

    /// Resolves a name to its handle
    ///
    /// # Errors
    ///
    /// `Error::BodyNotFound` if no body has this name.
    pub fn handle(&self, name: &str) -> Result<BodyHandle> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| Error::BodyNotFound(name.to_owned()))
    }

    /// Looks a body up by name
    ///
    /// # Errors
    ///
    /// `Error::BodyNotFound` if no body has this name.
    pub fn get(&self, name: &str) -> Result<&Body> {
        self.handle(name).map(|h| &self.bodies[h.0])
    }

    /// Direct indexed access; handles come from `create`, `handle`, or `iter`
    pub fn body(&self, handle: BodyHandle) -> &Body {
        &self.bodies[handle.0]
    }

    /// Number of registered bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Simulated seconds elapsed since assembly.
    ///
    /// Advanced by integrators on successful steps only; a failed step
    /// leaves the clock untouched along with all body state.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advances the simulation clock; called by integrators after a
    /// fully applied tick.
    pub fn advance_clock(&mut self, dt: f64) {
        self.time += dt;
    }

    /// Serializable read view of every body, for renderers and loggers
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(BodySnapshot::of).collect()
    }

    /// Total kinetic energy in joules
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Total linear momentum in kg·m/s
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }

    /// Total angular momentum about the origin in kg·m²/s
    pub fn total_angular_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.specific_angular_momentum() * b.mass())
            .fold(Vector3::zeros(), |acc, l| acc + l)
    }
}
