//! Gravitational N-body core.
//!
//! Holds the fixed set of simulated bodies ([`BodyRegistry`]), computes
//! mutual Newtonian gravitation ([`forces::NewtonianGravity`]), and
//! advances the system tick by tick ([`integrator::SemiImplicitEuler`]).
//! All state is SI: meters, kilograms, seconds.
//!
//! The crate is pure computation: no I/O, no logging, no clock other than
//! the simulated one. Drivers pace the loop, read state through
//! [`BodyRegistry::snapshot`] or name lookup, and hook rendering through
//! [`StepObserver`] after each successful step.

pub mod body;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod registry;
pub mod snapshot;

#[cfg(test)]
mod body_test;

pub use body::{Body, BodyHandle};
pub use error::{Error, Result};
pub use registry::BodyRegistry;
pub use snapshot::{BodySnapshot, StepObserver};
