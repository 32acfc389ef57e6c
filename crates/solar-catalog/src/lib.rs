//! Initial conditions for the solar-system simulation.
//!
//! The N-body core is agnostic to where its starting state comes from;
//! this crate is that external collaborator. It carries the static
//! physical catalog (masses, radii, display metadata, JPL Horizons
//! identifiers), the [`EphemerisSource`] seam a real ephemeris client
//! would implement, a deterministic built-in [`CircularOrbitSource`],
//! and [`assemble`], which turns a source into a ready-to-step
//! [`nbody::BodyRegistry`] with the Sun pinned at the origin.

pub mod catalog;
pub mod error;
pub mod provider;
pub mod system;

#[cfg(test)]
mod catalog_test;

pub use catalog::{constants_for, BodyConstants, Color, SOLAR_SYSTEM};
pub use error::CatalogError;
pub use provider::{CircularOrbitSource, EphemerisSource, StateVector};
pub use system::assemble;
