//! The initial-condition seam.
//!
//! Real deployments query an ephemeris service (JPL Horizons) for each
//! body's heliocentric state vector at a chosen epoch; the core only
//! needs the resulting numbers. [`EphemerisSource`] abstracts that
//! provider in Horizons' own conventions (AU and AU/day), and
//! [`CircularOrbitSource`] is the built-in deterministic implementation
//! used when no ephemeris backend is wired up.

use nalgebra::Vector3;

use crate::catalog::{sun, BodyConstants};
use crate::error::CatalogError;

/// Heliocentric state vector in the Horizons vector-table convention
#[derive(Debug, Clone, Copy)]
pub struct StateVector {
    /// AU
    pub position_au: Vector3<f64>,
    /// AU/day
    pub velocity_au_per_day: Vector3<f64>,
}

/// Supplies one body's initial state.
///
/// Implementations are black boxes to the simulation: an HTTP Horizons
/// client, a baked-in dataset, or the synthetic [`CircularOrbitSource`]
/// all look the same from [`crate::assemble`]'s side.
pub trait EphemerisSource {
    /// State vector for a catalog body.
    ///
    /// # Errors
    ///
    /// `CatalogError::Source` when no state can be produced for this
    /// body (unreachable service, body outside the source's coverage).
    fn state_vector(&self, body: &BodyConstants) -> Result<StateVector, CatalogError>;
}

/// Synthesizes coplanar circular orbits from catalog semi-major axes.
///
/// Each planet starts on the +x axis at its mean orbital radius with the
/// circular Kepler speed `sqrt(G·M_sun / r)` along +y. Not a real epoch
/// — every planet is "aligned" — but deterministic, physically
/// consistent, and good enough to exercise the full pipeline without a
/// network.
pub struct CircularOrbitSource {
    g: f64,
    central_mass_kg: f64,
}

impl CircularOrbitSource {
    /// Circular orbits around the catalog Sun with the CODATA constant
    pub fn new() -> Self {
        Self {
            g: nbody::forces::G_SI,
            central_mass_kg: sun().mass_kg,
        }
    }

    /// Circular orbits around an arbitrary central mass
    pub fn around(g: f64, central_mass_kg: f64) -> Self {
        Self { g, central_mass_kg }
    }
}

impl Default for CircularOrbitSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EphemerisSource for CircularOrbitSource {
    fn state_vector(&self, body: &BodyConstants) -> Result<StateVector, CatalogError> {
        if body.semi_major_axis_au <= 0.0 {
            return Err(CatalogError::Source {
                body: body.name.to_owned(),
                reason: "no orbit to synthesize for the central body".to_owned(),
            });
        }

        let r = units::Length::from_au(body.semi_major_axis_au);
        let speed = (self.g * self.central_mass_kg / r.to_meters()).sqrt();
        let speed_au_day = units::Velocity::from_meters_per_sec(speed).to_au_per_day();

        Ok(StateVector {
            position_au: Vector3::new(body.semi_major_axis_au, 0.0, 0.0),
            velocity_au_per_day: Vector3::new(0.0, speed_au_day, 0.0),
        })
    }
}
