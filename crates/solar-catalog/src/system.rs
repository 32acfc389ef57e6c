//! Assembly of a ready-to-step solar system.

use log::debug;
use nalgebra::{Point3, Vector3};
use nbody::BodyRegistry;
use units::{Length, Velocity};

use crate::catalog::SOLAR_SYSTEM;
use crate::error::CatalogError;
use crate::provider::EphemerisSource;

/// Builds a registry containing every catalog body.
///
/// The Sun is pinned stationary at the origin with zero velocity (it is
/// the frame, not a participant in integration); each planet gets its
/// state vector from `source`, converted from the Horizons conventions
/// (AU, AU/day) to the SI units the core integrates in.
///
/// # Errors
///
/// Propagates source failures and any core rejection (the catalog data
/// itself always passes validation).
///
/// # Examples
///
/// ```
/// use solar_catalog::{assemble, CircularOrbitSource};
///
/// let registry = assemble(&CircularOrbitSource::new()).unwrap();
/// assert_eq!(registry.len(), 9);
/// assert!(registry.get("Sun").unwrap().is_stationary());
/// ```
pub fn assemble(source: &dyn EphemerisSource) -> Result<BodyRegistry, CatalogError> {
    let mut registry = BodyRegistry::new();

    for constants in SOLAR_SYSTEM {
        if constants.horizons_id.is_none() {
            // Frame origin, pinned
            registry.create(
                constants.name,
                constants.mass_kg,
                Point3::origin(),
                Vector3::zeros(),
                constants.radius_m,
                true,
            )?;
            continue;
        }

        debug!("loading state vectors for {}", constants.name);
        let state = source.state_vector(constants)?;

        let position = Point3::from(state.position_au.map(|c| Length::from_au(c).to_meters()));
        let velocity = state
            .velocity_au_per_day
            .map(|c| Velocity::from_au_per_day(c).to_meters_per_sec());

        registry.create(
            constants.name,
            constants.mass_kg,
            position,
            velocity,
            constants.radius_m,
            false,
        )?;
    }

    Ok(registry)
}
