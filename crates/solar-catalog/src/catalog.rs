//! Static physical constants for the nine modeled bodies.
//!
//! Masses and radii are the values the simulation actually integrates
//! with; colors and radii double as display metadata for whatever
//! renderer a driver attaches. Horizons identifiers are the JPL
//! designators an ephemeris-backed [`crate::EphemerisSource`] would
//! query (`"399"` is Earth); the Sun has none because it is the origin
//! of the heliocentric frame.

use serde::Serialize;

/// Display color as RGB components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Static physical data for one catalog body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BodyConstants {
    pub name: &'static str,
    /// kg
    pub mass_kg: f64,
    /// Meters; display sizing only, no collision effect
    pub radius_m: f64,
    /// Mean orbital radius in AU; 0 for the Sun
    pub semi_major_axis_au: f64,
    /// JPL Horizons designator; `None` for the Sun
    pub horizons_id: Option<&'static str>,
    pub color: Color,
}

/// The Sun and the eight planets, in heliocentric distance order.
///
/// The Sun comes first so assembly pins the frame origin before any
/// planet is placed.
pub const SOLAR_SYSTEM: &[BodyConstants] = &[
    BodyConstants {
        name: "Sun",
        mass_kg: 1.989e30,
        radius_m: 6.9634e7,
        semi_major_axis_au: 0.0,
        horizons_id: None,
        color: Color::rgb(1.0, 1.0, 0.0),
    },
    BodyConstants {
        name: "Mercury",
        mass_kg: 3.301e23,
        radius_m: 2.44e6,
        semi_major_axis_au: 0.387,
        horizons_id: Some("199"),
        color: Color::rgb(0.5, 0.5, 0.5),
    },
    BodyConstants {
        name: "Venus",
        mass_kg: 4.867e24,
        radius_m: 6.051e6,
        semi_major_axis_au: 0.723,
        horizons_id: Some("299"),
        color: Color::rgb(1.0, 0.6, 0.0),
    },
    BodyConstants {
        name: "Earth",
        mass_kg: 5.972e24,
        radius_m: 6.371e6,
        semi_major_axis_au: 1.0,
        horizons_id: Some("399"),
        color: Color::rgb(0.0, 0.0, 1.0),
    },
    BodyConstants {
        name: "Mars",
        mass_kg: 6.417e23,
        radius_m: 3.389e6,
        semi_major_axis_au: 1.524,
        horizons_id: Some("499"),
        color: Color::rgb(1.0, 0.0, 0.0),
    },
    BodyConstants {
        name: "Jupiter",
        mass_kg: 1.898e27,
        radius_m: 6.9911e7,
        semi_major_axis_au: 5.203,
        horizons_id: Some("599"),
        color: Color::rgb(1.0, 0.6, 0.0),
    },
    BodyConstants {
        name: "Saturn",
        mass_kg: 5.683e26,
        radius_m: 5.8232e7,
        semi_major_axis_au: 9.537,
        horizons_id: Some("699"),
        color: Color::rgb(1.0, 1.0, 0.0),
    },
    BodyConstants {
        name: "Uranus",
        mass_kg: 8.681e25,
        radius_m: 2.5362e7,
        semi_major_axis_au: 19.191,
        horizons_id: Some("799"),
        color: Color::rgb(0.0, 1.0, 1.0),
    },
    BodyConstants {
        name: "Neptune",
        mass_kg: 1.024e26,
        radius_m: 2.4622e7,
        semi_major_axis_au: 30.069,
        horizons_id: Some("899"),
        color: Color::rgb(0.4, 0.2, 0.6),
    },
];

/// Looks up a catalog entry by name
pub fn constants_for(name: &str) -> Option<&'static BodyConstants> {
    SOLAR_SYSTEM.iter().find(|c| c.name == name)
}

/// The central body (first catalog row)
pub fn sun() -> &'static BodyConstants {
    &SOLAR_SYSTEM[0]
}
