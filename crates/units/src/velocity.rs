use crate::length::AU_M;
use crate::time::SECONDS_PER_DAY;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Convert between AU/day and m/s
pub const AU_DAY_TO_M_SEC: f64 = AU_M / SECONDS_PER_DAY;

/// A physical velocity quantity using f64 precision.
///
/// The `Velocity` struct represents speeds with m/s as the base unit.
/// JPL Horizons vector tables report velocities in AU/day, so that
/// conversion sits at the ephemeris boundary.
///
/// # Examples
///
/// ```rust
/// use units::Velocity;
///
/// // Earth's mean orbital speed, ~29.78 km/s
/// let earth = Velocity::from_km_per_sec(29.78);
/// let in_au_day = earth.to_au_per_day(); // ~0.0172
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    /// Creates a new `Velocity` from a value in meters per second.
    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Velocity` from a value in kilometers per second.
    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * 1_000.0)
    }

    /// Creates a new `Velocity` from a value in AU per day.
    pub fn from_au_per_day(value: f64) -> Self {
        Self(value * AU_DAY_TO_M_SEC)
    }

    /// Returns the velocity in meters per second.
    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    /// Converts the velocity to kilometers per second.
    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / 1_000.0
    }

    /// Converts the velocity to AU per day.
    pub fn to_au_per_day(&self) -> f64 {
        self.0 / AU_DAY_TO_M_SEC
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}

/// Division of Velocity by Velocity returns a dimensionless ratio
impl Div for Velocity {
    type Output = f64;

    fn div(self, rhs: Velocity) -> f64 {
        self.0 / rhs.0
    }
}
