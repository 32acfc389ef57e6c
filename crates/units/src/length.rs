use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// One astronomical unit in meters (IAU 2012 definition)
pub const AU_M: f64 = 1.495978707e11;

/// Meters per kilometer
const KM_TO_M: f64 = 1_000.0;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents distances with meters as the base unit.
/// Ephemeris services report heliocentric positions in astronomical units,
/// so the AU conversion is the one used at the system boundary.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth_orbit = Length::from_au(1.0);
/// let meters = earth_orbit.to_meters(); // ~1.496e11
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    /// Creates a new `Length` from a value in astronomical units.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Length;
    ///
    /// let mercury = Length::from_au(0.387);
    /// let neptune = Length::from_au(30.069);
    /// ```
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_M)
    }

    /// Returns the length in meters.
    pub fn to_meters(&self) -> f64 {
        self.0
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 / KM_TO_M
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 / AU_M
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
