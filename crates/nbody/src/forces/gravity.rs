//! Direct O(N²) Newtonian gravity.

use nalgebra::Vector3;

use crate::error::{Error, Result};
use crate::forces::{ForceModel, G_SI};
use crate::registry::BodyRegistry;

/// Direct pairwise Newtonian gravitation.
///
/// Sums F = G·m₁·m₂/r² over every unordered pair. The double loop is
/// O(N²) with no spatial partitioning, which is the right trade at
/// solar-system body counts.
///
/// The gravitational constant is a per-instance field rather than a
/// process-wide constant, so independent simulations can run with
/// different constants (scaled test universes, unit experiments).
///
/// # Examples
///
/// ```
/// use nalgebra::{Point3, Vector3};
/// use nbody::forces::{ForceModel, NewtonianGravity};
/// use nbody::BodyRegistry;
///
/// let mut registry = BodyRegistry::new();
/// registry
///     .create("Sun", 1.989e30, Point3::origin(), Vector3::zeros(), 6.9634e8, true)
///     .unwrap();
/// registry
///     .create(
///         "Earth",
///         5.972e24,
///         Point3::new(1.496e11, 0.0, 0.0),
///         Vector3::new(0.0, 29_780.0, 0.0),
///         6.371e6,
///         false,
///     )
///     .unwrap();
///
/// let gravity = NewtonianGravity::new();
/// let forces = gravity.net_forces(&registry).unwrap();
///
/// // Earth is pulled back toward the Sun
/// assert!(forces[1].x < 0.0);
/// ```
pub struct NewtonianGravity {
    g: f64,
}

impl NewtonianGravity {
    /// Gravity with the CODATA constant [`G_SI`]
    pub fn new() -> Self {
        Self { g: G_SI }
    }

    /// Gravity with an explicit gravitational constant
    pub fn with_constant(g: f64) -> Self {
        Self { g }
    }

    /// The gravitational constant this instance applies
    pub fn constant(&self) -> f64 {
        self.g
    }
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for NewtonianGravity {
    fn net_forces(&self, registry: &BodyRegistry) -> Result<Vec<Vector3<f64>>> {
        let bodies = registry.bodies();
        let mut out = vec![Vector3::zeros(); bodies.len()];

        // Each unordered pair once; Newton's third law fills both rows.
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                // Displacement from i toward j; i is pulled along +r,
                // j along -r.
                let r = bodies[j].position - bodies[i].position;
                let r2 = r.norm_squared();
                if r2 == 0.0 {
                    return Err(Error::DegenerateState {
                        first: bodies[i].name().to_owned(),
                        second: bodies[j].name().to_owned(),
                    });
                }

                // G·m_i·m_j / |r|³ — multiplying by the displacement
                // vector gives magnitude G·m_i·m_j / r² along r̂
                let coef = self.g * bodies[i].mass() * bodies[j].mass() / (r2 * r2.sqrt());
                out[i] += coef * r;
                out[j] -= coef * r;
            }
        }

        Ok(out)
    }

    fn potential_energy(&self, registry: &BodyRegistry) -> f64 {
        let bodies = registry.bodies();
        let mut pe = 0.0;
        // Each pair counted once
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let r = bodies[i].distance_to(&bodies[j]);
                pe -= self.g * bodies[i].mass() * bodies[j].mass() / r;
            }
        }
        pe
    }
}
