//! Read-only views for drivers and renderers.

use serde::Serialize;

use crate::body::Body;
use crate::registry::BodyRegistry;

/// One body's state at a point in time, detached from the registry.
///
/// Plain arrays rather than nalgebra types so the snapshot serializes
/// cleanly for whatever display or logging layer consumes it.
#[derive(Debug, Clone, Serialize)]
pub struct BodySnapshot {
    pub name: String,
    /// Meters
    pub position: [f64; 3],
    /// m/s
    pub velocity: [f64; 3],
    /// Meters, display sizing
    pub radius: f64,
}

impl BodySnapshot {
    pub(crate) fn of(body: &Body) -> Self {
        Self {
            name: body.name().to_owned(),
            position: body.position.coords.into(),
            velocity: body.velocity.into(),
            radius: body.radius(),
        }
    }
}

/// Driver-side hook for reacting to completed ticks.
///
/// The core never invokes observers itself — presentation stays outside
/// the simulation loop. A typical driver runs
/// `integrator.step(&mut registry, dt, &force)?` and then
/// `observer.after_step(&registry)`.
pub trait StepObserver {
    fn after_step(&mut self, registry: &BodyRegistry);
}
