//! Minimal driver loop: assemble the catalog system, tick it one
//! simulated day at a time, and print Earth's position once per month.
//!
//! Run with `RUST_LOG=debug` to see the assembly progress lines.

use nbody::forces::NewtonianGravity;
use nbody::integrator::{Integrator, SemiImplicitEuler};
use solar_catalog::{assemble, CircularOrbitSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut registry = assemble(&CircularOrbitSource::new())?;
    let gravity = NewtonianGravity::new();
    let integrator = SemiImplicitEuler;

    let dt = 86_400.0; // one simulated day per tick
    for month in 1..=12 {
        integrator.integrate(&mut registry, dt, 30, &gravity)?;

        let earth = registry.get("Earth")?;
        println!(
            "month {month:2}: Earth at [{:+.3e}, {:+.3e}, {:+.3e}] m",
            earth.position.x, earth.position.y, earth.position.z
        );
    }

    Ok(())
}
