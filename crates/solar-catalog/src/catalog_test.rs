use std::collections::HashSet;

use crate::catalog::{constants_for, sun, SOLAR_SYSTEM};

#[test]
fn test_nine_bodies_with_unique_names() {
    assert_eq!(SOLAR_SYSTEM.len(), 9);

    let names: HashSet<&str> = SOLAR_SYSTEM.iter().map(|c| c.name).collect();
    assert_eq!(names.len(), 9);
}

#[test]
fn test_sun_is_first_and_central() {
    let sun = sun();

    assert_eq!(sun.name, "Sun");
    assert_eq!(sun.horizons_id, None);
    assert_eq!(sun.semi_major_axis_au, 0.0);
    assert_eq!(sun.mass_kg, 1.989e30);
}

#[test]
fn test_planets_have_horizons_ids_and_orbits() {
    for planet in &SOLAR_SYSTEM[1..] {
        assert!(planet.horizons_id.is_some(), "{} has no Horizons id", planet.name);
        assert!(planet.semi_major_axis_au > 0.0, "{} has no orbit", planet.name);
        assert!(planet.mass_kg > 0.0);
        assert!(planet.radius_m > 0.0);
    }

    // Distance order is how the catalog is laid out
    let axes: Vec<f64> = SOLAR_SYSTEM[1..].iter().map(|c| c.semi_major_axis_au).collect();
    assert!(axes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_constants_for_lookup() {
    let earth = constants_for("Earth").unwrap();

    assert_eq!(earth.mass_kg, 5.972e24);
    assert_eq!(earth.radius_m, 6.371e6);
    assert_eq!(earth.horizons_id, Some("399"));
    assert_eq!(earth.semi_major_axis_au, 1.0);

    assert!(constants_for("Pluto").is_none());
}

#[test]
fn test_sun_outweighs_everything() {
    let planet_mass: f64 = SOLAR_SYSTEM[1..].iter().map(|c| c.mass_kg).sum();

    // The Sun holds well over 99% of the system's mass
    assert!(sun().mass_kg > 500.0 * planet_mass);
}
