use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyHandle};

fn make_body(position: [f64; 3], velocity: [f64; 3], mass: f64) -> Body {
    Body {
        name: "test".to_owned(),
        mass,
        radius: 1.0,
        stationary: false,
        position: Point3::new(position[0], position[1], position[2]),
        velocity: Vector3::new(velocity[0], velocity[1], velocity[2]),
    }
}

#[test]
fn test_momentum() {
    let body = make_body([1.0, 0.0, 0.0], [3.0, 4.0, 0.0], 2.0);

    assert_eq!(body.momentum(), Vector3::new(6.0, 8.0, 0.0));
}

#[test]
fn test_kinetic_energy() {
    let body = make_body([0.0, 0.0, 0.0], [3.0, 4.0, 0.0], 2.0);

    // KE = 0.5 * m * v²
    // v² = 3² + 4² = 25
    // KE = 0.5 * 2 * 25 = 25
    assert_eq!(body.kinetic_energy(), 25.0);
}

#[test]
fn test_distance_to() {
    let a = make_body([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0);
    let b = make_body([3.0, 4.0, 0.0], [0.0, 0.0, 0.0], 1.0);

    // sqrt(3² + 4²) = 5
    assert_eq!(a.distance_to(&b), 5.0);
}

#[test]
fn test_specific_angular_momentum() {
    let body = make_body([1.0, 0.0, 0.0], [0.0, 2.0, 0.0], 1.0);

    // r × v = (1,0,0) × (0,2,0) = (0,0,2)
    assert_eq!(body.specific_angular_momentum(), Vector3::new(0.0, 0.0, 2.0));
}

#[test]
fn test_specific_angular_momentum_radial_motion() {
    let body = make_body([1.0, 0.0, 0.0], [5.0, 0.0, 0.0], 1.0);

    // Radial velocity carries no angular momentum
    assert_eq!(body.specific_angular_momentum(), Vector3::zeros());
}

#[test]
fn test_specific_angular_momentum_out_of_plane() {
    let body = make_body([0.0, 0.0, 2.0], [1.0, 0.0, 0.0], 1.0);

    // (0,0,2) × (1,0,0) = (0,2,0)
    assert_eq!(body.specific_angular_momentum(), Vector3::new(0.0, 2.0, 0.0));
}

#[test]
fn test_accessors() {
    let mut body = make_body([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 7.0);
    body.radius = 2.5;
    body.stationary = true;

    assert_eq!(body.name(), "test");
    assert_eq!(body.mass(), 7.0);
    assert_eq!(body.radius(), 2.5);
    assert!(body.is_stationary());
}

#[test]
fn test_handle_equality() {
    let h1 = BodyHandle(3);
    let h2 = BodyHandle(3);
    let h3 = BodyHandle(4);

    assert_eq!(h1, h2);
    assert_ne!(h1, h3);
}
