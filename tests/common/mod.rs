#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use orbiter::{OrbitalElements, Position};
use rand::rngs::StdRng;
use rand::Rng;

/// Compare two positions component-wise within an absolute tolerance.
pub fn assert_position_close(actual: &Position, expected: &Position, epsilon: f64) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_abs_diff_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Random closed orbit with `e ∈ [0, max_ecc)`.
pub fn random_elements(rng: &mut StdRng, max_ecc: f64) -> OrbitalElements {
    OrbitalElements::builder()
        .semi_major_axis(rng.random_range(0.1..50.0))
        .eccentricity(rng.random_range(0.0..max_ecc))
        .inclination(rng.random_range(0.0..=180.0))
        .ascending_node_longitude(rng.random_range(0.0..360.0))
        .periapsis_argument(rng.random_range(0.0..360.0))
        .periapsis_epoch(rng.random_range(-100.0..100.0))
        .anomaly_iterations(rng.random_range(0..40))
        .build()
        .unwrap()
}
