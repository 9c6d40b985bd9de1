//! # Angle helpers and Kepler's equation
//!
//! Small numerical building blocks shared by both propagators:
//!
//! - [`principal_angle`] and [`reduce_degrees`] bring angles back into a single revolution,
//! - [`sin_deg`] / [`cos_deg`] evaluate trigonometric functions on degree arguments,
//! - [`solve_kepler_fixed_point`] approximates the eccentric anomaly with a fixed
//!   number of fixed-point iterations,
//! - [`kepler_residual`] measures how far an eccentric anomaly is from satisfying
//!   Kepler's equation.

use crate::constants::{Degree, Radian, DPI, FULL_TURN_DEG, RADEG};

/// Returns the principal value of an angle in radians, in [0, 2π).
pub fn principal_angle(a: Radian) -> Radian {
    let reduced = a.rem_euclid(DPI);
    // rem_euclid rounds up to DPI for tiny negative inputs
    if reduced >= DPI {
        0.0
    } else {
        reduced
    }
}

/// Reduce an angle in degrees into [0, 360).
///
/// Computed as `deg − 360·floor(deg/360)`, so negative angles wrap forward:
/// `reduce_degrees(-10.0) == 350.0`.
pub fn reduce_degrees(deg: Degree) -> Degree {
    let reduced = deg - FULL_TURN_DEG * (deg / FULL_TURN_DEG).floor();
    // tiny negative angles round up to a full turn
    if reduced >= FULL_TURN_DEG {
        0.0
    } else {
        reduced
    }
}

#[inline]
pub fn sin_deg(deg: Degree) -> f64 {
    (deg * RADEG).sin()
}

#[inline]
pub fn cos_deg(deg: Degree) -> f64 {
    (deg * RADEG).cos()
}

/// Approximate the eccentric anomaly `E` solving `E = M + e·sin(E)`.
///
/// The iteration is seeded at `E₀ = M` and runs exactly `iterations` times, whatever the
/// remaining error: the cost of one call is fixed and known in advance. With
/// `iterations == 0` the mean anomaly itself is returned.
///
/// The map contracts with ratio `e`, so each iteration shrinks the error by roughly a
/// factor `e`. Close to `e = 1` a small iteration count leaves a visible error; this is an
/// accuracy limitation, not a failure.
///
/// Arguments
/// -----------------
/// * `mean_anomaly`: mean anomaly `M` (radians).
/// * `eccentricity`: orbital eccentricity `e`, expected in [0, 1).
/// * `iterations`: number of fixed-point updates `k`.
///
/// Return
/// ----------
/// * The eccentric anomaly estimate (radians, not normalized).
///
/// See also
/// ------------
/// * [`kepler_residual`] – Error of an estimate with respect to Kepler's equation.
#[inline]
pub fn solve_kepler_fixed_point(
    mean_anomaly: Radian,
    eccentricity: f64,
    iterations: u32,
) -> Radian {
    let mut ecc_anomaly = mean_anomaly;
    for _ in 0..iterations {
        ecc_anomaly = mean_anomaly + eccentricity * ecc_anomaly.sin();
    }
    ecc_anomaly
}

/// Residual of Kepler's equation, `E − e·sin(E) − M`.
pub fn kepler_residual(ecc_anomaly: Radian, eccentricity: f64, mean_anomaly: Radian) -> f64 {
    ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly
}
