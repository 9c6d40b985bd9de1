//! # Two-body orbit propagation
//!
//! [`OrbitPropagator`] turns a set of [`OrbitalElements`] and a simulation time into the
//! Cartesian position of the body relative to its primary.
//!
//! ## Pipeline
//!
//! 1. **Mean anomaly** from the time elapsed since periapsis passage:
//!    `M = (t − T)·n`, with the mean motion `n = sqrt(μ / a³)` (radians per time unit).
//! 2. **Eccentric anomaly** from Kepler's equation `E = M + e·sin(E)`, approximated with a
//!    fixed number `k` of fixed-point iterations seeded at `E₀ = M`
//!    (see [`solve_kepler_fixed_point`]).
//! 3. **Orbital plane**: `(px, py) = (a(cos E − e), a·sqrt(1 − e²)·sin E)`, giving the
//!    radius `r` and the true anomaly `ν = atan2(py, px)`.
//! 4. **Orientation**: the classical rotations by `w`, `i` and `N`,
//!
//!    ```text
//!    x = r·[cosN·cos(ν+w) − sinN·sin(ν+w)·cosI]
//!    y = r·[sinN·cos(ν+w) + cosN·sin(ν+w)·cosI]
//!    z = r·sin(ν+w)·sinI
//!    ```
//!
//! 5. **Output frame**: the vector is expressed in the requested [`FrameConvention`].
//!
//! Units
//! -----
//! `μ`, `a` and the time unit must be consistent (e.g. m³/s², m and s for [`MU_EARTH`]).
//! `i`, `N` and `w` are degrees; `M`, `E` and `ν` are radians.
//!
//! Failure behavior
//! ----------------
//! Nothing here returns an error or panics. Elements with `a ≤ 0` or `e ∉ [0, 1)` yield NaN
//! or infinite coordinates; validate them beforehand with [`OrbitalElements::validate`].
//!
//! ## Example
//!
//! ```rust
//! use orbiter::propagator::{FrameConvention, OrbitPropagator};
//! use orbiter::orbit_type::keplerian_element::OrbitalElements;
//!
//! let propagator = OrbitPropagator::new(1.0).with_frame(FrameConvention::Physical);
//! let position = propagator.eval_position(&OrbitalElements::default(), 0.0);
//!
//! assert!((position.x - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Position, Radian, DEFAULT_PATH_SAMPLES, DPI, MU_EARTH, RADEG},
    kepler::solve_kepler_fixed_point,
    orbit_path::OrbitPath,
    orbit_type::keplerian_element::OrbitalElements,
    orbiter_errors::OrbiterError,
};

/// Axis convention of the positions handed to the host.
///
/// Both conventions describe the same physical vector; only the order of the components
/// differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameConvention {
    /// Display frame with the Y axis pointing out of the reference plane: `(x, z, y)`.
    #[default]
    DisplayYUp,
    /// Right-handed frame of the primary with Z normal to the reference plane: `(x, y, z)`.
    Physical,
}

impl FrameConvention {
    /// Express a vector of the primary's physical frame in this convention.
    #[inline]
    pub fn apply(&self, physical: Position) -> Position {
        match self {
            FrameConvention::DisplayYUp => Position::new(physical.x, physical.z, physical.y),
            FrameConvention::Physical => physical,
        }
    }

    /// Inverse of [`FrameConvention::apply`].
    #[inline]
    pub fn to_physical(&self, position: Position) -> Position {
        // The Y/Z swap is its own inverse.
        self.apply(position)
    }
}

/// Every intermediate quantity of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSample {
    /// Mean anomaly `M` (radians, not normalized).
    pub mean_anomaly: Radian,
    /// Eccentric anomaly `E` after `k` iterations (radians, not normalized).
    pub eccentric_anomaly: Radian,
    /// True anomaly `ν` in (−π, π].
    pub true_anomaly: Radian,
    /// Distance to the primary.
    pub radius: f64,
    /// Position in the propagator's frame convention.
    pub position: Position,
}

/// Keplerian propagator of a system sharing one primary.
///
/// The gravitational parameter belongs to the system, not to an orbit: every body
/// evaluated with the same propagator orbits the same primary. The struct is plain data
/// (`Copy`, `Send`, `Sync`) and every evaluation is a pure function of its arguments, so
/// one propagator can be shared freely between bodies and threads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitPropagator {
    /// Standard gravitational parameter μ of the primary.
    pub mu: f64,
    #[serde(default)]
    pub frame: FrameConvention,
}

impl Default for OrbitPropagator {
    /// Earth-centered propagator in SI units, display frame.
    fn default() -> Self {
        OrbitPropagator {
            mu: MU_EARTH,
            frame: FrameConvention::default(),
        }
    }
}

impl OrbitPropagator {
    pub fn new(mu: f64) -> Self {
        OrbitPropagator {
            mu,
            frame: FrameConvention::default(),
        }
    }

    /// Same as [`OrbitPropagator::new`], rejecting a non-finite or non-positive `mu`.
    pub fn try_new(mu: f64) -> Result<Self, OrbiterError> {
        if !(mu.is_finite() && mu > 0.0) {
            return Err(OrbiterError::InvalidGravitationalParameter(mu));
        }
        Ok(Self::new(mu))
    }

    pub fn with_frame(mut self, frame: FrameConvention) -> Self {
        self.frame = frame;
        self
    }

    /// Mean motion `n = sqrt(μ / a³)` in radians per time unit.
    #[inline]
    pub fn mean_motion(&self, semi_major_axis: f64) -> f64 {
        (self.mu / semi_major_axis.powi(3)).sqrt()
    }

    /// Orbital period `2π / n`.
    pub fn period(&self, semi_major_axis: f64) -> f64 {
        DPI / self.mean_motion(semi_major_axis)
    }

    /// Mean anomaly `M = (t − T)·n` (radians, not normalized).
    #[inline]
    pub fn mean_anomaly(&self, elements: &OrbitalElements, time: f64) -> Radian {
        (time - elements.periapsis_epoch) * self.mean_motion(elements.semi_major_axis)
    }

    /// Eccentric anomaly at `time`, after `elements.anomaly_iterations` fixed-point steps.
    #[inline]
    pub fn eccentric_anomaly(&self, elements: &OrbitalElements, time: f64) -> Radian {
        solve_kepler_fixed_point(
            self.mean_anomaly(elements, time),
            elements.eccentricity,
            elements.anomaly_iterations,
        )
    }

    /// Position of the body at `time`.
    ///
    /// Arguments
    /// -----------------
    /// * `elements`: orbit of the body.
    /// * `time`: simulation time, in the unit of `elements.periapsis_epoch`.
    ///
    /// Return
    /// ----------
    /// * The position relative to the primary, in `self.frame`.
    ///
    /// See also
    /// ------------
    /// * [`OrbitPropagator::evaluate`] – Same evaluation, keeping the anomalies and radius.
    /// * [`OrbitPropagator::eval_position_by_anomaly`] – Entry point at a given `E`.
    pub fn eval_position(&self, elements: &OrbitalElements, time: f64) -> Position {
        let ecc_anomaly = self.eccentric_anomaly(elements, time);
        self.eval_position_by_anomaly(elements, ecc_anomaly)
    }

    /// Position of the body at a given eccentric anomaly (radians).
    ///
    /// Skips the time → anomaly conversion. The result is 2π-periodic in
    /// `eccentric_anomaly`.
    pub fn eval_position_by_anomaly(
        &self,
        elements: &OrbitalElements,
        eccentric_anomaly: Radian,
    ) -> Position {
        let (radius, true_anomaly) = planar_polar(elements, eccentric_anomaly);
        self.frame.apply(orient(elements, radius, true_anomaly))
    }

    /// Full evaluation at `time`, keeping every intermediate quantity.
    pub fn evaluate(&self, elements: &OrbitalElements, time: f64) -> OrbitSample {
        let mean_anomaly = self.mean_anomaly(elements, time);
        let eccentric_anomaly = solve_kepler_fixed_point(
            mean_anomaly,
            elements.eccentricity,
            elements.anomaly_iterations,
        );
        let (radius, true_anomaly) = planar_polar(elements, eccentric_anomaly);

        OrbitSample {
            mean_anomaly,
            eccentric_anomaly,
            true_anomaly,
            radius,
            position: self.frame.apply(orient(elements, radius, true_anomaly)),
        }
    }

    /// Lazily sampled closed polyline of the orbit, see [`OrbitPath`].
    pub fn path(&self, elements: &OrbitalElements, sample_count: usize) -> OrbitPath {
        OrbitPath::new(*self, *elements, sample_count)
    }

    /// Closed polyline of the full orbit.
    ///
    /// `sample_count` eccentric anomalies evenly spaced over [0, 360°], both ends included,
    /// so the first and last points coincide. Depends on the elements only, never on time.
    pub fn compute_path(&self, elements: &OrbitalElements, sample_count: usize) -> Vec<Position> {
        self.path(elements, sample_count).to_vec()
    }

    /// [`OrbitPropagator::compute_path`] with [`DEFAULT_PATH_SAMPLES`] points (one every 6°).
    pub fn compute_default_path(&self, elements: &OrbitalElements) -> Vec<Position> {
        self.compute_path(elements, DEFAULT_PATH_SAMPLES)
    }
}

/// Radius and true anomaly of the body in its orbital plane.
#[inline]
fn planar_polar(elements: &OrbitalElements, eccentric_anomaly: Radian) -> (f64, Radian) {
    let a = elements.semi_major_axis;
    let e = elements.eccentricity;

    let (sin_e, cos_e) = eccentric_anomaly.sin_cos();
    let px = a * (cos_e - e);
    let py = a * (1.0 - e * e).sqrt() * sin_e;

    (px.hypot(py), py.atan2(px))
}

/// Rotate the in-plane polar position `(r, ν)` into the primary's physical frame.
#[inline]
fn orient(elements: &OrbitalElements, radius: f64, true_anomaly: Radian) -> Position {
    let (sin_n, cos_n) = (elements.ascending_node_longitude * RADEG).sin_cos();
    let (sin_i, cos_i) = (elements.inclination * RADEG).sin_cos();
    let (sin_u, cos_u) = (true_anomaly + elements.periapsis_argument * RADEG).sin_cos();

    Position::new(
        radius * (cos_n * cos_u - sin_n * sin_u * cos_i),
        radius * (sin_n * cos_u + cos_n * sin_u * cos_i),
        radius * sin_u * sin_i,
    )
}
