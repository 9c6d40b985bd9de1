//! # Keplerian orbital elements
//!
//! This module defines [`OrbitalElements`], the classical element set consumed by the
//! [`OrbitPropagator`](crate::propagator::OrbitPropagator), together with its validated
//! builder.
//!
//! ## What are Keplerian elements?
//!
//! 1. **a** – Semi-major axis (length unit of the simulated system)
//! 2. **e** – Eccentricity (unitless)
//! 3. **i** – Inclination (degrees)
//! 4. **N** – Longitude of ascending node (degrees)
//! 5. **w** – Argument of periapsis (degrees)
//! 6. **T** – Epoch of periapsis passage (time unit of the simulation clock)
//!
//! plus **k**, the number of fixed-point iterations spent solving Kepler's equation at
//! each evaluation.
//!
//! ## Validation
//!
//! Propagation never checks its input: elements with `a ≤ 0` or `e ∉ [0, 1)` simply
//! produce NaN or infinite coordinates. Validation happens once, at configuration time,
//! through [`OrbitalElements::validate`], [`OrbitalElementsBuilder::build`] or the
//! system loader in [`crate::config`].
//!
//! ## Example
//!
//! ```rust
//! use orbiter::orbit_type::keplerian_element::OrbitalElements;
//!
//! let elements = OrbitalElements::builder()
//!     .semi_major_axis(7.0e6)
//!     .eccentricity(0.01)
//!     .inclination(51.6)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(elements.anomaly_iterations, 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, DEFAULT_ANOMALY_ITERATIONS},
    orbiter_errors::OrbiterError,
};

/// Keplerian orbital elements of a body around its primary.
///
/// Units
/// -----
/// * `semi_major_axis`: length unit of the system (must match the gravitational parameter).
/// * `eccentricity`: unitless.
/// * `inclination`: degrees.
/// * `ascending_node_longitude`: degrees (N).
/// * `periapsis_argument`: degrees (w).
/// * `periapsis_epoch`: time unit of the simulation clock (T).
/// * `anomaly_iterations`: count (k).
///
/// Notes
/// -----
/// The short names used in element tables (`a`, `e`, `i`, `N`, `w`, `T`, `k`) are accepted
/// as aliases when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    #[serde(alias = "a")]
    pub semi_major_axis: f64,
    #[serde(alias = "e")]
    pub eccentricity: f64,
    #[serde(alias = "i", default)]
    pub inclination: Degree,
    #[serde(alias = "N", default)]
    pub ascending_node_longitude: Degree,
    #[serde(alias = "w", default)]
    pub periapsis_argument: Degree,
    #[serde(alias = "T", default)]
    pub periapsis_epoch: f64,
    #[serde(alias = "k", default = "default_anomaly_iterations")]
    pub anomaly_iterations: u32,
}

fn default_anomaly_iterations() -> u32 {
    DEFAULT_ANOMALY_ITERATIONS
}

impl Default for OrbitalElements {
    /// Unit circular orbit in the reference plane, periapsis at `t = 0`.
    fn default() -> Self {
        OrbitalElements {
            semi_major_axis: 1.0,
            eccentricity: 0.0,
            inclination: 0.0,
            ascending_node_longitude: 0.0,
            periapsis_argument: 0.0,
            periapsis_epoch: 0.0,
            anomaly_iterations: DEFAULT_ANOMALY_ITERATIONS,
        }
    }
}

impl OrbitalElements {
    /// Create a new [`OrbitalElementsBuilder`] starting from [`OrbitalElements::default`].
    pub fn builder() -> OrbitalElementsBuilder {
        OrbitalElementsBuilder::new()
    }

    /// Check the elements describe a closed (elliptic) orbit.
    ///
    /// Rules
    /// -----
    /// * every element is finite,
    /// * `a > 0`,
    /// * `0 ≤ e < 1`,
    /// * `0 ≤ i ≤ 180°`.
    ///
    /// `N` and `w` are not range-checked: any finite angle describes a valid
    /// orientation.
    ///
    /// Return
    /// ------
    /// * `Ok(())` when the elements can be propagated,
    /// * `Err(OrbiterError)` naming the first offending element otherwise.
    pub fn validate(&self) -> Result<(), OrbiterError> {
        for (name, value) in [
            ("semi_major_axis", self.semi_major_axis),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            ("ascending_node_longitude", self.ascending_node_longitude),
            ("periapsis_argument", self.periapsis_argument),
            ("periapsis_epoch", self.periapsis_epoch),
        ] {
            if !value.is_finite() {
                return Err(OrbiterError::NonFiniteElement { name, value });
            }
        }

        if self.semi_major_axis <= 0.0 {
            return Err(OrbiterError::InvalidSemiMajorAxis(self.semi_major_axis));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrbiterError::InvalidEccentricity(self.eccentricity));
        }
        if !(0.0..=180.0).contains(&self.inclination) {
            return Err(OrbiterError::InvalidInclination(self.inclination));
        }
        Ok(())
    }

    /// Semi-minor axis `b = a·sqrt(1 − e²)`.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity.powi(2)).sqrt()
    }

    /// Distance to the primary at periapsis, `a(1 − e)`.
    pub fn periapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Distance to the primary at apoapsis, `a(1 + e)`.
    pub fn apoapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Elements (k = {})", self.anomaly_iterations)?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6}",
            self.semi_major_axis
        )?;
        writeln!(f, "  e   (eccentricity)          = {:.6}", self.eccentricity)?;
        writeln!(f, "  i   (inclination)           = {:.6}°", self.inclination)?;
        writeln!(
            f,
            "  N   (longitude of node)     = {:.6}°",
            self.ascending_node_longitude
        )?;
        writeln!(
            f,
            "  w   (argument of periapsis) = {:.6}°",
            self.periapsis_argument
        )?;
        writeln!(
            f,
            "  T   (periapsis epoch)       = {:.6}",
            self.periapsis_epoch
        )
    }
}

/// Builder for [`OrbitalElements`], with validation.
#[derive(Debug, Clone)]
pub struct OrbitalElementsBuilder {
    elements: OrbitalElements,
}

impl Default for OrbitalElementsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitalElementsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            elements: OrbitalElements::default(),
        }
    }

    pub fn semi_major_axis(mut self, v: f64) -> Self {
        self.elements.semi_major_axis = v;
        self
    }
    pub fn eccentricity(mut self, v: f64) -> Self {
        self.elements.eccentricity = v;
        self
    }
    pub fn inclination(mut self, v: Degree) -> Self {
        self.elements.inclination = v;
        self
    }
    pub fn ascending_node_longitude(mut self, v: Degree) -> Self {
        self.elements.ascending_node_longitude = v;
        self
    }
    pub fn periapsis_argument(mut self, v: Degree) -> Self {
        self.elements.periapsis_argument = v;
        self
    }
    pub fn periapsis_epoch(mut self, v: f64) -> Self {
        self.elements.periapsis_epoch = v;
        self
    }
    pub fn anomaly_iterations(mut self, v: u32) -> Self {
        self.elements.anomaly_iterations = v;
        self
    }

    /// Validate and return the elements.
    ///
    /// See [`OrbitalElements::validate`] for the rules.
    pub fn build(self) -> Result<OrbitalElements, OrbiterError> {
        self.elements.validate()?;
        Ok(self.elements)
    }

    /// Return the elements without validation.
    ///
    /// Useful to study the degenerate output of invalid orbits.
    pub fn build_unchecked(self) -> OrbitalElements {
        self.elements
    }
}

#[cfg(test)]
pub(crate) mod test_keplerian_element {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builder_defaults() {
        let elements = OrbitalElements::builder().build().unwrap();
        assert_eq!(elements, OrbitalElements::default());
        assert_eq!(elements.anomaly_iterations, DEFAULT_ANOMALY_ITERATIONS);
    }

    #[test]
    fn test_builder_rejects_invalid_elements() {
        let err = OrbitalElements::builder()
            .semi_major_axis(0.0)
            .build()
            .unwrap_err();
        assert_eq!(err, OrbiterError::InvalidSemiMajorAxis(0.0));

        let err = OrbitalElements::builder()
            .eccentricity(1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, OrbiterError::InvalidEccentricity(1.0));

        let err = OrbitalElements::builder()
            .eccentricity(-0.1)
            .build()
            .unwrap_err();
        assert_eq!(err, OrbiterError::InvalidEccentricity(-0.1));

        let err = OrbitalElements::builder()
            .inclination(181.0)
            .build()
            .unwrap_err();
        assert_eq!(err, OrbiterError::InvalidInclination(181.0));

        let err = OrbitalElements::builder()
            .periapsis_epoch(f64::INFINITY)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            OrbiterError::NonFiniteElement {
                name: "periapsis_epoch",
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn test_builder_unchecked_keeps_invalid_values() {
        let elements = OrbitalElements::builder()
            .eccentricity(1.5)
            .build_unchecked();
        assert_eq!(elements.eccentricity, 1.5);
        assert!(elements.validate().is_err());
    }

    #[test]
    fn test_derived_distances() {
        let elements = OrbitalElements::builder()
            .semi_major_axis(2.0)
            .eccentricity(0.5)
            .build()
            .unwrap();

        assert_relative_eq!(elements.periapsis_distance(), 1.0);
        assert_relative_eq!(elements.apoapsis_distance(), 3.0);
        assert_relative_eq!(elements.semi_minor_axis(), 3.0_f64.sqrt());
    }

    #[test]
    fn test_deserialize_short_names() {
        let json = r#"{ "a": 2.5, "e": 0.1, "i": 10.0, "N": 20.0, "w": 30.0, "T": 4.0, "k": 8 }"#;
        let elements: OrbitalElements = serde_json::from_str(json).unwrap();

        assert_eq!(
            elements,
            OrbitalElements {
                semi_major_axis: 2.5,
                eccentricity: 0.1,
                inclination: 10.0,
                ascending_node_longitude: 20.0,
                periapsis_argument: 30.0,
                periapsis_epoch: 4.0,
                anomaly_iterations: 8,
            }
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{ "semi_major_axis": 1.5, "eccentricity": 0.2 }"#;
        let elements: OrbitalElements = serde_json::from_str(json).unwrap();

        assert_eq!(elements.inclination, 0.0);
        assert_eq!(elements.periapsis_epoch, 0.0);
        assert_eq!(elements.anomaly_iterations, DEFAULT_ANOMALY_ITERATIONS);
    }

    #[test]
    fn test_display() {
        let text = OrbitalElements::default().to_string();
        assert!(text.starts_with("Orbital Elements (k = 5)"));
        assert!(text.contains("a   (semi-major axis)       = 1.000000"));
    }
}
