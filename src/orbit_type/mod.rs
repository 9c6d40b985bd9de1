//! # Orbit descriptions
//!
//! This module defines the two ways a body's motion can be described:
//!
//! - [`keplerian_element`](crate::orbit_type::keplerian_element): classical elements
//!   `(a, e, i, N, w, T)` evaluated exactly at any time by the
//!   [`OrbitPropagator`](crate::propagator::OrbitPropagator).
//! - [`secular_element`](crate::orbit_type::secular_element): elements `(N, i, w, a, e, M)`
//!   drifting at constant rates, stepped in place by the
//!   [`SecularPropagator`](crate::secular_propagator::SecularPropagator).
//!
//! The [`BodyOrbit`] enum carries either description, so that a system of bodies can mix
//! both kinds of motion.
//!
//! ## Typical workflow
//!
//! ```rust
//! use orbiter::orbit_type::{keplerian_element::OrbitalElements, BodyOrbit};
//!
//! let orbit = BodyOrbit::Keplerian(OrbitalElements::default());
//! assert!(orbit.validate().is_ok());
//! assert!(!orbit.is_secular());
//! ```
use serde::{Deserialize, Serialize};

use crate::{
    orbit_type::{keplerian_element::OrbitalElements, secular_element::SecularElementState},
    orbiter_errors::OrbiterError,
};

/// Classical Keplerian elements structure and builder.
pub mod keplerian_element;

/// Secularly drifting elements and their mutable state.
pub mod secular_element;

/// Motion model of one body.
///
/// Variants
/// --------
/// * `Keplerian`: immutable elements, position is a pure function of time.
/// * `Secular`: mutable state, position follows from the accumulated drift.
///
/// Serialized with an external `model` tag: `{"model": "keplerian", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum BodyOrbit {
    Keplerian(OrbitalElements),
    Secular(SecularElementState),
}

impl BodyOrbit {
    /// Validate the underlying description.
    pub fn validate(&self) -> Result<(), OrbiterError> {
        match self {
            BodyOrbit::Keplerian(elements) => elements.validate(),
            BodyOrbit::Secular(state) => state.validate(),
        }
    }

    pub fn is_secular(&self) -> bool {
        matches!(self, BodyOrbit::Secular(_))
    }

    /// Display scale attached to the body, if any.
    pub fn visual_scale(&self) -> Option<f64> {
        match self {
            BodyOrbit::Keplerian(_) => None,
            BodyOrbit::Secular(state) => state.visual_scale,
        }
    }
}

impl From<OrbitalElements> for BodyOrbit {
    fn from(elements: OrbitalElements) -> Self {
        BodyOrbit::Keplerian(elements)
    }
}

impl From<SecularElementState> for BodyOrbit {
    fn from(state: SecularElementState) -> Self {
        BodyOrbit::Secular(state)
    }
}

#[cfg(test)]
mod orbit_type_test {
    use super::*;

    #[test]
    fn test_tagged_deserialization() {
        let json = r#"{ "model": "keplerian", "a": 3.0, "e": 0.2 }"#;
        let orbit: BodyOrbit = serde_json::from_str(json).unwrap();
        match orbit {
            BodyOrbit::Keplerian(el) => {
                assert_eq!(el.semi_major_axis, 3.0);
                assert_eq!(el.eccentricity, 0.2);
            }
            BodyOrbit::Secular(_) => panic!("expected a keplerian orbit"),
        }

        let json = r#"{
            "model": "secular",
            "elements": { "a": 1.0, "e": 0.0, "M": 10.0 },
            "visual_scale": 0.25
        }"#;
        let orbit: BodyOrbit = serde_json::from_str(json).unwrap();
        assert!(orbit.is_secular());
        assert_eq!(orbit.visual_scale(), Some(0.25));
        assert!(orbit.validate().is_ok());
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let json = r#"{ "model": "hyperbolic", "a": 3.0 }"#;
        assert!(serde_json::from_str::<BodyOrbit>(json).is_err());
    }
}
