//! # Secularly drifting elements
//!
//! [`SecularElements`] hold the element set `(N, i, w, a, e, M)` of a body whose orbit
//! changes slowly, [`SecularRates`] their per-time-unit drift. [`SecularElementState`]
//! bundles both and is integrated step by step by the
//! [`SecularPropagator`](crate::secular_propagator::SecularPropagator).
//!
//! Angles are reduced into [0, 360) after every step; `a` and `e` are left as integrated.

use serde::{Deserialize, Serialize};

use crate::{
    constants::Degree,
    kepler::reduce_degrees,
    orbiter_errors::OrbiterError,
};

/// Slowly varying orbital elements `(N, i, w, a, e, M)`.
///
/// Angles are in degrees. Unlike [`OrbitalElements`](crate::orbit_type::keplerian_element::OrbitalElements),
/// the position along the orbit is carried by the mean anomaly `M` itself, not by a
/// periapsis epoch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SecularElements {
    #[serde(alias = "N", default)]
    pub ascending_node_longitude: Degree,
    #[serde(alias = "i", default)]
    pub inclination: Degree,
    #[serde(alias = "w", default)]
    pub periapsis_argument: Degree,
    #[serde(alias = "a")]
    pub semi_major_axis: f64,
    #[serde(alias = "e", default)]
    pub eccentricity: f64,
    #[serde(alias = "M", default)]
    pub mean_anomaly: Degree,
}

/// Per-unit-time drift of each [`SecularElements`] component.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecularRates {
    #[serde(alias = "N_step")]
    pub ascending_node_longitude: f64,
    #[serde(alias = "i_step")]
    pub inclination: f64,
    #[serde(alias = "w_step")]
    pub periapsis_argument: f64,
    #[serde(alias = "a_step")]
    pub semi_major_axis: f64,
    #[serde(alias = "e_step")]
    pub eccentricity: f64,
    #[serde(alias = "M_step")]
    pub mean_anomaly: f64,
}

impl SecularRates {
    /// True when no element drifts.
    pub fn is_frozen(&self) -> bool {
        *self == SecularRates::default()
    }
}

/// Mutable state of a body propagated with secular element drift.
///
/// The state evolves in place every step and compounds: there is no way back to the
/// initial elements other than keeping a clone of the state before stepping.
///
/// `visual_scale` is a display attribute for the host (typically set on satellites). It
/// plays no role in the propagation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecularElementState {
    pub elements: SecularElements,
    #[serde(default)]
    pub rates: SecularRates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_scale: Option<f64>,
}

impl SecularElementState {
    pub fn new(elements: SecularElements, rates: SecularRates) -> Self {
        SecularElementState {
            elements,
            rates,
            visual_scale: None,
        }
    }

    pub fn with_visual_scale(mut self, scale: f64) -> Self {
        self.visual_scale = Some(scale);
        self
    }

    /// Advance every element by `rate * dt`, then reduce `N`, `i`, `w` and `M` into [0, 360).
    ///
    /// `a` and `e` are integrated but never clamped: an eccentricity drifting out of
    /// [0, 1) shows up as NaN coordinates downstream.
    pub fn integrate(&mut self, dt: f64) {
        let el = &mut self.elements;
        let rates = &self.rates;

        el.ascending_node_longitude += rates.ascending_node_longitude * dt;
        el.inclination += rates.inclination * dt;
        el.periapsis_argument += rates.periapsis_argument * dt;
        el.semi_major_axis += rates.semi_major_axis * dt;
        el.eccentricity += rates.eccentricity * dt;
        el.mean_anomaly += rates.mean_anomaly * dt;

        el.ascending_node_longitude = reduce_degrees(el.ascending_node_longitude);
        el.inclination = reduce_degrees(el.inclination);
        el.periapsis_argument = reduce_degrees(el.periapsis_argument);
        el.mean_anomaly = reduce_degrees(el.mean_anomaly);
    }

    /// Configuration-time check of the initial state.
    ///
    /// Every value must be finite, the initial orbit closed (`a > 0`, `0 ≤ e < 1`) with
    /// `0 ≤ i ≤ 180`, and a visual scale, when given, strictly positive. Drift may still push the elements out
    /// of range later on.
    pub fn validate(&self) -> Result<(), OrbiterError> {
        let el = &self.elements;
        let rates = &self.rates;
        for (name, value) in [
            ("ascending_node_longitude", el.ascending_node_longitude),
            ("inclination", el.inclination),
            ("periapsis_argument", el.periapsis_argument),
            ("semi_major_axis", el.semi_major_axis),
            ("eccentricity", el.eccentricity),
            ("mean_anomaly", el.mean_anomaly),
            ("ascending_node_longitude_rate", rates.ascending_node_longitude),
            ("inclination_rate", rates.inclination),
            ("periapsis_argument_rate", rates.periapsis_argument),
            ("semi_major_axis_rate", rates.semi_major_axis),
            ("eccentricity_rate", rates.eccentricity),
            ("mean_anomaly_rate", rates.mean_anomaly),
        ] {
            if !value.is_finite() {
                return Err(OrbiterError::NonFiniteElement { name, value });
            }
        }

        if el.semi_major_axis <= 0.0 {
            return Err(OrbiterError::InvalidSemiMajorAxis(el.semi_major_axis));
        }
        if !(0.0..1.0).contains(&el.eccentricity) {
            return Err(OrbiterError::InvalidEccentricity(el.eccentricity));
        }
        if !(0.0..=180.0).contains(&el.inclination) {
            return Err(OrbiterError::InvalidInclination(el.inclination));
        }
        if let Some(scale) = self.visual_scale {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(OrbiterError::InvalidVisualScale(scale));
            }
        }
        Ok(())
    }
}
