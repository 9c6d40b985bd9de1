//! # Secular element propagation
//!
//! A cheap, approximate propagator for bodies whose elements drift slowly over time
//! (planets and satellites subject to secular perturbations). Each step integrates the
//! elements of a [`SecularElementState`] linearly, then derives a position directly from
//! the mean anomaly:
//!
//! ```text
//! (px, py) = (a(cos M − e), a·sqrt(1 − e²)·sin M)
//! r = sqrt(px² + py²)
//! x = r·cosM·cosI,  y = r·sinM·cosI,  z = r·sinM
//! ```
//!
//! Kepler's equation is not solved (`E ≈ M`) and only the inclination enters the
//! projection: the node longitude `N` and the argument of periapsis `w` are integrated
//! but do not rotate the position. Use the [`OrbitPropagator`](crate::propagator::OrbitPropagator)
//! when the instantaneous position matters.

use crate::{
    constants::Position,
    kepler::{cos_deg, sin_deg},
    orbit_type::secular_element::{SecularElementState, SecularElements},
    propagator::FrameConvention,
};

/// Stepper of [`SecularElementState`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SecularPropagator {
    pub frame: FrameConvention,
}

impl SecularPropagator {
    pub fn new(frame: FrameConvention) -> Self {
        SecularPropagator { frame }
    }

    /// Advance `state` by `dt` in place and return the new position.
    ///
    /// Repeated calls compound: the state after two steps of `dt` is the state after one
    /// step of `2·dt` (up to rounding and angle reduction).
    pub fn step(&self, state: &mut SecularElementState, dt: f64) -> Position {
        state.integrate(dt);
        self.position(state)
    }

    /// By-value form of [`SecularPropagator::step`]: the state goes in, the advanced state
    /// comes back with the position.
    pub fn advance(
        &self,
        mut state: SecularElementState,
        dt: f64,
    ) -> (SecularElementState, Position) {
        let position = self.step(&mut state, dt);
        (state, position)
    }

    /// Position of the current state, without advancing it.
    pub fn position(&self, state: &SecularElementState) -> Position {
        self.frame.apply(approximate_position(&state.elements))
    }
}

fn approximate_position(elements: &SecularElements) -> Position {
    let a = elements.semi_major_axis;
    let e = elements.eccentricity;
    let m = elements.mean_anomaly;

    let (sin_m, cos_m) = (sin_deg(m), cos_deg(m));
    let cos_i = cos_deg(elements.inclination);

    let px = a * (cos_m - e);
    let py = a * (1.0 - e * e).sqrt() * sin_m;
    let r = px.hypot(py);

    Position::new(r * cos_m * cos_i, r * sin_m * cos_i, r * sin_m)
}
