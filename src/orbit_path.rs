//! # Orbit path sampling
//!
//! An [`OrbitPath`] describes the closed polyline of a full revolution: `sample_count`
//! eccentric anomalies evenly spaced over [0, 2π], evaluated through
//! [`OrbitPropagator::eval_position_by_anomaly`]. The path holds no iteration state, so it
//! can be walked any number of times and always yields the same points.
//!
//! The last sample sits at 2π, which is the periapsis again: it is emitted as an exact
//! copy of the first point so that line renderers get a closed loop without a seam.

use itertools::Itertools;

use crate::{
    constants::{Position, Radian, DPI},
    orbit_type::keplerian_element::OrbitalElements,
    propagator::OrbitPropagator,
};

/// Restartable, lazily evaluated orbit polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    propagator: OrbitPropagator,
    elements: OrbitalElements,
    sample_count: usize,
}

impl OrbitPath {
    pub fn new(
        propagator: OrbitPropagator,
        elements: OrbitalElements,
        sample_count: usize,
    ) -> Self {
        OrbitPath {
            propagator,
            elements,
            sample_count,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Eccentric anomaly of sample `index`, in [0, 2π).
    ///
    /// The closing sample (and the single sample of a one-point path) maps to 0.
    pub fn anomaly(&self, index: usize) -> Radian {
        if index + 1 >= self.sample_count {
            0.0
        } else {
            index as f64 * DPI / (self.sample_count - 1) as f64
        }
    }

    pub fn iter(&self) -> OrbitPathIter<'_> {
        OrbitPathIter {
            path: self,
            front: 0,
            back: self.sample_count,
        }
    }

    pub fn to_vec(&self) -> Vec<Position> {
        self.iter().collect()
    }

    /// Length of the polyline, a lower bound of the ellipse perimeter that tightens as the
    /// sample count grows.
    pub fn length(&self) -> f64 {
        self.iter()
            .tuple_windows()
            .map(|(p1, p2)| (p2 - p1).norm())
            .sum()
    }
}

impl<'a> IntoIterator for &'a OrbitPath {
    type Item = Position;
    type IntoIter = OrbitPathIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of an [`OrbitPath`].
#[derive(Debug, Clone)]
pub struct OrbitPathIter<'a> {
    path: &'a OrbitPath,
    front: usize,
    back: usize,
}

impl OrbitPathIter<'_> {
    fn point(&self, index: usize) -> Position {
        self.path
            .propagator
            .eval_position_by_anomaly(&self.path.elements, self.path.anomaly(index))
    }
}

impl Iterator for OrbitPathIter<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let point = self.point(self.front);
        self.front += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for OrbitPathIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point(self.back))
    }
}

impl ExactSizeIterator for OrbitPathIter<'_> {}
