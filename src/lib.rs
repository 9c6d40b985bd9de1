//! # Orbiter
//!
//! Two-body Keplerian orbit propagation for real-time simulations.
//!
//! - [`propagator::OrbitPropagator`] evaluates the position of a body from its six classical
//!   elements at any time, and samples the closed polyline of its orbit.
//! - [`secular_propagator::SecularPropagator`] steps elements drifting at constant rates and
//!   derives a cheap approximate position.
//! - [`simulation::Simulation`] drives a system of bodies tick after tick;
//!   [`config::SystemConfig`] loads one from JSON.
//!
//! ```rust
//! use orbiter::{OrbitPropagator, OrbitalElements};
//!
//! let elements = OrbitalElements::builder()
//!     .semi_major_axis(1.0)
//!     .eccentricity(0.0)
//!     .anomaly_iterations(5)
//!     .build()
//!     .unwrap();
//!
//! let propagator = OrbitPropagator::new(1.0);
//! let position = propagator.eval_position(&elements, 0.0);
//! assert!((position - nalgebra::Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
//!
//! let path = propagator.compute_default_path(&elements);
//! assert_eq!(path.first(), path.last());
//! ```

pub mod config;
pub mod constants;
pub mod kepler;
pub mod orbit_path;
pub mod orbit_type;
pub mod orbiter_errors;
pub mod propagator;
pub mod secular_propagator;
pub mod simulation;

pub use crate::config::{BodyConfig, SystemConfig};
pub use crate::constants::Position;
pub use crate::orbit_path::OrbitPath;
pub use crate::orbit_type::keplerian_element::{OrbitalElements, OrbitalElementsBuilder};
pub use crate::orbit_type::secular_element::{SecularElementState, SecularElements, SecularRates};
pub use crate::orbit_type::BodyOrbit;
pub use crate::orbiter_errors::OrbiterError;
pub use crate::propagator::{FrameConvention, OrbitPropagator, OrbitSample};
pub use crate::secular_propagator::SecularPropagator;
pub use crate::simulation::{Body, BodyFrame, Simulation, SimulationClock};
