//! # Constants and type definitions for Orbiter
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `orbiter` library.
//!
//! ## Overview
//!
//! - Gravitational parameters of the usual primaries
//! - Unit conversions (degrees ↔ radians)
//! - Defaults shared by the propagators (path sampling, time step)
//! - Core type aliases used across the crate

use nalgebra::Vector3;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Full revolution in degrees
pub const FULL_TURN_DEG: f64 = 360.0;

/// Standard gravitational parameter of the Earth in m³/s² (WGS84)
pub const MU_EARTH: f64 = 3.986004418e14;

/// Standard gravitational parameter of the Sun in m³/s²
pub const MU_SUN: f64 = 1.32712440018e20;

/// Gaussian gravitational constant k (used in classical orbit dynamics)
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², the heliocentric gravitational parameter in AU³/day²
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

// -------------------------------------------------------------------------------------------------
// Propagation defaults
// -------------------------------------------------------------------------------------------------

/// Number of samples of a closed orbit polyline (one every 6° of eccentric anomaly)
pub const DEFAULT_PATH_SAMPLES: usize = 61;

/// Smallest usable path: both endpoints of the revolution
pub const MIN_PATH_SAMPLES: usize = 2;

/// Fixed-point iterations used when the configuration does not say otherwise
pub const DEFAULT_ANOMALY_ITERATIONS: u32 = 5;

/// Default clock increment of the simulation driver
pub const DEFAULT_TIME_STEP: f64 = 0.1;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;

/// Cartesian position of a body relative to its primary
pub type Position = Vector3<f64>;
