//! # System configuration
//!
//! Loading of a whole simulated system from JSON: the primary's gravitational parameter,
//! the output frame, the clock, the orbit path resolution and the list of bodies.
//!
//! ```json
//! {
//!   "gravitational_parameter": 3.986004418e14,
//!   "frame": "display_y_up",
//!   "start_time": 0.0,
//!   "time_step": 10.0,
//!   "path_samples": 61,
//!   "bodies": [
//!     { "name": "iss", "orbit": { "model": "keplerian", "a": 6.78e6, "e": 0.0005, "i": 51.6, "k": 5 } },
//!     { "name": "moonlet", "orbit": { "model": "secular",
//!         "elements": { "a": 3.8e8, "e": 0.055, "i": 5.1, "M": 0.0 },
//!         "rates": { "M_step": 1.5e-4 },
//!         "visual_scale": 0.3 } }
//!   ]
//! }
//! ```
//!
//! Every field but `bodies[*]` has a default (Earth gravitational parameter, display
//! frame, `t = 0`, [`DEFAULT_TIME_STEP`], [`DEFAULT_PATH_SAMPLES`]). Validation happens
//! here, once, before any tick: the propagators themselves never check their input.

use std::{collections::HashSet, str::FromStr};

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEFAULT_PATH_SAMPLES, DEFAULT_TIME_STEP, MIN_PATH_SAMPLES, MU_EARTH},
    orbit_type::BodyOrbit,
    orbiter_errors::OrbiterError,
    propagator::{FrameConvention, OrbitPropagator},
    simulation::{Simulation, SimulationClock},
};

/// One named body of a [`SystemConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,
    pub orbit: BodyOrbit,
}

/// Description of a simulated system, as read from a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_gravitational_parameter")]
    pub gravitational_parameter: f64,
    #[serde(default)]
    pub frame: FrameConvention,
    #[serde(default)]
    pub start_time: f64,
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    #[serde(default = "default_path_samples")]
    pub path_samples: usize,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

fn default_gravitational_parameter() -> f64 {
    MU_EARTH
}

fn default_time_step() -> f64 {
    DEFAULT_TIME_STEP
}

fn default_path_samples() -> usize {
    DEFAULT_PATH_SAMPLES
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            gravitational_parameter: MU_EARTH,
            frame: FrameConvention::default(),
            start_time: 0.0,
            time_step: DEFAULT_TIME_STEP,
            path_samples: DEFAULT_PATH_SAMPLES,
            bodies: Vec::new(),
        }
    }
}

impl SystemConfig {
    /// Parse and validate a JSON system description.
    pub fn from_json_str(json: &str) -> Result<Self, OrbiterError> {
        let config: SystemConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!(
            "Parsed system configuration with {} bodies",
            config.bodies.len()
        );
        Ok(config)
    }

    /// Read, parse and validate a JSON system file.
    pub fn from_path(path: &Utf8Path) -> Result<Self, OrbiterError> {
        log::debug!("Loading system configuration from {path}");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, OrbiterError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the whole system: gravitational parameter, clock, path resolution, unique
    /// body names and every body's orbit.
    pub fn validate(&self) -> Result<(), OrbiterError> {
        OrbitPropagator::try_new(self.gravitational_parameter)?;
        SimulationClock::new(self.start_time, self.time_step)?;
        if self.path_samples < MIN_PATH_SAMPLES {
            return Err(OrbiterError::TooFewPathSamples {
                got: self.path_samples,
                min: MIN_PATH_SAMPLES,
            });
        }

        let mut names = HashSet::new();
        for body in &self.bodies {
            if !names.insert(body.name.as_str()) {
                return Err(OrbiterError::DuplicateBodyName(body.name.clone()));
            }
            body.orbit
                .validate()
                .map_err(|err| OrbiterError::InvalidBody {
                    name: body.name.clone(),
                    source: Box::new(err),
                })?;
        }
        Ok(())
    }

    pub fn propagator(&self) -> Result<OrbitPropagator, OrbiterError> {
        Ok(OrbitPropagator::try_new(self.gravitational_parameter)?.with_frame(self.frame))
    }

    /// Build a ready-to-tick [`Simulation`] holding every configured body.
    pub fn build_simulation(&self) -> Result<Simulation, OrbiterError> {
        let clock = SimulationClock::new(self.start_time, self.time_step)?;
        let mut simulation = Simulation::new(self.propagator()?, clock);
        simulation.set_path_samples(self.path_samples)?;

        for body in &self.bodies {
            simulation.add_body(body.name.clone(), body.orbit.clone())?;
        }
        Ok(simulation)
    }
}

impl FromStr for SystemConfig {
    type Err = OrbiterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}

#[cfg(test)]
mod config_test {
    use super::*;

    const TWO_BODIES: &str = r#"{
        "gravitational_parameter": 1.0,
        "frame": "physical",
        "time_step": 0.5,
        "bodies": [
            { "name": "inner", "orbit": { "model": "keplerian", "a": 1.0, "e": 0.1, "k": 10 } },
            { "name": "outer", "orbit": { "model": "secular",
                "elements": { "a": 4.0, "e": 0.0, "M": 90.0 },
                "rates": { "M_step": 2.0 } } }
        ]
    }"#;

    #[test]
    fn test_defaults() {
        let config: SystemConfig = "{}".parse().unwrap();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_parse_two_bodies() {
        let config = SystemConfig::from_json_str(TWO_BODIES).unwrap();

        assert_eq!(config.gravitational_parameter, 1.0);
        assert_eq!(config.frame, FrameConvention::Physical);
        assert_eq!(config.time_step, 0.5);
        assert_eq!(config.path_samples, DEFAULT_PATH_SAMPLES);
        assert_eq!(config.bodies.len(), 2);
        assert!(config.bodies[1].orbit.is_secular());
    }

    #[test]
    fn test_build_simulation() {
        let config = SystemConfig::from_json_str(TWO_BODIES).unwrap();
        let mut sim = config.build_simulation().unwrap();

        assert_eq!(sim.bodies().len(), 2);
        assert_eq!(sim.propagator().frame, FrameConvention::Physical);
        let frames = sim.tick();
        assert_eq!(frames[0].name, "inner");
        assert_eq!(frames[1].name, "outer");
    }

    #[test]
    fn test_validation_errors() {
        let json = r#"{ "bodies": [
            { "name": "a", "orbit": { "model": "keplerian", "a": 1.0, "e": 0.0 } },
            { "name": "a", "orbit": { "model": "keplerian", "a": 2.0, "e": 0.0 } }
        ] }"#;
        assert_eq!(
            SystemConfig::from_json_str(json).unwrap_err(),
            OrbiterError::DuplicateBodyName("a".into())
        );

        let json = r#"{ "bodies": [
            { "name": "comet", "orbit": { "model": "keplerian", "a": 1.0, "e": 1.0 } }
        ] }"#;
        assert_eq!(
            SystemConfig::from_json_str(json).unwrap_err(),
            OrbiterError::InvalidBody {
                name: "comet".into(),
                source: Box::new(OrbiterError::InvalidEccentricity(1.0)),
            }
        );

        assert_eq!(
            SystemConfig::from_json_str(r#"{ "gravitational_parameter": -3.0 }"#).unwrap_err(),
            OrbiterError::InvalidGravitationalParameter(-3.0)
        );
        assert_eq!(
            SystemConfig::from_json_str(r#"{ "path_samples": 1 }"#).unwrap_err(),
            OrbiterError::TooFewPathSamples { got: 1, min: 2 }
        );
        assert!(matches!(
            SystemConfig::from_json_str("{ not json"),
            Err(OrbiterError::ConfigParseError(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SystemConfig::from_json_str(TWO_BODIES).unwrap();
        let json = config.to_json_string().unwrap();
        assert_eq!(SystemConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = SystemConfig::from_path(Utf8Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, OrbiterError::IoError(_)));
    }
}
