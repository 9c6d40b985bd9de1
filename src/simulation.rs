//! # Simulation driver
//!
//! Replaces the host engine's per-frame callbacks with an explicit clock and an explicit
//! [`Simulation::tick`]. Whatever drives the simulation (a game loop, a timer, a test)
//! calls `tick` once per frame and receives one [`BodyFrame`] per body.
//!
//! Each body owns its motion model exclusively:
//!
//! - **Keplerian** bodies are evaluated at the clock time; their orbit path is sampled
//!   once when the body is added, since it depends on the elements only.
//! - **Secular** bodies are stepped by the tick increment; their state accumulates drift
//!   for the lifetime of the simulation.
//!
//! ```rust
//! use orbiter::orbit_type::keplerian_element::OrbitalElements;
//! use orbiter::propagator::OrbitPropagator;
//! use orbiter::simulation::{Simulation, SimulationClock};
//!
//! let mut sim = Simulation::new(OrbitPropagator::new(1.0), SimulationClock::default());
//! sim.add_body("probe", OrbitalElements::default()).unwrap();
//!
//! let frames = sim.tick();
//! assert_eq!(frames[0].name, "probe");
//! ```

use crate::{
    constants::{Position, DEFAULT_PATH_SAMPLES, DEFAULT_TIME_STEP, MIN_PATH_SAMPLES},
    orbit_type::BodyOrbit,
    orbiter_errors::OrbiterError,
    propagator::OrbitPropagator,
    secular_propagator::SecularPropagator,
};

/// Externally advanced simulation time.
///
/// Time only moves forward: the default increment and every explicit increment must be
/// finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    time: f64,
    time_step: f64,
}

impl Default for SimulationClock {
    /// Starts at `t = 0` with a step of [`DEFAULT_TIME_STEP`].
    fn default() -> Self {
        SimulationClock {
            time: 0.0,
            time_step: DEFAULT_TIME_STEP,
        }
    }
}

impl SimulationClock {
    pub fn new(start_time: f64, time_step: f64) -> Result<Self, OrbiterError> {
        if !start_time.is_finite() {
            return Err(OrbiterError::NonFiniteElement {
                name: "start_time",
                value: start_time,
            });
        }
        check_step(time_step)?;
        Ok(SimulationClock {
            time: start_time,
            time_step,
        })
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Advance by the default step and return the new time.
    pub fn tick(&mut self) -> f64 {
        self.time += self.time_step;
        self.time
    }

    /// Advance by `dt` and return the new time.
    pub fn tick_by(&mut self, dt: f64) -> Result<f64, OrbiterError> {
        check_step(dt)?;
        self.time += dt;
        Ok(self.time)
    }
}

fn check_step(dt: f64) -> Result<(), OrbiterError> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(())
    } else {
        Err(OrbiterError::InvalidTimeStep(dt))
    }
}

/// A named body of the simulated system.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub orbit: BodyOrbit,
    path: Option<Vec<Position>>,
}

impl Body {
    /// Cached orbit polyline, available for Keplerian bodies only.
    pub fn path(&self) -> Option<&[Position]> {
        self.path.as_deref()
    }
}

/// Position of one body at one tick, as handed to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFrame<'a> {
    pub name: &'a str,
    pub position: Position,
    pub visual_scale: Option<f64>,
}

/// A primary and the bodies orbiting it.
#[derive(Debug, Clone)]
pub struct Simulation {
    propagator: OrbitPropagator,
    secular: SecularPropagator,
    clock: SimulationClock,
    path_samples: usize,
    bodies: Vec<Body>,
}

impl Simulation {
    /// Empty simulation. Secular bodies share the frame convention of `propagator`.
    pub fn new(propagator: OrbitPropagator, clock: SimulationClock) -> Self {
        Simulation {
            propagator,
            secular: SecularPropagator::new(propagator.frame),
            clock,
            path_samples: DEFAULT_PATH_SAMPLES,
            bodies: Vec::new(),
        }
    }

    /// Change the number of samples of the cached orbit paths.
    ///
    /// Paths of bodies already added are resampled.
    pub fn set_path_samples(&mut self, samples: usize) -> Result<(), OrbiterError> {
        if samples < MIN_PATH_SAMPLES {
            return Err(OrbiterError::TooFewPathSamples {
                got: samples,
                min: MIN_PATH_SAMPLES,
            });
        }
        self.path_samples = samples;
        for body in &mut self.bodies {
            if let BodyOrbit::Keplerian(elements) = &body.orbit {
                body.path = Some(self.propagator.compute_path(elements, samples));
            }
        }
        Ok(())
    }

    /// Validate and add a body.
    ///
    /// Errors
    /// ------
    /// * [`OrbiterError::DuplicateBodyName`] if the name is taken.
    /// * [`OrbiterError::InvalidBody`] wrapping the validation error of the orbit.
    pub fn add_body(
        &mut self,
        name: impl Into<String>,
        orbit: impl Into<BodyOrbit>,
    ) -> Result<(), OrbiterError> {
        let name = name.into();
        let orbit = orbit.into();

        if self.body(&name).is_some() {
            log::warn!("Body `{name}` is already part of the system");
            return Err(OrbiterError::DuplicateBodyName(name));
        }
        if let Err(err) = orbit.validate() {
            log::warn!("Body `{name}` rejected: {err}");
            return Err(OrbiterError::InvalidBody {
                name,
                source: Box::new(err),
            });
        }

        let path = match &orbit {
            BodyOrbit::Keplerian(elements) => {
                Some(self.propagator.compute_path(elements, self.path_samples))
            }
            BodyOrbit::Secular(_) => None,
        };

        log::debug!(
            "Added {} body `{name}`",
            if orbit.is_secular() { "secular" } else { "keplerian" }
        );
        self.bodies.push(Body { name, orbit, path });
        Ok(())
    }

    /// Remove a body, returning it when it was present.
    pub fn remove_body(&mut self, name: &str) -> Option<Body> {
        let index = self.bodies.iter().position(|body| body.name == name)?;
        Some(self.bodies.remove(index))
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|body| body.name == name)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn propagator(&self) -> &OrbitPropagator {
        &self.propagator
    }

    /// Advance the clock by its default step and move every body.
    pub fn tick(&mut self) -> Vec<BodyFrame<'_>> {
        let dt = self.clock.time_step();
        self.clock.tick();
        self.advance_bodies(dt)
    }

    /// Advance the clock by `dt` and move every body.
    pub fn tick_by(&mut self, dt: f64) -> Result<Vec<BodyFrame<'_>>, OrbiterError> {
        self.clock.tick_by(dt)?;
        Ok(self.advance_bodies(dt))
    }

    /// Positions at the current time, without moving anything.
    pub fn snapshot(&self) -> Vec<BodyFrame<'_>> {
        let time = self.clock.time();
        self.bodies
            .iter()
            .map(|body| {
                let position = match &body.orbit {
                    BodyOrbit::Keplerian(elements) => self.propagator.eval_position(elements, time),
                    BodyOrbit::Secular(state) => self.secular.position(state),
                };
                frame_of(body, position)
            })
            .collect()
    }

    fn advance_bodies(&mut self, dt: f64) -> Vec<BodyFrame<'_>> {
        let time = self.clock.time();
        log::trace!("tick t = {time} (dt = {dt}), {} bodies", self.bodies.len());

        let propagator = self.propagator;
        let secular = self.secular;
        for body in &mut self.bodies {
            if let BodyOrbit::Secular(state) = &mut body.orbit {
                secular.step(state, dt);
            }
        }

        self.bodies
            .iter()
            .map(|body| {
                let position = match &body.orbit {
                    BodyOrbit::Keplerian(elements) => propagator.eval_position(elements, time),
                    BodyOrbit::Secular(state) => secular.position(state),
                };
                frame_of(body, position)
            })
            .collect()
    }
}

fn frame_of(body: &Body, position: Position) -> BodyFrame<'_> {
    BodyFrame {
        name: &body.name,
        position,
        visual_scale: body.orbit.visual_scale(),
    }
}
