//! Simulation driver
//!
//! `Simulator` owns the system, the runtime parameters and the pause flag.
//! A host calls [`Simulator::step`] once per tick and reads the bodies back
//! for display. User input reaches the core as [`Command`]s.

use log::{debug, trace, warn};

use crate::simulation::error::SimError;
use crate::simulation::forces::{accumulate_forces, NetForce};
use crate::simulation::integrator::integrate;
use crate::simulation::orbit::track_revolution;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};

/// Control requests a presentation layer maps its input onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    SpeedUp, // double the speed factor
    SlowDown, // halve the speed factor
}

#[derive(Debug, Clone)]
pub struct Simulator {
    system: System,
    parameters: Parameters,
    paused: bool,
    forces: Vec<NetForce>, // scratch buffer reused across steps
}

impl Simulator {
    /// Build a simulator at t = 0 from the initial bodies
    ///
    /// Rejects non-positive masses, more than one primary and a non-positive
    /// speed factor.
    pub fn new(bodies: Vec<Body>, parameters: Parameters) -> Result<Self, SimError> {
        validate_speed_factor(parameters.speed_factor)?;

        let mut primary: Option<&Body> = None;
        for b in &bodies {
            if !(b.m > 0.0 && b.m.is_finite()) {
                return Err(SimError::InvalidMass {
                    body: b.name.clone(),
                    mass: b.m,
                });
            }
            if b.primary {
                if let Some(p) = primary {
                    return Err(SimError::MultiplePrimaries {
                        first: p.name.clone(),
                        second: b.name.clone(),
                    });
                }
                primary = Some(b);
            }
        }

        let n = bodies.len();
        Ok(Self {
            system: System { bodies, t: 0.0 },
            parameters,
            paused: false,
            forces: vec![NetForce::default(); n],
        })
    }

    /// Advance every body by one step of `DAY * speed_factor`
    ///
    /// No-op while paused. Forces for all bodies are computed from the
    /// pre-step state before anything is moved, so a coincident pair fails
    /// the step without touching the system.
    pub fn step(&mut self) -> Result<(), SimError> {
        if self.paused {
            return Ok(());
        }

        if let Err(e) = accumulate_forces(&self.system, &mut self.forces) {
            warn!("step at t = {} s rejected: {e}", self.system.t);
            return Err(e);
        }

        let dt = self.parameters.dt();
        integrate(&mut self.system, &self.forces, dt, self.parameters.trail_limit);
        for b in self.system.bodies.iter_mut() {
            track_revolution(b);
        }

        self.system.t += dt;
        trace!("stepped to t = {} s (dt = {dt} s)", self.system.t);
        Ok(())
    }

    /// Run `n` steps, stopping at the first error
    pub fn run(&mut self, n: usize) -> Result<(), SimError> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    pub fn set_speed_factor(&mut self, factor: f64) -> Result<(), SimError> {
        validate_speed_factor(factor)?;
        debug!("speed factor {} -> {factor}", self.parameters.speed_factor);
        self.parameters.speed_factor = factor;
        Ok(())
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!("{}", if self.paused { "paused" } else { "resumed" });
    }

    /// Route a user command to the matching control
    pub fn apply(&mut self, command: Command) -> Result<(), SimError> {
        match command {
            Command::TogglePause => {
                self.toggle_pause();
                Ok(())
            }
            Command::SpeedUp => self.set_speed_factor(self.parameters.speed_factor * 2.0),
            Command::SlowDown => self.set_speed_factor(self.parameters.speed_factor / 2.0),
        }
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    /// Simulated seconds since construction
    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn speed_factor(&self) -> f64 {
        self.parameters.speed_factor
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

fn validate_speed_factor(factor: f64) -> Result<(), SimError> {
    if factor > 0.0 && factor.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidSpeedFactor { factor })
    }
}
