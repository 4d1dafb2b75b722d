//! Errors surfaced by the simulation core
//!
//! Configuration errors are raised at construction or when the speed factor
//! changes. `CoincidentBodies` is raised by a step and leaves the state
//! untouched, so a driver can halt or skip.

use std::error::Error;
use std::fmt;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Two bodies share a position, the force between them is undefined
    CoincidentBodies { first: String, second: String },
    InvalidMass { body: String, mass: f64 },
    InvalidSpeedFactor { factor: f64 },
    MultiplePrimaries { first: String, second: String },
    /// Config vector with the wrong number of components
    InvalidVector { body: String, field: &'static str, len: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::CoincidentBodies { first, second } => write!(
                f,
                "bodies {first} and {second} are coincident, gravitational force is undefined"
            ),
            SimError::InvalidMass { body, mass } => {
                write!(f, "body {body} has mass {mass}, mass must be positive")
            }
            SimError::InvalidSpeedFactor { factor } => {
                write!(f, "speed factor {factor} rejected, it must be positive and finite")
            }
            SimError::MultiplePrimaries { first, second } => write!(
                f,
                "both {first} and {second} are flagged primary, at most one is allowed"
            ),
            SimError::InvalidVector { body, field, len } => write!(
                f,
                "body {body}: `{field}` has {len} components, expected 2"
            ),
        }
    }
}

impl Error for SimError {}
