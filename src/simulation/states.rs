//! Core state types for the orbit simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body`   one point mass plus its derived orbital statistics
//! - `System` the ordered list of bodies and the current simulated time `t`
//!
//! Bodies are owned by the system and mutated in place by the simulator;
//! a driver only ever reads them.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // display label, opaque to physics
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg)
    pub radius: f64, // presentation size, opaque to physics
    pub primary: bool, // the central mass distances are measured against
    pub distance_to_primary: Option<f64>, // set during force computation, None for the primary
    pub trail: Vec<NVec2>, // past positions, oldest first
    pub orbits: u32, // completed revolutions around the origin
    pub prev_angle: Option<f64>, // polar angle of the last position
}

impl Body {
    /// Fresh body with empty trail and no orbit history
    pub fn new(name: impl Into<String>, x: NVec2, v: NVec2, m: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            x,
            v,
            m,
            radius,
            primary: false,
            distance_to_primary: None,
            trail: Vec::new(),
            orbits: 0,
            prev_angle: None,
        }
    }

    /// Mark this body as the primary
    pub fn as_primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // fixed membership after construction
    pub t: f64, // simulated seconds
}

impl System {
    pub fn primary(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.primary)
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }
}
