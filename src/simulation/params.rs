//! Numerical and physical parameters for the simulation
//!
//! The gravitational constant and the base step are process-wide constants.
//! `Parameters` holds the runtime settings a driver may change:
//! - speed multiplier applied to the base step,
//! - optional cap on the stored trail length

/// Gravitational constant (N m^2 / kg^2)
pub const G: f64 = 6.67428e-11;

/// Astronomical unit (m)
pub const AU: f64 = 149.6e6 * 1000.0;

/// Base integration step, one simulated day (s)
pub const DAY: f64 = 3600.0 * 24.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub speed_factor: f64, // multiplier on DAY
    pub trail_limit: Option<usize>, // None keeps every position
}

impl Parameters {
    /// Effective step for the current speed factor
    pub fn dt(&self) -> f64 {
        DAY * self.speed_factor
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            speed_factor: 1.0,
            trail_limit: None,
        }
    }
}
