//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – runtime knobs (speed factor, trail cap)
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! The gravitational constant and the one-day base step are fixed and cannot
//! be set from a scenario.
//!
//! # YAML format
//! All quantities are SI: meters, meters per second, kilograms.
//!
//! ```yaml
//! parameters:
//!   speed_factor: 1.0       # multiplier on the one-day step
//!   trail_limit: ~          # ~ keeps the full trail
//!
//! bodies:
//!   - name: Sun
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.98892e30
//!     radius: 30.0
//!     primary: true
//!   - name: Earth
//!     x: [ -1.496e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//!     m: 5.9742e24
//!     radius: 16.0
//! ```

use serde::Deserialize;

/// Runtime parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_speed_factor")]
    pub speed_factor: f64, // multiplier on the base step
    #[serde(default)]
    pub trail_limit: Option<usize>, // max positions kept per body
}

fn default_speed_factor() -> f64 {
    1.0
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            speed_factor: default_speed_factor(),
            trail_limit: None,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: Vec<f64>, // Initial position (m), two components
    pub v: Vec<f64>, // Initial velocity (m/s), two components
    pub m: f64,      // Mass (kg)
    #[serde(default)]
    pub radius: f64, // Display radius, ignored by the physics
    #[serde(default)]
    pub primary: bool, // Central body distances are reported against
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_default_when_missing() {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - name: Sun\n    x: [0.0, 0.0]\n    v: [0.0, 0.0]\n    m: 1.0\n    primary: true\n",
        )
        .unwrap();

        assert_eq!(cfg.parameters.speed_factor, 1.0);
        assert_eq!(cfg.parameters.trail_limit, None);
        assert!(cfg.bodies[0].primary);
        assert_eq!(cfg.bodies[0].radius, 0.0);
    }

    #[test]
    fn reads_parameters() {
        let cfg = ScenarioConfig::from_yaml_str(
            "parameters:\n  speed_factor: 4.0\n  trail_limit: 100\nbodies: []\n",
        )
        .unwrap();

        assert_eq!(cfg.parameters.speed_factor, 4.0);
        assert_eq!(cfg.parameters.trail_limit, Some(100));
        assert!(cfg.bodies.is_empty());
    }
}
