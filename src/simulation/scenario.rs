//! Build fully-initialized simulators from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! [`Simulator`] with bodies at t = 0. Also provides the built-in inner
//! solar system used when no scenario file is given.

use crate::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
use crate::simulation::error::SimError;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{Body, NVec2};

/// Validate a scenario and turn it into a ready-to-step simulator
pub fn build_simulator(cfg: &ScenarioConfig) -> Result<Simulator, SimError> {
    // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
    let bodies = cfg
        .bodies
        .iter()
        .map(build_body)
        .collect::<Result<Vec<_>, _>>()?;

    let parameters = Parameters {
        speed_factor: cfg.parameters.speed_factor,
        trail_limit: cfg.parameters.trail_limit,
    };

    Simulator::new(bodies, parameters)
}

fn build_body(bc: &BodyConfig) -> Result<Body, SimError> {
    let x = vec2(&bc.name, "x", &bc.x)?;
    let v = vec2(&bc.name, "v", &bc.v)?;

    let mut body = Body::new(bc.name.clone(), x, v, bc.m, bc.radius);
    body.primary = bc.primary;
    Ok(body)
}

fn vec2(body: &str, field: &'static str, c: &[f64]) -> Result<NVec2, SimError> {
    match c {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::InvalidVector {
            body: body.to_string(),
            field,
            len: c.len(),
        }),
    }
}

/// Sun plus the four inner planets, each starting on the x-axis with a
/// purely tangential velocity
pub fn inner_solar_system() -> ScenarioConfig {
    let planet = |name: &str, au: f64, vy_km_s: f64, m: f64, radius: f64| BodyConfig {
        name: name.to_string(),
        x: vec![au * AU, 0.0],
        v: vec![0.0, vy_km_s * 1000.0],
        m,
        radius,
        primary: false,
    };

    let sun = BodyConfig {
        name: "Sun".to_string(),
        x: vec![0.0, 0.0],
        v: vec![0.0, 0.0],
        m: 1.98892e30,
        radius: 30.0,
        primary: true,
    };

    ScenarioConfig {
        parameters: ParametersConfig::default(),
        bodies: vec![
            sun,
            planet("Earth", -1.0, 29.783, 5.9742e24, 16.0),
            planet("Mars", -1.524, 24.077, 6.39e23, 12.0),
            planet("Mercury", 0.387, -47.4, 3.30e23, 8.0),
            planet("Venus", 0.723, -35.02, 4.8685e24, 14.0),
        ],
    }
}
