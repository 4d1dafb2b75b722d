//! Fixed-step time integrator for the orbit simulation
//!
//! Semi-implicit (symplectic) Euler: velocity is kicked first and the new
//! velocity drifts the position. Forces come precomputed so every body in a
//! step sees the same pre-step snapshot.

use super::forces::NetForce;
use super::states::{Body, NVec2, System};

/// Advance one body by `dt` under `force`, recording the new position
pub fn semi_implicit_euler(body: &mut Body, force: NVec2, dt: f64, trail_limit: Option<usize>) {
    // Kick: v_n+1 = v_n + dt * F/m
    body.v += (force / body.m) * dt;

    // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
    body.x += body.v * dt;

    body.trail.push(body.x);
    if let Some(limit) = trail_limit {
        if body.trail.len() > limit {
            let excess = body.trail.len() - limit;
            body.trail.drain(..excess);
        }
    }
}

/// Apply precomputed forces to every body of `sys`
/// Also stores each body's distance to the primary from the force pass
pub fn integrate(sys: &mut System, forces: &[NetForce], dt: f64, trail_limit: Option<usize>) {
    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        if f.distance_to_primary.is_some() {
            b.distance_to_primary = f.distance_to_primary;
        }
        semi_implicit_euler(b, f.force, dt, trail_limit);
    }
}
