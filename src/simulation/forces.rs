//! Pairwise Newtonian gravitation for the orbit simulation
//!
//! Direct O(n^2) summation over ordered pairs. Every body's net force is
//! evaluated against the same snapshot of the system, results go into an
//! output buffer and are applied afterwards by the integrator.

use crate::simulation::error::SimError;
use crate::simulation::params::G;
use crate::simulation::states::{Body, NVec2, System};

/// Net force on one body plus the separation to the primary seen while summing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetForce {
    pub force: NVec2,
    pub distance_to_primary: Option<f64>,
}

/// Gravitational pull of `other` on `body`
///
/// Returns the force vector and the separation between the two. Coincident
/// bodies have no defined force and are rejected instead of producing NaN.
pub fn attraction(body: &Body, other: &Body) -> Result<(NVec2, f64), SimError> {
    // r points from body to other, the pull is along +r
    let r = other.x - body.x;
    let distance = r.norm();
    if distance == 0.0 {
        return Err(SimError::CoincidentBodies {
            first: body.name.clone(),
            second: other.name.clone(),
        });
    }

    let magnitude = G * body.m * other.m / (distance * distance);
    let theta = r.y.atan2(r.x);

    Ok((NVec2::new(theta.cos() * magnitude, theta.sin() * magnitude), distance))
}

/// Sum the pull of every other body on body `i`
pub fn net_force(i: usize, sys: &System) -> Result<NetForce, SimError> {
    let body = &sys.bodies[i];
    let mut net = NetForce::default();

    for (j, other) in sys.bodies.iter().enumerate() {
        if i == j {
            continue;
        }

        let (f, distance) = attraction(body, other)?;
        if other.primary {
            net.distance_to_primary = Some(distance);
        }
        net.force += f;
    }

    Ok(net)
}

/// Compute net forces for all bodies in `sys`
/// - `out[i]` will be overwritten with the result for body `i`
pub fn accumulate_forces(sys: &System, out: &mut [NetForce]) -> Result<(), SimError> {
    for (i, slot) in out.iter_mut().enumerate().take(sys.bodies.len()) {
        *slot = net_force(i, sys)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pair(d: f64) -> System {
        System {
            bodies: vec![
                Body::new("a", NVec2::new(0.0, 0.0), NVec2::zeros(), 2.0e20, 1.0).as_primary(),
                Body::new("b", NVec2::new(d, 0.0), NVec2::zeros(), 3.0e10, 1.0),
            ],
            t: 0.0,
        }
    }

    #[test]
    fn magnitude_matches_inverse_square() {
        let sys = pair(1.0e5);
        let (f, d) = attraction(&sys.bodies[1], &sys.bodies[0]).unwrap();

        assert_relative_eq!(d, 1.0e5);
        assert_relative_eq!(f.norm(), G * 2.0e20 * 3.0e10 / 1.0e10, max_relative = 1e-12);
        // b sits on +x, so the pull on it points to -x
        assert!(f.x < 0.0);
    }

    #[test]
    fn primary_distance_recorded_only_for_others() {
        let sys = pair(4.0e5);
        let mut out = vec![NetForce::default(); 2];
        accumulate_forces(&sys, &mut out).unwrap();

        assert_eq!(out[0].distance_to_primary, None);
        assert_eq!(out[1].distance_to_primary, Some(4.0e5));
    }

    #[test]
    fn coincident_bodies_rejected() {
        let sys = pair(0.0);
        let err = net_force(0, &sys).unwrap_err();
        assert!(matches!(err, SimError::CoincidentBodies { .. }));
    }
}
