//! Revolution counting by polar-angle crossing
//!
//! A revolution is counted whenever the position angle about the origin goes
//! from negative to non-negative between two steps. That fires once per
//! counter-clockwise pass through angle 0, and also once per clockwise pass
//! across the ±π cut on the negative x-axis. Orbits not centred on the origin
//! are miscounted; the heuristic is kept as is.

use super::states::Body;

/// Whether moving from `prev` to `angle` counts as a completed revolution
pub fn crossed(prev: Option<f64>, angle: f64) -> bool {
    matches!(prev, Some(p) if p < 0.0 && angle >= 0.0)
}

/// Update `body.orbits` and `body.prev_angle` from its current position
pub fn track_revolution(body: &mut Body) {
    let angle = body.x.y.atan2(body.x.x);
    if crossed(body.prev_angle, angle) {
        body.orbits += 1;
    }
    body.prev_angle = Some(angle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::NVec2;
    use std::f64::consts::PI;

    fn walk(body: &mut Body, angles: impl IntoIterator<Item = f64>) {
        for a in angles {
            body.x = NVec2::new(a.cos(), a.sin());
            track_revolution(body);
        }
    }

    #[test]
    fn first_position_only_seeds() {
        let mut b = Body::new("p", NVec2::new(1.0, 0.0), NVec2::zeros(), 1.0, 1.0);
        track_revolution(&mut b);
        assert_eq!(b.orbits, 0);
        assert_eq!(b.prev_angle, Some(0.0));
    }

    #[test]
    fn counter_clockwise_through_zero_counts_once() {
        let mut b = Body::new("p", NVec2::zeros(), NVec2::zeros(), 1.0, 1.0);
        // pi/2 -> pi -> -pi -> 0 -> pi/4, in 24 slices
        walk(&mut b, (0..=21).map(|k| PI / 2.0 + k as f64 * PI / 12.0));
        assert_eq!(b.orbits, 1);
    }

    #[test]
    fn clockwise_through_zero_does_not_count() {
        let mut b = Body::new("p", NVec2::zeros(), NVec2::zeros(), 1.0, 1.0);
        // pi/2 -> 0 -> -pi/2, never reaching the negative x-axis
        walk(&mut b, (0..=12).map(|k| PI / 2.0 - k as f64 * PI / 12.0));
        assert_eq!(b.orbits, 0);
    }

    #[test]
    fn crossing_predicate() {
        assert!(!crossed(None, 0.0));
        assert!(crossed(Some(-0.1), 0.0));
        assert!(!crossed(Some(0.1), -0.1));
        assert!(!crossed(Some(-0.2), -0.1));
    }
}
