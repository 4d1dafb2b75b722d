use std::time::Instant;

use crate::simulation::error::SimError;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{Body, NVec2};

/// Helper to build a ring of `n` planets around a primary
/// deterministic positions, no rand needed
fn make_bodies(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n + 1);
    bodies.push(Body::new("star", NVec2::zeros(), NVec2::zeros(), 1.98892e30, 1.0).as_primary());

    for i in 0..n {
        let i_f = i as f64;
        let r = AU * (0.5 + (i_f * 0.37).sin().abs() * 2.0);
        let phi = i_f * 0.13;
        let speed = 29783.0 * (AU / r).sqrt();

        bodies.push(Body::new(
            format!("p{i}"),
            NVec2::new(r * phi.cos(), r * phi.sin()),
            NVec2::new(-speed * phi.sin(), speed * phi.cos()),
            1.0e23,
            1.0,
        ));
    }

    bodies
}

/// Time `Simulator::step` for a range of n
/// Paste output directly into excel to graph
pub fn bench_step() -> Result<(), SimError> {
    println!("N,step_ms");

    for n in [50, 100, 200, 400, 800] {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 200 { 50 } else { 5 };

        let mut sim = Simulator::new(make_bodies(n), Parameters::default())?;

        // Warm-up
        sim.step()?;

        let t0 = Instant::now();
        sim.run(steps)?;
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }

    Ok(())
}
