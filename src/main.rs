use orbitsim::{build_simulator, inner_solar_system, bench_step};
use orbitsim::{ScenarioConfig, Simulator, DAY};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`, the built-in inner solar system when omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Number of steps to run
    #[arg(long, default_value_t = 365)]
    steps: usize,

    /// Log a readout every this many steps
    #[arg(long, default_value_t = 30)]
    report_every: usize,

    /// Override the scenario's speed factor
    #[arg(long)]
    speed: Option<f64>,

    /// Time the step function for growing body counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

/// Textual readout of what a renderer would draw next to each planet
fn report(sim: &Simulator) {
    info!("day {:.0}, speed x{}", sim.time() / DAY, sim.speed_factor());
    for b in sim.bodies().iter().filter(|b| !b.primary) {
        let distance = b.distance_to_primary.map_or(0.0, |d| d / 1000.0);
        info!(
            "  {}: {:.1}km  Vx: {:.2}km/s Vy: {:.2}km/s  orbits: {}",
            b.name,
            distance,
            b.v.x / 1000.0,
            b.v.y / 1000.0,
            b.orbits
        );
    }
}

fn main() -> Result<()> {
    let env = Env::default()
        .filter_or("LOG_LEVEL", "info")
        .write_style_or("LOG_STYLE", "always");
    env_logger::init_from_env(env);

    let args = Args::parse();

    if args.bench {
        bench_step()?;
        return Ok(());
    }

    let scenario_cfg = match &args.file_name {
        Some(name) => load_scenario_from_yaml(name)?,
        None => inner_solar_system(),
    };

    let mut sim = build_simulator(&scenario_cfg)?;
    if let Some(f) = args.speed {
        sim.set_speed_factor(f)?;
    }
    info!("simulating {} bodies for {} steps", sim.bodies().len(), args.steps);

    let every = args.report_every.max(1);
    for i in 1..=args.steps {
        sim.step()?;
        if i % every == 0 {
            report(&sim);
        }
    }
    report(&sim);

    Ok(())
}
