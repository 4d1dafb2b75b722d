pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::{Parameters, G, AU, DAY};
pub use simulation::error::SimError;
pub use simulation::forces::{attraction, net_force, accumulate_forces, NetForce};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::simulator::{Simulator, Command};
pub use simulation::scenario::{build_simulator, inner_solar_system};

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_step;
