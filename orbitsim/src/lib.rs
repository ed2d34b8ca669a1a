pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodySnapshot, BodySpec, NVec2};
pub use simulation::trajectory::{Trajectory, TrajectoryPolicy};
pub use simulation::forces::{Attraction, ForceLaw, NetForce, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::params::{AnchorDistance, Parameters, UpdateMode};
pub use simulation::simulator::Simulator;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use visualization::headless::{run_headless, RunSummary};

pub use benchmark::benchmark::bench_advance_curve;

pub use error::SimError;
