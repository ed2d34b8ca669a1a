pub mod constants;
pub mod states;
pub mod trajectory;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod simulator;
pub mod scenario;
