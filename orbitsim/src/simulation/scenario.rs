//! Build simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - numerical parameters (`Parameters`)
//! - initial body states (`BodySpec`s at t = 0)
//!
//! A `Scenario` turns into a running [`Simulator`] with
//! [`Scenario::into_simulator`].

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::constants::{AU, EARTH_MASS, G, SOLAR_MASS};
use crate::simulation::params::Parameters;
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{BodySpec, NVec2};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub bodies: Vec<BodySpec>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: map `BodyConfig` -> `BodySpec` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| body_spec(i, bc))
            .collect::<Result<Vec<_>, _>>()?;

        // Parameters: anything not given keeps the reference default
        let p_cfg = cfg.parameters;
        let defaults = Parameters::default();
        let parameters = Parameters {
            dt: p_cfg.dt.unwrap_or(defaults.dt),
            G: p_cfg.G.unwrap_or(defaults.G),
            r_min: p_cfg.r_min.unwrap_or(defaults.r_min),
            update_mode: p_cfg.update_mode.unwrap_or(defaults.update_mode),
            anchor_distance: p_cfg.anchor_distance.unwrap_or(defaults.anchor_distance),
            trajectory: p_cfg.trajectory.unwrap_or(defaults.trajectory),
        };

        Ok(Self { parameters, bodies })
    }

    /// Sun, Earth, and three light satellites circling Earth at 0.01 AU.
    ///
    /// Satellite 1 sits left of Earth moving with +y, satellite 2 right of
    /// Earth moving with -y, satellite 3 above Earth moving with +x, each at
    /// Earth's velocity plus the circular speed about Earth.
    pub fn three_body_satellites() -> Self {
        let sun = BodySpec::new("Sun", NVec2::zeros(), NVec2::zeros(), SOLAR_MASS).anchor();

        let earth_x = NVec2::new(-AU, 0.0);
        let earth_v = NVec2::new(0.0, 29.78 * 1000.0);
        let earth = BodySpec::new("Earth", earth_x, earth_v, EARTH_MASS);

        let sat_distance = 0.01 * AU;
        let sat_mass = 1e22;
        let sat_speed = (G * EARTH_MASS / sat_distance).sqrt();

        let sat1 = BodySpec::new(
            "Satellite 1",
            earth_x - NVec2::new(sat_distance, 0.0),
            earth_v + NVec2::new(0.0, sat_speed),
            sat_mass,
        );
        let sat2 = BodySpec::new(
            "Satellite 2",
            earth_x + NVec2::new(sat_distance, 0.0),
            earth_v - NVec2::new(0.0, sat_speed),
            sat_mass,
        );
        let sat3 = BodySpec::new(
            "Satellite 3",
            earth_x + NVec2::new(0.0, sat_distance),
            earth_v + NVec2::new(sat_speed, 0.0),
            sat_mass,
        );

        Self {
            parameters: Parameters::default(),
            bodies: vec![sun, earth, sat1, sat2, sat3],
        }
    }

    /// Validate and start the simulation
    pub fn into_simulator(self) -> Result<Simulator, SimError> {
        Simulator::try_new(self.bodies, self.parameters)
    }
}

fn body_spec(i: usize, bc: &BodyConfig) -> Result<BodySpec, SimError> {
    let name = if bc.name.is_empty() {
        format!("body {i}")
    } else {
        bc.name.clone()
    };

    let position = vec2(&name, "x", &bc.x)?;
    let velocity = vec2(&name, "v", &bc.v)?;

    Ok(BodySpec {
        name,
        position,
        velocity,
        mass: bc.m,
        is_anchor: bc.anchor,
    })
}

fn vec2(name: &str, field: &str, xs: &[f64]) -> Result<NVec2, SimError> {
    match xs {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::Config(format!(
            "body `{name}`: `{field}` needs 2 components, got {}",
            xs.len()
        ))),
    }
}
