//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, physical constants, update and
//!   bookkeeping options (all optional)
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A Sun/Earth scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 3600.0                  # fixed step, seconds
//!   G: 6.6743e-11               # gravitational constant
//!   r_min: 1.0e9                # softening floor, meters
//!   update_mode: simultaneous   # or "sequential"
//!   anchor_distance: raw        # or "clamped"
//!   trajectory:
//!     policy: ring              # "unbounded", "ring" or "decimate"
//!     capacity: 5000
//!
//! bodies:
//!   - name: Sun
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.98892e30
//!     anchor: true
//!   - name: Earth
//!     x: [ -1.496e11, 0.0 ]
//!     v: [ 0.0, 29780.0 ]
//!     m: 5.9722e24
//! ```
//!
//! Missing parameters fall back to [`Parameters::default`](crate::Parameters).

use serde::Deserialize;

use crate::simulation::trajectory::TrajectoryPolicy;

pub use crate::simulation::params::{AnchorDistance, UpdateMode};

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: Option<f64>, // time step size
    pub G: Option<f64>, // gravitational constant
    pub r_min: Option<f64>, // softening floor
    pub update_mode: Option<UpdateMode>,
    pub anchor_distance: Option<AnchorDistance>,
    pub trajectory: Option<TrajectoryPolicy>,
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String, // display label
    pub x: Vec<f64>, // initial position, meters
    pub v: Vec<f64>, // initial velocity, m/s
    pub m: f64, // mass, kg
    #[serde(default)]
    pub anchor: bool, // distance reference for the other bodies
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}
