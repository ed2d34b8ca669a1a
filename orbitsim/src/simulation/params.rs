//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size `dt`,
//! - gravitational constant and softening floor (`G`, `r_min`),
//! - update ordering within a step,
//! - which distance is reported to anchors,
//! - trajectory retention

use serde::Deserialize;

use crate::error::SimError;

use super::constants;
use super::trajectory::TrajectoryPolicy;

/// Ordering of updates within one step
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// All forces from pre-step positions, then commit every body
    #[default]
    #[serde(rename = "simultaneous")]
    Simultaneous,

    /// Bodies updated in place in collection order; later bodies see earlier
    /// bodies' new positions within the same step
    #[serde(rename = "sequential")]
    Sequential,
}

/// Separation reported as a body's anchor distance
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorDistance {
    /// The true, unclamped distance
    #[default]
    #[serde(rename = "raw")]
    Raw,

    /// The distance after the softening floor is applied
    #[serde(rename = "clamped")]
    Clamped,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size, seconds
    pub G: f64, // gravitational constant
    pub r_min: f64, // softening floor on separation
    pub update_mode: UpdateMode,
    pub anchor_distance: AnchorDistance,
    pub trajectory: TrajectoryPolicy,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: constants::TIMESTEP,
            G: constants::G,
            r_min: constants::SOFTENING_DISTANCE,
            update_mode: UpdateMode::default(),
            anchor_distance: AnchorDistance::default(),
            trajectory: TrajectoryPolicy::default(),
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::param("dt", format!("must be finite and > 0, got {}", self.dt)));
        }
        if !(self.G.is_finite() && self.G > 0.0) {
            return Err(SimError::param("G", format!("must be finite and > 0, got {}", self.G)));
        }
        if !(self.r_min.is_finite() && self.r_min >= 0.0) {
            return Err(SimError::param("r_min", format!("must be finite and >= 0, got {}", self.r_min)));
        }
        match self.trajectory {
            TrajectoryPolicy::Ring { capacity: 0 } => {
                Err(SimError::param("trajectory", "ring capacity must be at least 1"))
            }
            TrajectoryPolicy::Decimate { every: 0 } => {
                Err(SimError::param("trajectory", "decimation stride must be at least 1"))
            }
            _ => Ok(()),
        }
    }
}
