//! Core state types for the simulation.
//!
//! - `BodySpec`     initial conditions handed to the simulator
//! - `Body`         the live per-body record the integrator mutates
//! - `System`       the ordered body collection plus simulated time
//! - `BodySnapshot` owned copy of a body's display data
//!
//! Positions are in meters, velocities in m/s, masses in kg.

use nalgebra::Vector2;

use super::trajectory::{Trajectory, TrajectoryPolicy};

pub type NVec2 = Vector2<f64>;

/// Initial conditions for one body
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub name: String,
    pub position: NVec2,
    pub velocity: NVec2,
    pub mass: f64,
    pub is_anchor: bool,
}

impl BodySpec {
    pub fn new(name: impl Into<String>, position: NVec2, velocity: NVec2, mass: f64) -> Self {
        Self {
            name: name.into(),
            position,
            velocity,
            mass,
            is_anchor: false,
        }
    }

    /// Mark this body as the anchor other bodies measure their distance to
    pub fn anchor(mut self) -> Self {
        self.is_anchor = true;
        self
    }
}

/// One simulated point mass.
///
/// Kinematic fields are only writable from inside the crate; the presentation
/// side gets read accessors.
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) name: String,
    pub(crate) position: NVec2,
    pub(crate) velocity: NVec2,
    mass: f64,
    is_anchor: bool,
    pub(crate) trajectory: Trajectory,
    pub(crate) last_anchor_distance: Option<f64>,
}

impl Body {
    pub(crate) fn from_spec(spec: BodySpec, policy: TrajectoryPolicy) -> Self {
        Self {
            name: spec.name,
            position: spec.position,
            velocity: spec.velocity,
            mass: spec.mass,
            is_anchor: spec.is_anchor,
            trajectory: Trajectory::new(policy),
            last_anchor_distance: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> NVec2 {
        self.position
    }

    pub fn velocity(&self) -> NVec2 {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn is_anchor(&self) -> bool {
        self.is_anchor
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Distance to the nearest anchor as measured during the last step.
    /// `None` before the first step or when no other body is an anchor.
    pub fn last_anchor_distance(&self) -> Option<f64> {
        self.last_anchor_distance
    }

    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).norm()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.position.iter().chain(self.velocity.iter()).all(|c| c.is_finite())
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            name: self.name.clone(),
            position: self.position,
            is_anchor: self.is_anchor,
            last_anchor_distance: self.last_anchor_distance,
            trajectory: self.trajectory.to_vec(),
        }
    }
}

/// Plain-data copy of what a renderer needs from a body
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub name: String,
    pub position: NVec2,
    pub is_anchor: bool,
    pub last_anchor_distance: Option<f64>,
    pub trajectory: Vec<NVec2>,
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // fixed membership after construction
    pub t: f64, // simulated seconds
    pub steps: u64, // completed advance() calls
}
