//! The simulator: owns the bodies, the force law and the parameters, and
//! exposes the one control operation a driver needs, [`Simulator::advance`].

use log::{debug, trace, warn};

use crate::error::SimError;

use super::forces::{ForceLaw, NewtonianGravity};
use super::integrator::semi_implicit_euler;
use super::params::Parameters;
use super::states::{Body, BodySnapshot, BodySpec, NVec2, System};

pub struct Simulator {
    system: System,
    forces: Box<dyn ForceLaw + Send + Sync>,
    parameters: Parameters,
    non_finite_seen: bool,
}

impl Simulator {
    /// Build a simulator without checking the bodies or parameters.
    ///
    /// Zero or negative masses and non-finite coordinates are accepted and
    /// produce non-finite state once stepped. Use [`Simulator::try_new`] to
    /// reject them up front.
    pub fn new(specs: Vec<BodySpec>, parameters: Parameters) -> Self {
        let policy = parameters.trajectory;
        let bodies: Vec<Body> = specs
            .into_iter()
            .map(|spec| Body::from_spec(spec, policy))
            .collect();

        let forces = NewtonianGravity::new(parameters.G, parameters.r_min);

        debug!(
            "simulator: {} bodies, dt = {} s, r_min = {} m, {:?} updates",
            bodies.len(),
            parameters.dt,
            parameters.r_min,
            parameters.update_mode
        );

        Self {
            system: System {
                bodies,
                t: 0.0,
                steps: 0,
            },
            forces: Box::new(forces),
            parameters,
            non_finite_seen: false,
        }
    }

    /// Build a simulator after checking every body and parameter
    pub fn try_new(specs: Vec<BodySpec>, parameters: Parameters) -> Result<Self, SimError> {
        parameters.validate()?;
        for spec in &specs {
            validate_body(spec)?;
        }
        Ok(Self::new(specs, parameters))
    }

    /// Replace the force law.
    ///
    /// Anchor distances keep following `parameters.anchor_distance`; the law
    /// only has to report both the true and the clamped separation.
    pub fn with_force_law<F>(mut self, law: F) -> Self
    where
        F: ForceLaw + Send + Sync + 'static,
    {
        self.forces = Box::new(law);
        self
    }

    /// Advance every body by one fixed step
    pub fn advance(&mut self) {
        semi_implicit_euler(&mut self.system, self.forces.as_ref(), &self.parameters);
        trace!("step {} t = {} s", self.system.steps, self.system.t);

        if !self.non_finite_seen {
            if let Some(b) = self.system.bodies.iter().find(|b| !b.is_finite()) {
                warn!(
                    "body `{}` reached a non-finite state at step {}",
                    b.name(),
                    self.system.steps
                );
                self.non_finite_seen = true;
            }
        }
    }

    pub fn advance_by(&mut self, steps: u64) {
        for _ in 0..steps {
            self.advance();
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn body(&self, i: usize) -> Option<&Body> {
        self.system.bodies.get(i)
    }

    pub fn body_by_name(&self, name: &str) -> Option<&Body> {
        self.system.bodies.iter().find(|b| b.name() == name)
    }

    /// Whether any body has reached a non-finite position or velocity.
    /// Set once, together with the warning logged at that step.
    pub fn went_non_finite(&self) -> bool {
        self.non_finite_seen
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Simulated seconds since construction
    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn steps(&self) -> u64 {
        self.system.steps
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.system.bodies.iter().map(Body::snapshot).collect()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.system
            .bodies
            .iter()
            .map(Body::momentum)
            .fold(NVec2::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.system.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn potential_energy(&self) -> f64 {
        self.forces.potential_energy(&self.system.bodies)
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    /// Mass-weighted mean position, `None` when total mass is zero
    pub fn center_of_mass(&self) -> Option<NVec2> {
        let total: f64 = self.system.bodies.iter().map(Body::mass).sum();
        if total == 0.0 {
            return None;
        }
        let weighted = self
            .system
            .bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.position() * b.mass());
        Some(weighted / total)
    }
}

fn validate_body(spec: &BodySpec) -> Result<(), SimError> {
    if !spec.mass.is_finite() {
        return Err(SimError::body(&spec.name, format!("mass is not finite ({})", spec.mass)));
    }
    if spec.mass <= 0.0 {
        return Err(SimError::body(&spec.name, format!("mass must be > 0, got {}", spec.mass)));
    }
    if !spec.position.iter().all(|c| c.is_finite()) {
        return Err(SimError::body(&spec.name, "position is not finite"));
    }
    if !spec.velocity.iter().all(|c| c.is_finite()) {
        return Err(SimError::body(&spec.name, "velocity is not finite"));
    }
    Ok(())
}
