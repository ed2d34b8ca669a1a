//! Pairwise force law for the engine
//!
//! Defines the [`ForceLaw`] trait and the softened Newtonian gravity that
//! implements it. Net forces are a direct O(n^2) sum over all other bodies.

use crate::simulation::params::AnchorDistance;
use crate::simulation::states::{Body, NVec2};

/// Result of evaluating the force law for one (subject, source) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    pub force: NVec2, // force on the subject, pointing toward the source
    pub distance: f64, // true separation
    pub clamped_distance: f64, // separation actually used for the magnitude
}

/// Net force on one body plus the anchor distance seen while summing it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetForce {
    pub force: NVec2,
    pub anchor_distance: Option<f64>,
}

/// A pairwise central force between point masses
pub trait ForceLaw {
    /// Force exerted on `subject` by `source`
    fn attraction(&self, subject: &Body, source: &Body) -> Attraction;

    /// Potential energy of the pair, consistent with [`ForceLaw::attraction`]
    fn potential(&self, a: &Body, b: &Body) -> f64;

    /// Sum the attractions of every other body on `bodies[i]`.
    ///
    /// If any source is an anchor, the smallest distance to an anchor is
    /// reported alongside the force, measured as `mode` asks.
    fn net_force(&self, i: usize, bodies: &[Body], mode: AnchorDistance) -> NetForce {
        let subject = &bodies[i];
        let mut force = NVec2::zeros();
        let mut anchor_distance: Option<f64> = None;

        for (j, source) in bodies.iter().enumerate() {
            if j == i {
                continue;
            }
            let a = self.attraction(subject, source);
            force += a.force;

            if source.is_anchor() {
                let d = match mode {
                    AnchorDistance::Raw => a.distance,
                    AnchorDistance::Clamped => a.clamped_distance,
                };
                anchor_distance = Some(anchor_distance.map_or(d, |best| best.min(d)));
            }
        }

        NetForce {
            force,
            anchor_distance,
        }
    }

    /// Total pairwise potential energy of the collection
    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        let n = bodies.len();
        let mut e = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                e += self.potential(&bodies[i], &bodies[j]);
            }
        }
        e
    }
}

/// 2D Newtonian gravity with a hard softening floor.
///
/// Separations below `r_min` are treated as `r_min` when computing the
/// magnitude, so the force stays finite when bodies nearly coincide. The
/// direction always follows the true displacement.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub r_min: f64, // softening floor
}

impl NewtonianGravity {
    #[allow(non_snake_case)]
    pub fn new(G: f64, r_min: f64) -> Self {
        Self { G, r_min }
    }

    /// Force magnitude between two masses at true separation `r`
    pub fn magnitude(&self, m1: f64, m2: f64, r: f64) -> f64 {
        let r = r.max(self.r_min);
        self.G * m1 * m2 / (r * r)
    }
}

impl ForceLaw for NewtonianGravity {
    fn attraction(&self, subject: &Body, source: &Body) -> Attraction {
        // d points from subject to source
        let d = source.position - subject.position;
        let r = d.norm();
        let r_c = r.max(self.r_min);

        let f = self.G * subject.mass() * source.mass() / (r_c * r_c);

        // Coincident bodies have no direction to pull in
        let force = if r > 0.0 { d * (f / r) } else { NVec2::zeros() };

        Attraction {
            force,
            distance: r,
            clamped_distance: r_c,
        }
    }

    fn potential(&self, a: &Body, b: &Body) -> f64 {
        // Below the floor the force is constant in magnitude, so the
        // potential continues linearly to stay its integral.
        let r = a.distance_to(b);
        let gm = self.G * a.mass() * b.mass();
        if r >= self.r_min {
            -gm / r
        } else {
            -gm / self.r_min - gm * (self.r_min - r) / (self.r_min * self.r_min)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::BodySpec;
    use crate::simulation::trajectory::TrajectoryPolicy;

    fn body(x: f64, y: f64, m: f64) -> Body {
        Body::from_spec(
            BodySpec::new("b", NVec2::new(x, y), NVec2::zeros(), m),
            TrajectoryPolicy::Unbounded,
        )
    }

    #[test]
    fn force_is_zero_for_coincident_bodies() {
        let g = NewtonianGravity::new(1.0, 0.1);
        let a = g.attraction(&body(1.0, 1.0, 1.0), &body(1.0, 1.0, 1.0));
        assert_eq!(a.force, NVec2::zeros());
        assert_eq!(a.distance, 0.0);
        assert_eq!(a.clamped_distance, 0.1);
    }

    #[test]
    fn force_is_antisymmetric() {
        let g = NewtonianGravity::new(1.0, 0.0);
        let a = body(0.0, 0.0, 2.0);
        let b = body(3.0, 4.0, 5.0);
        let ab = g.attraction(&a, &b).force;
        let ba = g.attraction(&b, &a).force;
        assert!((ab + ba).norm() < 1e-15);
        // 1 * 2 * 5 / 25
        assert!((ab.norm() - 0.4).abs() < 1e-15);
    }

    #[test]
    fn potential_is_continuous_at_floor() {
        let g = NewtonianGravity::new(1.0, 2.0);
        let origin = body(0.0, 0.0, 1.0);
        let above = g.potential(&origin, &body(2.0 + 1e-12, 0.0, 1.0));
        let below = g.potential(&origin, &body(2.0 - 1e-12, 0.0, 1.0));
        assert!((above - below).abs() < 1e-9);
    }
}
