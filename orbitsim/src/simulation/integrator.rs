//! Fixed-step time integration for the system
//!
//! Semi-implicit (symplectic) Euler: each body is kicked by its net
//! acceleration, then drifted with the velocity it was just given. Update
//! ordering within a step follows [`UpdateMode`].

use super::forces::{ForceLaw, NetForce};
use super::params::{Parameters, UpdateMode};
use super::states::{Body, System};

/// Advance the system by one step of `params.dt`.
///
/// Updates positions, velocities, anchor distances, trajectories, `sys.t`
/// and `sys.steps` in place.
pub fn semi_implicit_euler(sys: &mut System, forces: &dyn ForceLaw, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, only time moves
        sys.t += params.dt;
        sys.steps += 1;
        return;
    }

    let dt = params.dt;
    let mode = params.anchor_distance;

    match params.update_mode {
        UpdateMode::Simultaneous => {
            // Every net force is taken from the pre-step positions
            let net: Vec<NetForce> = (0..n)
                .map(|i| forces.net_force(i, &sys.bodies, mode))
                .collect();

            for (b, f) in sys.bodies.iter_mut().zip(net.iter()) {
                kick_drift(b, f, dt);
            }
        }
        UpdateMode::Sequential => {
            // Body i sees the already-moved bodies 0..i
            for i in 0..n {
                let f = forces.net_force(i, &sys.bodies, mode);
                kick_drift(&mut sys.bodies[i], &f, dt);
            }
        }
    }

    sys.t += dt;
    sys.steps += 1;
}

fn kick_drift(b: &mut Body, f: &NetForce, dt: f64) {
    if let Some(d) = f.anchor_distance {
        b.last_anchor_distance = Some(d);
    }

    // v_n+1 = v_n + (F / m) dt
    let a = f.force / b.mass();
    b.velocity += a * dt;

    // x_n+1 = x_n + v_n+1 dt
    b.position += b.velocity * dt;

    b.trajectory.record(b.position);
}
