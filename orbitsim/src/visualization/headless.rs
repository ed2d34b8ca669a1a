//! Text-only driver: steps a simulator and logs what a viewer would draw.

use log::info;

use crate::simulation::constants::AU;
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{Body, NVec2};

/// What a finished run looked like
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: u64,
    pub time: f64, // seconds
    pub initial_energy: f64,
    pub final_energy: f64,
    pub momentum: NVec2,
}

impl RunSummary {
    /// |E_end - E_start| / |E_start|, or the absolute drift when E_start is 0
    pub fn energy_drift(&self) -> f64 {
        let d = (self.final_energy - self.initial_energy).abs();
        if self.initial_energy == 0.0 {
            d
        } else {
            d / self.initial_energy.abs()
        }
    }
}

/// Advance `sim` by `steps`, logging a frame every `report_every` steps
/// (0 disables frames).
pub fn run_headless(sim: &mut Simulator, steps: u64, report_every: u64) -> RunSummary {
    info!("run_headless: {} bodies, {} steps", sim.bodies().len(), steps);

    let initial_energy = sim.total_energy();
    log_frame(sim);

    for _ in 0..steps {
        sim.advance();
        if report_every != 0 && sim.steps() % report_every == 0 {
            log_frame(sim);
        }
    }

    let summary = RunSummary {
        steps: sim.steps(),
        time: sim.time(),
        initial_energy,
        final_energy: sim.total_energy(),
        momentum: sim.total_momentum(),
    };

    info!(
        "done: {} steps, {:.2} days, energy drift {:.3e}, |p| = {:.3e} kg m/s",
        summary.steps,
        summary.time / 86_400.0,
        summary.energy_drift(),
        summary.momentum.norm()
    );

    summary
}

fn log_frame(sim: &Simulator) {
    info!("t = {:.2} days", sim.time() / 86_400.0);
    for b in sim.bodies() {
        info!("  {}", label(b));
    }
}

/// One line per body: name, position in AU, and anchor distance in km
pub fn label(b: &Body) -> String {
    let p = b.position() / AU;
    let mut line = format!("{:<12} ({:+.4}, {:+.4}) AU", b.name(), p.x, p.y);
    if !b.is_anchor() {
        if let Some(d) = b.last_anchor_distance() {
            line.push_str(&format!("  {:.1} km", d / 1000.0));
        }
    }
    line
}
