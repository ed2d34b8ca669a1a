use std::time::Instant;

use crate::simulation::params::{Parameters, UpdateMode};
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{BodySpec, NVec2};

/// Helper to build `n` bodies on deterministic positions, no rand needed
fn make_bodies(n: usize) -> Vec<BodySpec> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec2::new((i_f * 0.37).sin() * 5.0e11, (i_f * 0.13).cos() * 5.0e11);
            BodySpec::new(format!("b{i}"), x, NVec2::zeros(), 1.0e24)
        })
        .collect()
}

fn time_advance(n: usize, mode: UpdateMode, steps: u32) -> f64 {
    let params = Parameters {
        update_mode: mode,
        ..Parameters::default()
    };
    let mut sim = Simulator::new(make_bodies(n), params);

    // Warm-up
    sim.advance();

    let t0 = Instant::now();
    for _ in 0..steps {
        sim.advance();
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps as f64
}

/// Per-step cost of `advance()` in both update modes for growing n.
/// Output is CSV so it can be pasted straight into a spreadsheet.
pub fn bench_advance_curve() {
    println!("N,simultaneous_ms,sequential_ms");

    for n in (10..=200).step_by(10) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 50 { 200 } else { 20 };

        let ms_sim = time_advance(n, UpdateMode::Simultaneous, steps);
        let ms_seq = time_advance(n, UpdateMode::Sequential, steps);

        println!("{},{:.6},{:.6}", n, ms_sim, ms_seq);
    }
}
