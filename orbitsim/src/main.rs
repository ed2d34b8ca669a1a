use orbitsim::{bench_advance_curve, run_headless, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Point masses under mutual Newtonian gravity")]
struct Args {
    /// Scenario YAML; a bare name is looked up in the crate's `scenarios/`.
    /// Without it the built-in Sun/Earth/satellites scenario runs.
    #[arg(short, long = "file")]
    file_name: Option<String>,

    /// Number of steps to advance
    #[arg(short, long, default_value_t = 8760)]
    steps: u64,

    /// Log body positions every this many steps (0 = only start and end)
    #[arg(short, long, default_value_t = 24)]
    report_every: u64,

    /// Time `advance()` for growing body counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let mut config_path = PathBuf::from(file_name);
    if !config_path.exists() {
        config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    }

    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();

    if args.bench {
        bench_advance_curve();
        return Ok(());
    }

    let scenario = match &args.file_name {
        Some(name) => Scenario::build_scenario(load_scenario_from_yaml(name)?)?,
        None => Scenario::three_body_satellites(),
    };

    let mut sim = scenario.into_simulator()?;
    run_headless(&mut sim, args.steps, args.report_every);

    Ok(())
}
