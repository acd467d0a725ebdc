use fieldsim::{ScenarioConfig, Scenario};
use fieldsim::run_2d;
use fieldsim::{bench_field, bench_evolve};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Ticks between two progress lines in headless mode
const REPORT_EVERY: u64 = 25;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run this many ticks without a window
    #[arg(long)]
    headless: Option<u64>,

    /// Run the benchmarks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, ticks: u64) {
    let Scenario { world, driver, view, .. } = &mut scenario;

    println!("tick,t,particles");
    for tick in 1..=ticks {
        driver.tick(world, view);
        if tick % REPORT_EVERY == 0 || tick == ticks {
            println!("{},{:.3},{}", tick, world.t(), world.particles.len());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_field();
        bench_evolve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    match args.headless {
        Some(ticks) => run_headless(scenario, ticks),
        None => run_2d(scenario),
    }

    Ok(())
}
