//! Headless runner — executes the benchmark scenario and writes the run
//! report as JSON to stdout for an external presentation consumer.

use anyhow::Context;

use veer_core::config::NavConfig;
use veer_sim::Simulation;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = NavConfig::default();
    let mut sim = Simulation::new(config).context("invalid configuration")?;
    let report = sim.run().context("run aborted")?;

    log::info!(
        "run finished: {:?} after {} ticks",
        report.status,
        report.ticks
    );

    let json = serde_json::to_string(&report).context("serializing run report")?;
    println!("{json}");
    Ok(())
}
