//! UK power-balance entry point: CLI wiring and config-driven scenario runs.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uk_power_balance::config::ScenarioConfig;
use uk_power_balance::io::export::export_csv;
use uk_power_balance::runner::run_scenario;
use uk_power_balance::sim::SimulationOutcome;

use crate::cli::Cli;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the scenario: --scenario takes priority, then --preset, then baseline.
fn load_config(cli: &Cli) -> Result<ScenarioConfig> {
    let mut cfg = if let Some(path) = &cli.scenario {
        ScenarioConfig::from_toml_file(path)?
    } else if let Some(name) = &cli.preset {
        ScenarioConfig::from_preset(name)?
    } else {
        ScenarioConfig::baseline()
    };

    if let Some(seed) = cli.seed {
        cfg.supply.seed = seed;
    }
    if let Some(days) = cli.days {
        cfg.supply.days = days;
    }

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        bail!("scenario has {} invalid field(s)", errors.len());
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let cfg = load_config(&cli)?;
    let run = run_scenario(&cfg, cli.net_supply.as_deref())?;

    match &run.outcome {
        SimulationOutcome::Feasible(results) => {
            if cli.print_days {
                for r in results {
                    println!("{r}");
                }
            }
            if let Some(summary) = &run.summary {
                println!("\n{summary}");
            }
            if let Some(costs) = &run.costs {
                println!("\n{costs}");
            }
            if let Some(per_mwh) = run.energy_cost_gbp_per_mwh {
                println!("Energy cost:               {per_mwh:.2} GBP/MWh");
            }

            if let Some(path) = &cli.results_out {
                export_csv(results, run.net_supply.as_slice(), path)
                    .with_context(|| format!("failed to write results to {}", path.display()))?;
                info!(path = %path.display(), "results written");
            }
        }
        SimulationOutcome::Infeasible { day } => {
            println!("Scenario infeasible on day {day}: demand not met");
            if cli.results_out.is_some() {
                info!("infeasible run, no results exported");
            }
        }
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(uk_power_balance::api::AppState::from_run(run));
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
        rt.block_on(uk_power_balance::api::serve(state, addr))?;
    }

    Ok(())
}
