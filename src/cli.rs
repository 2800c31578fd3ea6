use std::path::PathBuf;

use clap::Parser;

/// Daily UK power-balance simulator.
///
/// If no --scenario or --preset is given, the baseline preset is used.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Load scenario from TOML config file.
    #[clap(long, value_name = "PATH", conflicts_with = "preset")]
    pub scenario: Option<PathBuf>,

    /// Use a built-in preset (baseline, medium_storage, dac_opportunistic).
    #[clap(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Read the net-supply series from this CSV instead of the configured source.
    #[clap(long, value_name = "PATH", env = "NET_SUPPLY_CSV")]
    pub net_supply: Option<PathBuf>,

    /// Override the synthetic supply seed.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Override the number of simulated days.
    #[clap(long)]
    pub days: Option<usize>,

    /// Print every day record before the summary.
    #[clap(long)]
    pub print_days: bool,

    /// Export per-day results to CSV.
    #[clap(long, value_name = "PATH")]
    pub results_out: Option<PathBuf>,

    /// Start REST API server after simulation.
    #[cfg(feature = "api")]
    #[clap(long)]
    pub serve: bool,

    /// API server port.
    #[cfg(feature = "api")]
    #[clap(long, default_value = "3000")]
    pub port: u16,
}
