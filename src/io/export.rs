//! CSV export for per-day simulation results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::DailyResult;

/// Column header for per-day result export.
const HEADER: &str = "day,net_supply_twh,medium_storage_level_twh,hydrogen_storage_level_twh,\
                      dac_energy_twh,curtailed_energy_twh,energy_into_medium_storage_twh,\
                      energy_into_hydrogen_storage_twh,gas_ccs_energy_twh,interconnect_energy_twh";

/// Exports per-day results to a CSV file at the given path.
///
/// Writes a header row followed by one row per day. Produces deterministic
/// output for identical inputs.
///
/// # Arguments
///
/// * `results` - Per-day records of a feasible run
/// * `net_supply` - The series the run was simulated on
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(results: &[DailyResult], net_supply: &[f64], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(results, net_supply, buf)
}

/// Writes per-day results as CSV to any writer.
///
/// Days missing from `net_supply` are written with an empty net-supply cell.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(results: &[DailyResult], net_supply: &[f64], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for r in results {
        let net = net_supply
            .get(r.day)
            .map(|v| format!("{v:.6}"))
            .unwrap_or_default();
        wtr.write_record(&[
            r.day.to_string(),
            net,
            format!("{:.6}", r.medium_storage_level),
            format!("{:.6}", r.hydrogen_storage_level),
            format!("{:.6}", r.dac_energy),
            format!("{:.6}", r.curtailed_energy),
            format!("{:.6}", r.energy_into_medium_storage),
            format!("{:.6}", r.energy_into_hydrogen_storage),
            format!("{:.6}", r.gas_ccs_energy),
            format!("{:.6}", r.interconnect_energy),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
