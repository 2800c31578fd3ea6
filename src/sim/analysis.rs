//! Post-hoc summary statistics from a complete simulation run.

use std::fmt;

use serde::Serialize;

use super::types::{DailyResult, ScenarioParameters, SimulationOutcome};
use crate::units::DAYS_PER_YEAR;

/// Annual summary derived from the per-day records of a feasible run.
///
/// Computed post-hoc from `&[DailyResult]` so that reported figures always
/// agree with the exported day records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Number of simulated days.
    pub days: usize,
    /// Lowest medium-term storage content over the run (TWh).
    pub minimum_medium_storage: f64,
    /// Lowest hydrogen storage content over the run (TWh).
    pub minimum_hydrogen_storage: f64,
    /// Mean yearly DAC consumption (TWh/year).
    pub annual_dac_energy: f64,
    /// Mean yearly CO2 removed by DAC (Mt/year).
    pub annual_co2_removals: f64,
    /// Fraction of days on which DAC ran at all.
    pub dac_capacity_factor: f64,
    /// Largest single-day output of hydrogen generation (TWh/day).
    pub peak_hydrogen_generation: f64,
    /// Mean yearly curtailment (TWh/year).
    pub curtailed_energy: f64,
    /// Mean yearly gas CCS generation (TWh/year).
    pub annual_gas_ccs_energy: f64,
    /// Fraction of days on which gas CCS ran at all.
    pub gas_ccs_capacity_factor: f64,
    /// Mean yearly interconnector imports (TWh/year).
    pub annual_interconnect_energy: f64,
}

impl SummaryMetrics {
    /// Computes all metrics from the complete per-day record vector.
    ///
    /// Capacity factors count active days, not delivered energy over the
    /// maximum possible.
    ///
    /// # Arguments
    ///
    /// * `results` - Per-day records of a feasible run
    /// * `params` - Scenario the run was simulated under
    /// * `dac_twh_per_mt_co2` - DAC energy needed per Mt of CO2 removed
    ///
    /// # Returns
    ///
    /// A `SummaryMetrics` with all fields populated; all zeros for an empty run.
    pub fn from_results(
        results: &[DailyResult],
        params: &ScenarioParameters,
        dac_twh_per_mt_co2: f64,
    ) -> Self {
        if results.is_empty() {
            return Self {
                days: 0,
                minimum_medium_storage: 0.0,
                minimum_hydrogen_storage: 0.0,
                annual_dac_energy: 0.0,
                annual_co2_removals: 0.0,
                dac_capacity_factor: 0.0,
                peak_hydrogen_generation: 0.0,
                curtailed_energy: 0.0,
                annual_gas_ccs_energy: 0.0,
                gas_ccs_capacity_factor: 0.0,
                annual_interconnect_energy: 0.0,
            };
        }

        let n = results.len() as f64;
        let mut min_medium = f64::INFINITY;
        let mut min_hydrogen = f64::INFINITY;
        let mut dac_sum = 0.0_f64;
        let mut dac_days = 0_usize;
        let mut curtailed_sum = 0.0_f64;
        let mut gas_sum = 0.0_f64;
        let mut gas_days = 0_usize;
        let mut interconnect_sum = 0.0_f64;
        let mut peak_h2_generation = 0.0_f64;
        let mut previous_h2 = params.hydrogen_storage_capacity;

        for r in results {
            let h2_drawn = previous_h2 - r.hydrogen_storage_level;
            if h2_drawn > 0.0 {
                peak_h2_generation =
                    peak_h2_generation.max(h2_drawn * params.hydrogen_discharge_efficiency);
            }
            previous_h2 = r.hydrogen_storage_level;

            min_medium = min_medium.min(r.medium_storage_level);
            min_hydrogen = min_hydrogen.min(r.hydrogen_storage_level);

            dac_sum += r.dac_energy;
            if r.dac_energy > 0.0 {
                dac_days += 1;
            }
            curtailed_sum += r.curtailed_energy;

            gas_sum += r.gas_ccs_energy;
            if r.gas_ccs_energy > 0.0 {
                gas_days += 1;
            }
            interconnect_sum += r.interconnect_energy;
        }

        let annual_dac_energy = dac_sum / n * DAYS_PER_YEAR;
        let annual_co2_removals = if dac_twh_per_mt_co2 > 0.0 {
            annual_dac_energy / dac_twh_per_mt_co2
        } else {
            0.0
        };

        Self {
            days: results.len(),
            minimum_medium_storage: min_medium,
            minimum_hydrogen_storage: min_hydrogen,
            annual_dac_energy,
            annual_co2_removals,
            dac_capacity_factor: dac_days as f64 / n,
            peak_hydrogen_generation: peak_h2_generation,
            curtailed_energy: curtailed_sum / n * DAYS_PER_YEAR,
            annual_gas_ccs_energy: gas_sum / n * DAYS_PER_YEAR,
            gas_ccs_capacity_factor: gas_days as f64 / n,
            annual_interconnect_energy: interconnect_sum / n * DAYS_PER_YEAR,
        }
    }
}

/// Summarises a run, or returns `None` if it was infeasible.
pub fn analyze(
    outcome: &SimulationOutcome,
    params: &ScenarioParameters,
    dac_twh_per_mt_co2: f64,
) -> Option<SummaryMetrics> {
    outcome
        .results()
        .map(|results| SummaryMetrics::from_results(results, params, dac_twh_per_mt_co2))
}

impl fmt::Display for SummaryMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Summary ({} days) ---", self.days)?;
        writeln!(
            f,
            "Minimum hydrogen storage:  {:.2} TWh",
            self.minimum_hydrogen_storage
        )?;
        writeln!(
            f,
            "Minimum medium storage:    {:.2} TWh",
            self.minimum_medium_storage
        )?;
        writeln!(
            f,
            "DAC energy:                {:.2} TWh/year ({:.1}% of days)",
            self.annual_dac_energy,
            100.0 * self.dac_capacity_factor
        )?;
        writeln!(
            f,
            "Peak hydrogen generation:  {:.3} TWh/day",
            self.peak_hydrogen_generation
        )?;
        writeln!(
            f,
            "CO2 removals:              {:.2} Mt/year",
            self.annual_co2_removals
        )?;
        writeln!(
            f,
            "Curtailed energy:          {:.2} TWh/year",
            self.curtailed_energy
        )?;
        writeln!(
            f,
            "Gas CCS energy:            {:.2} TWh/year ({:.1}% of days)",
            self.annual_gas_ccs_energy,
            100.0 * self.gas_ccs_capacity_factor
        )?;
        write!(
            f,
            "Interconnector imports:    {:.2} TWh/year",
            self.annual_interconnect_energy
        )
    }
}
