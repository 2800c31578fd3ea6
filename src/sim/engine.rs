//! Day-by-day simulation engine threading storage state through the allocation policy.

use tracing::debug;

use super::policy::{UncoveredDeficit, handle_dac, handle_deficit, handle_surplus};
use super::types::{
    DailyResult, ScenarioParameters, SimulationError, SimulationOutcome, SimulationState,
};
use super::validation;

/// Simulation engine borrowing one scenario and its net-supply series.
///
/// Holds the only mutable state of a run: the storage levels carried from one
/// day to the next. Independent engines share nothing, so scenarios can be
/// simulated on separate threads over the same series.
pub struct Engine<'a> {
    params: &'a ScenarioParameters,
    net_supply: &'a [f64],
    state: SimulationState,
}

impl<'a> Engine<'a> {
    /// Creates an engine with both stores full.
    ///
    /// # Arguments
    ///
    /// * `params` - Validated scenario parameters
    /// * `net_supply` - Daily net supply (TWh/day), positive on surplus days
    pub fn new(params: &'a ScenarioParameters, net_supply: &'a [f64]) -> Self {
        Self {
            params,
            net_supply,
            state: SimulationState::full(params),
        }
    }

    /// Simulates one day and advances the carried storage state.
    ///
    /// # Arguments
    ///
    /// * `day` - Index into the net-supply series
    ///
    /// # Returns
    ///
    /// The day's complete record, or the uncovered shortfall if no combination
    /// of sources could meet demand. State is left untouched on failure.
    ///
    /// # Panics
    ///
    /// Panics if `day` is outside the net-supply series.
    pub fn step(&mut self, day: usize) -> Result<DailyResult, UncoveredDeficit> {
        let net_supply = self.net_supply[day];
        let previous = self.state;

        let result = if net_supply <= 0.0 {
            let deficit = handle_deficit(
                net_supply,
                previous,
                self.params.available_import(day),
                self.params,
            )?;
            DailyResult {
                day,
                medium_storage_level: deficit.medium_storage_level,
                hydrogen_storage_level: deficit.hydrogen_storage_level,
                dac_energy: 0.0,
                curtailed_energy: 0.0,
                energy_into_medium_storage: 0.0,
                energy_into_hydrogen_storage: 0.0,
                gas_ccs_energy: deficit.gas_ccs_energy,
                interconnect_energy: deficit.interconnect_energy,
            }
        } else {
            let surplus = handle_surplus(net_supply, previous, self.params);
            let dac = handle_dac(
                surplus.remaining_energy,
                surplus.hydrogen_storage_level,
                self.params,
            );
            DailyResult {
                day,
                medium_storage_level: surplus.medium_storage_level,
                hydrogen_storage_level: surplus.hydrogen_storage_level,
                dac_energy: dac.dac_energy,
                curtailed_energy: dac.curtailed_energy,
                energy_into_medium_storage: surplus.energy_into_medium_storage,
                energy_into_hydrogen_storage: surplus.energy_into_hydrogen_storage,
                gas_ccs_energy: 0.0,
                interconnect_energy: 0.0,
            }
        };

        self.state = SimulationState {
            hydrogen_storage_level: result.hydrogen_storage_level,
            medium_storage_level: result.medium_storage_level,
        };
        Ok(result)
    }

    /// Executes every day in order, stopping at the first uncovered deficit.
    pub fn run(&mut self) -> SimulationOutcome {
        let mut results = Vec::with_capacity(self.net_supply.len());
        for day in 0..self.net_supply.len() {
            match self.step(day) {
                Ok(result) => results.push(result),
                Err(uncovered) => {
                    debug!(
                        day,
                        shortfall_twh = uncovered.shortfall,
                        "deficit could not be covered"
                    );
                    return SimulationOutcome::Infeasible { day };
                }
            }
        }
        SimulationOutcome::Feasible(results)
    }

    /// Storage levels at the end of the last simulated day.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Returns a reference to the scenario parameters.
    pub fn params(&self) -> &ScenarioParameters {
        self.params
    }
}

/// Simulates a whole net-supply series under one scenario.
///
/// Pure function of its inputs: identical calls give bit-identical outcomes.
/// Infeasibility is an `Ok` outcome, not an error. A feasible run is checked
/// against the physical invariants before it is returned.
///
/// # Errors
///
/// Returns [`SimulationError`] when a net-supply value is not finite, or when
/// the interconnector series is shorter than the net supply or holds a
/// negative or non-finite value.
///
/// # Panics
///
/// Panics if a feasible run breaks a physical invariant, which indicates a
/// defect in the allocation policy.
pub fn simulate(
    net_supply: &[f64],
    params: &ScenarioParameters,
) -> Result<SimulationOutcome, SimulationError> {
    check_inputs(net_supply, params)?;

    debug!(
        days = net_supply.len(),
        renewable_capacity_gw = params.renewable_capacity,
        "simulation started"
    );
    let outcome = Engine::new(params, net_supply).run();

    if let SimulationOutcome::Feasible(results) = &outcome {
        validation::validate(results, net_supply, params);
    }
    debug!(feasible = outcome.is_feasible(), "simulation finished");
    Ok(outcome)
}

fn check_inputs(net_supply: &[f64], params: &ScenarioParameters) -> Result<(), SimulationError> {
    if let Some((day, &value)) = net_supply.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SimulationError::NonFiniteNetSupply { day, value });
    }

    if let Some(imports) = params.interconnect_available_imports.as_deref() {
        if imports.len() < net_supply.len() {
            return Err(SimulationError::ImportSeriesTooShort {
                imports: imports.len(),
                days: net_supply.len(),
            });
        }
        if let Some((day, &value)) = imports
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(SimulationError::InvalidImport { day, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::sim::types::tests::hydrogen_only;

    #[test]
    fn three_day_scenario_becomes_infeasible_on_last_day() {
        let params = hydrogen_only(20.0);
        let mut engine = Engine::new(&params, &[10.0, -5.0, -100.0]);

        // Day 0: storage already full, all 10 TWh go to DAC.
        let day0 = engine.step(0).expect("surplus day");
        assert_eq!(day0.hydrogen_storage_level, 20.0);
        assert_eq!(day0.energy_into_hydrogen_storage, 0.0);
        assert_eq!(day0.dac_energy, 10.0);
        assert_eq!(day0.curtailed_energy, 0.0);

        // Day 1: 5 TWh drawn at 55% empties 9.09 TWh of hydrogen.
        let day1 = engine.step(1).expect("covered deficit");
        assert_relative_eq!(day1.hydrogen_storage_level, 20.0 - 5.0 / 0.55);

        // Day 2: the remaining ~6 TWh of deliverable energy cannot cover 100.
        assert!(engine.step(2).is_err());
        assert_relative_eq!(engine.state().hydrogen_storage_level, 20.0 - 5.0 / 0.55);

        let outcome = simulate(&[10.0, -5.0, -100.0], &params).expect("valid inputs");
        assert_eq!(outcome, SimulationOutcome::Infeasible { day: 2 });
    }

    #[test]
    fn emptying_the_store_is_feasible_but_the_next_deficit_is_not() {
        let params = hydrogen_only(20.0);
        let outcome = simulate(&[-11.0], &params).expect("valid inputs");
        let results = outcome.results().expect("an empty store still met demand");
        assert_eq!(results[0].hydrogen_storage_level, 0.0);

        let outcome = simulate(&[-11.0, -1e-6], &params).expect("valid inputs");
        assert_eq!(outcome, SimulationOutcome::Infeasible { day: 1 });
    }

    #[test]
    fn refills_after_deficit() {
        let params = hydrogen_only(20.0);
        let outcome = simulate(&[-5.5, 20.0], &params).expect("valid inputs");
        let results = outcome.results().expect("feasible");
        assert_relative_eq!(results[0].hydrogen_storage_level, 10.0);
        // 10 TWh of headroom needs 13.5 TWh of electricity; 6.49 goes to DAC.
        assert_eq!(results[1].hydrogen_storage_level, 20.0);
        assert_relative_eq!(results[1].energy_into_hydrogen_storage, 10.0, epsilon = 1e-9);
        assert_relative_eq!(results[1].dac_energy, 20.0 - 10.0 / 0.74, epsilon = 1e-9);
        assert_eq!(results[1].day, 1);
    }

    #[test]
    fn deficit_days_record_no_surplus_flows() {
        let params = hydrogen_only(20.0);
        let outcome = simulate(&[-1.0], &params).expect("valid inputs");
        let day = outcome.results().expect("feasible")[0];
        assert_eq!(day.dac_energy, 0.0);
        assert_eq!(day.curtailed_energy, 0.0);
        assert_eq!(day.energy_into_hydrogen_storage, 0.0);
        assert_eq!(day.energy_into_medium_storage, 0.0);
    }

    #[test]
    fn imports_spare_hydrogen() {
        let params = hydrogen_only(20.0).with_interconnect_imports(vec![2.0, 2.0]);
        let outcome = simulate(&[-1.5, -3.0], &params).expect("valid inputs");
        let results = outcome.results().expect("feasible");
        assert_eq!(results[0].interconnect_energy, 1.5);
        assert_eq!(results[0].hydrogen_storage_level, 20.0);
        assert_eq!(results[1].interconnect_energy, 2.0);
        assert_relative_eq!(results[1].hydrogen_storage_level, 20.0 - 1.0 / 0.55);
    }

    #[test]
    fn empty_series_is_trivially_feasible() {
        let outcome = simulate(&[], &hydrogen_only(20.0)).expect("valid inputs");
        assert_eq!(outcome, SimulationOutcome::Feasible(Vec::new()));
    }

    #[test]
    fn non_finite_net_supply_is_rejected() {
        let err = simulate(&[1.0, f64::NAN], &hydrogen_only(20.0)).unwrap_err();
        assert!(matches!(err, SimulationError::NonFiniteNetSupply { day: 1, .. }));
    }

    #[test]
    fn short_import_series_is_rejected() {
        let params = hydrogen_only(20.0).with_interconnect_imports(vec![1.0]);
        let err = simulate(&[-1.0, -1.0], &params).unwrap_err();
        assert_eq!(
            err,
            SimulationError::ImportSeriesTooShort {
                imports: 1,
                days: 2
            }
        );
    }

    #[test]
    fn negative_import_is_rejected() {
        let params = hydrogen_only(20.0).with_interconnect_imports(vec![1.0, -0.5]);
        let err = simulate(&[-1.0, -1.0], &params).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidImport { day: 1, .. }));
    }

    #[test]
    fn run_is_deterministic() {
        let params = hydrogen_only(15.0);
        let series: Vec<f64> = (0..400)
            .map(|d| 3.0 * ((d as f64) * 0.05).sin() - 0.2)
            .collect();
        let first = simulate(&series, &params).expect("valid inputs");
        let second = simulate(&series, &params).expect("valid inputs");
        assert_eq!(first, second);
    }
}
