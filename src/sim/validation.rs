//! Post-hoc invariant checks over a feasible run.
//!
//! A violation here is a defect in the allocation policy, never a property of
//! the input scenario.

use thiserror::Error;

use super::types::{DailyResult, ScenarioParameters, SimulationState};

/// Relative tolerance for the bound and balance checks.
///
/// Scaled by the magnitude of the quantities compared, never below 1 TWh,
/// so very large stores do not trip on rounding.
pub const CHECK_TOLERANCE: f64 = 1e-9;

fn tolerance(magnitude: f64) -> f64 {
    CHECK_TOLERANCE * magnitude.abs().max(1.0)
}

/// A broken physical invariant, located by day.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("day {day}: result is recorded for day {recorded}")]
    DayIndex { day: usize, recorded: usize },

    #[error("day {day}: {field} is negative ({value})")]
    Negative {
        day: usize,
        field: &'static str,
        value: f64,
    },

    #[error("day {day}: {field} = {value} exceeds its limit {limit}")]
    AboveLimit {
        day: usize,
        field: &'static str,
        value: f64,
        limit: f64,
    },

    #[error("day {day}: allocated {allocated} TWh against net supply {net_supply} TWh")]
    Unbalanced {
        day: usize,
        allocated: f64,
        net_supply: f64,
    },
}

/// Returns the first invariant a run breaks, if any.
///
/// Checks day indexing, non-negative flows, storage levels within
/// `[0, capacity]`, DAC, gas CCS and import caps, and that every day's flows
/// account for its net supply through the storage efficiencies.
///
/// # Arguments
///
/// * `results` - Per-day records of a feasible run
/// * `net_supply` - The series the run was simulated on
/// * `params` - Scenario the run was simulated under
pub fn find_violation(
    results: &[DailyResult],
    net_supply: &[f64],
    params: &ScenarioParameters,
) -> Option<Violation> {
    let mut previous = SimulationState::full(params);

    for (day, (r, &net)) in results.iter().zip(net_supply).enumerate() {
        if r.day != day {
            return Some(Violation::DayIndex {
                day,
                recorded: r.day,
            });
        }

        let flows = [
            ("medium_storage_level", r.medium_storage_level),
            ("hydrogen_storage_level", r.hydrogen_storage_level),
            ("dac_energy", r.dac_energy),
            ("curtailed_energy", r.curtailed_energy),
            ("energy_into_medium_storage", r.energy_into_medium_storage),
            ("energy_into_hydrogen_storage", r.energy_into_hydrogen_storage),
            ("gas_ccs_energy", r.gas_ccs_energy),
            ("interconnect_energy", r.interconnect_energy),
        ];
        if let Some((field, value)) = flows.into_iter().find(|(_, v)| *v < 0.0) {
            return Some(Violation::Negative { day, field, value });
        }

        let limits = [
            (
                "medium_storage_level",
                r.medium_storage_level,
                params.medium_storage_capacity,
            ),
            (
                "hydrogen_storage_level",
                r.hydrogen_storage_level,
                params.hydrogen_storage_capacity,
            ),
            ("dac_energy", r.dac_energy, params.dac_max_daily_energy),
            (
                "gas_ccs_energy",
                r.gas_ccs_energy,
                params.gas_ccs_max_daily_energy,
            ),
            (
                "interconnect_energy",
                r.interconnect_energy,
                params.available_import(day),
            ),
        ];
        if let Some((field, value, limit)) = limits
            .into_iter()
            .find(|(_, value, limit)| *value > *limit + tolerance(*limit))
        {
            return Some(Violation::AboveLimit {
                day,
                field,
                value,
                limit,
            });
        }

        let allocated = if net > 0.0 {
            r.energy_into_medium_storage / params.medium_storage_efficiency
                + r.energy_into_hydrogen_storage / params.hydrogen_charge_efficiency
                + r.dac_energy
                + r.curtailed_energy
        } else {
            let medium_drawn = (previous.medium_storage_level - r.medium_storage_level)
                * params.medium_storage_efficiency;
            let h2_drawn = (previous.hydrogen_storage_level - r.hydrogen_storage_level)
                * params.hydrogen_discharge_efficiency;
            -(r.interconnect_energy + medium_drawn + r.gas_ccs_energy + h2_drawn)
        };
        let scale = net
            .abs()
            .max(previous.hydrogen_storage_level)
            .max(previous.medium_storage_level);
        if (allocated - net).abs() > tolerance(scale) {
            return Some(Violation::Unbalanced {
                day,
                allocated,
                net_supply: net,
            });
        }

        previous = SimulationState {
            hydrogen_storage_level: r.hydrogen_storage_level,
            medium_storage_level: r.medium_storage_level,
        };
    }
    None
}

/// Asserts that a feasible run keeps every physical invariant.
///
/// # Panics
///
/// Panics with the first [`Violation`] found, or when `results` and
/// `net_supply` differ in length.
pub fn validate(results: &[DailyResult], net_supply: &[f64], params: &ScenarioParameters) {
    assert_eq!(
        results.len(),
        net_supply.len(),
        "feasible run must hold one record per day"
    );
    if let Some(violation) = find_violation(results, net_supply, params) {
        panic!("simulation invariant violated: {violation}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::engine::simulate;
    use crate::sim::types::tests::hydrogen_only;

    fn feasible_run(series: &[f64], params: &ScenarioParameters) -> Vec<DailyResult> {
        simulate(series, params)
            .expect("valid inputs")
            .results()
            .expect("feasible")
            .to_vec()
    }

    #[test]
    fn engine_output_passes() {
        let params = hydrogen_only(20.0);
        let series = [3.0, -4.0, 12.0, -2.0, 0.0, 1.0];
        let results = feasible_run(&series, &params);
        assert_eq!(find_violation(&results, &series, &params), None);
    }

    #[test]
    fn overfull_storage_is_caught() {
        let params = hydrogen_only(20.0);
        let series = [1.0];
        let mut results = feasible_run(&series, &params);
        results[0].hydrogen_storage_level = 20.5;
        assert!(matches!(
            find_violation(&results, &series, &params),
            Some(Violation::AboveLimit {
                field: "hydrogen_storage_level",
                ..
            })
        ));
    }

    #[test]
    fn negative_curtailment_is_caught() {
        let params = hydrogen_only(20.0);
        let series = [1.0];
        let mut results = feasible_run(&series, &params);
        results[0].curtailed_energy = -1e-6;
        assert!(matches!(
            find_violation(&results, &series, &params),
            Some(Violation::Negative {
                field: "curtailed_energy",
                ..
            })
        ));
    }

    #[test]
    fn lost_energy_is_caught() {
        let params = hydrogen_only(20.0);
        let series = [1.0, -1.0];
        let mut results = feasible_run(&series, &params);
        results[0].dac_energy = 0.5;
        assert!(matches!(
            find_violation(&results, &series, &params),
            Some(Violation::Unbalanced { day: 0, .. })
        ));
    }

    #[test]
    fn deficit_balance_is_checked_against_storage_drop() {
        let params = hydrogen_only(20.0);
        let series = [-1.0];
        let mut results = feasible_run(&series, &params);
        results[0].hydrogen_storage_level = 19.0;
        assert!(matches!(
            find_violation(&results, &series, &params),
            Some(Violation::Unbalanced { day: 0, .. })
        ));
    }

    #[test]
    fn huge_store_rounding_is_not_a_violation() {
        let params = ScenarioParameters::new(
            250.0, 1e8, 1e7, 1e7, 0.74, 0.55, 0.0, 0.0, 1.0, 1e7, 0.0, true,
        )
        .expect("physical");
        let series: Vec<f64> = (0..20)
            .map(|d| if d % 2 == 0 { 1234.567 } else { -987.773 })
            .collect();
        let results = feasible_run(&series, &params);
        assert_eq!(find_violation(&results, &series, &params), None);
        validate(&results, &series, &params);
    }

    #[test]
    fn tolerance_still_catches_small_leaks_on_huge_stores() {
        let params = ScenarioParameters::new(
            250.0, 1e8, 1e7, 1e7, 0.74, 0.55, 0.0, 0.0, 1.0, 1e7, 0.0, true,
        )
        .expect("physical");
        let series = [-987.773];
        let mut results = feasible_run(&series, &params);
        results[0].hydrogen_storage_level += 1.0;
        assert!(matches!(
            find_violation(&results, &series, &params),
            Some(Violation::Unbalanced { day: 0, .. })
        ));
    }

    #[test]
    #[should_panic(expected = "simulation invariant violated")]
    fn validate_panics_on_violation() {
        let params = hydrogen_only(20.0);
        let series = [1.0];
        let mut results = feasible_run(&series, &params);
        results[0].day = 7;
        validate(&results, &series, &params);
    }
}
