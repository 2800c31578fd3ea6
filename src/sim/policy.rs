//! Per-day allocation of deficits and surpluses across the storage and generation tiers.
//!
//! All three handlers are pure: they read the previous day's levels and return
//! the new levels together with the energy flows, leaving state threading to
//! the engine.

use super::types::{ENERGY_TOLERANCE, ScenarioParameters, SimulationState, snap_to_zero};

/// Sources dispatched to cover a deficit day, with the storage levels they leave behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeficitDispatch {
    /// Medium-term storage content after discharge (TWh).
    pub medium_storage_level: f64,
    /// Hydrogen storage content after discharge (TWh).
    pub hydrogen_storage_level: f64,
    /// Imports drawn over the interconnector (TWh).
    pub interconnect_energy: f64,
    /// Gas CCS generation (TWh).
    pub gas_ccs_energy: f64,
}

/// A deficit left partly uncovered after every tier was exhausted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncoveredDeficit {
    /// Energy still missing (TWh, positive).
    pub shortfall: f64,
}

/// Storage charging on a surplus day and the energy left over for DAC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurplusDispatch {
    /// Medium-term storage content after charging (TWh).
    pub medium_storage_level: f64,
    /// Hydrogen storage content after charging (TWh).
    pub hydrogen_storage_level: f64,
    /// Energy stored in medium-term storage, after charge losses (TWh).
    pub energy_into_medium_storage: f64,
    /// Energy stored as hydrogen, after electrolysis losses (TWh).
    pub energy_into_hydrogen_storage: f64,
    /// Surplus that neither store could take (TWh).
    pub remaining_energy: f64,
}

/// Split of leftover surplus between Direct Air Capture and curtailment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DacDispatch {
    pub dac_energy: f64,
    pub curtailed_energy: f64,
}

/// Covers a shortfall from imports, medium storage, gas CCS and hydrogen, in that order.
///
/// # Arguments
///
/// * `net_supply` - Today's net supply (TWh, `<= 0`)
/// * `previous` - Storage levels at the end of the previous day
/// * `available_import` - Interconnector energy on offer today (TWh)
/// * `params` - Scenario caps and efficiencies
///
/// # Errors
///
/// Returns [`UncoveredDeficit`] when more than [`ENERGY_TOLERANCE`] of the
/// shortfall remains after the last tier.
pub fn handle_deficit(
    net_supply: f64,
    previous: SimulationState,
    available_import: f64,
    params: &ScenarioParameters,
) -> Result<DeficitDispatch, UncoveredDeficit> {
    // Subtracting from 0.0 keeps a balanced day from yielding -0.0.
    let mut shortfall = 0.0 - net_supply;

    let interconnect_energy = shortfall.min(available_import);
    shortfall -= interconnect_energy;

    let medium_eff = params.medium_storage_efficiency;
    let medium_available =
        (previous.medium_storage_level * medium_eff).min(params.medium_storage_max_daily_energy);
    let medium_drawn = shortfall.min(medium_available);
    let medium_storage_level =
        snap_to_zero(previous.medium_storage_level - medium_drawn / medium_eff);
    shortfall -= medium_drawn;

    let gas_ccs_energy = shortfall.min(params.gas_ccs_max_daily_energy);
    shortfall -= gas_ccs_energy;

    let h2_eff = params.hydrogen_discharge_efficiency;
    let h2_available = (previous.hydrogen_storage_level * h2_eff)
        .min(params.hydrogen_generation_max_daily_energy);
    let h2_drawn = shortfall.min(h2_available);
    let hydrogen_storage_level = snap_to_zero(previous.hydrogen_storage_level - h2_drawn / h2_eff);
    shortfall = snap_to_zero(shortfall - h2_drawn);

    if shortfall > 0.0 {
        return Err(UncoveredDeficit { shortfall });
    }

    Ok(DeficitDispatch {
        medium_storage_level,
        hydrogen_storage_level,
        interconnect_energy,
        gas_ccs_energy,
    })
}

/// Charges medium storage, then hydrogen storage, from a surplus.
///
/// Each tier takes the lesser of the remaining surplus, its power cap and its
/// headroom grossed up by the charge efficiency. A store whose headroom is the
/// binding limit ends the day exactly full.
///
/// # Arguments
///
/// * `net_supply` - Today's net supply (TWh, `> 0`)
/// * `previous` - Storage levels at the end of the previous day
/// * `params` - Scenario capacities, caps and efficiencies
pub fn handle_surplus(
    net_supply: f64,
    previous: SimulationState,
    params: &ScenarioParameters,
) -> SurplusDispatch {
    let mut remaining = net_supply;

    let (medium_storage_level, energy_into_medium_storage, medium_in) = charge(
        remaining,
        previous.medium_storage_level,
        params.medium_storage_capacity,
        params.medium_storage_max_daily_energy,
        params.medium_storage_efficiency,
    );
    remaining -= medium_in;

    let (hydrogen_storage_level, energy_into_hydrogen_storage, h2_in) = charge(
        remaining,
        previous.hydrogen_storage_level,
        params.hydrogen_storage_capacity,
        params.electrolyser_max_daily_energy,
        params.hydrogen_charge_efficiency,
    );
    remaining -= h2_in;

    SurplusDispatch {
        medium_storage_level,
        hydrogen_storage_level,
        energy_into_medium_storage,
        energy_into_hydrogen_storage,
        remaining_energy: snap_to_zero(remaining),
    }
}

/// Returns `(new_level, stored, drawn_from_surplus)` for one store.
#[inline]
fn charge(
    available: f64,
    level: f64,
    capacity: f64,
    max_daily_energy: f64,
    efficiency: f64,
) -> (f64, f64, f64) {
    let headroom_in = (capacity - level).max(0.0) / efficiency;
    let energy_in = available.min(max_daily_energy).min(headroom_in);
    let stored = energy_in * efficiency;
    let new_level = if energy_in >= headroom_in {
        capacity
    } else {
        (level + stored).min(capacity)
    };
    (new_level, stored, energy_in)
}

/// Sends leftover surplus to Direct Air Capture up to its cap and curtails the rest.
///
/// With `only_dac_if_storage_full` set, DAC runs only when hydrogen storage is
/// within [`ENERGY_TOLERANCE`] of capacity after today's charging. A store of
/// zero capacity always counts as full.
pub fn handle_dac(
    remaining_energy: f64,
    hydrogen_storage_level: f64,
    params: &ScenarioParameters,
) -> DacDispatch {
    let storage_full =
        params.hydrogen_storage_capacity - hydrogen_storage_level <= ENERGY_TOLERANCE;

    if params.only_dac_if_storage_full && !storage_full {
        return DacDispatch {
            dac_energy: 0.0,
            curtailed_energy: remaining_energy,
        };
    }

    let dac_energy = remaining_energy.min(params.dac_max_daily_energy);
    DacDispatch {
        dac_energy,
        curtailed_energy: snap_to_zero(remaining_energy - dac_energy),
    }
}
