//! Unit conversions shared by the configuration layer and the analyzer.
//!
//! The simulation core works on bare `f64` magnitudes: energy in TWh and
//! flows in TWh/day. Everything that arrives in other units passes through
//! here first.

/// Hours in one simulated day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Days used to annualise per-day means.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Molecular weight of CO2 in g/mol.
pub const CO2_MOLAR_MASS_G_PER_MOL: f64 = 44.01;

const GWH_PER_TWH: f64 = 1_000.0;
const KJ_PER_TWH: f64 = 3.6e12;
const GRAMS_PER_MEGATONNE: f64 = 1e12;

/// Converts a power cap in GW into the energy it can move in one day (TWh/day).
///
/// # Examples
///
/// ```
/// use uk_power_balance::units::daily_energy_twh;
///
/// assert_eq!(daily_energy_twh(50.0), 1.2);
/// ```
pub fn daily_energy_twh(power_gw: f64) -> f64 {
    power_gw * HOURS_PER_DAY / GWH_PER_TWH
}

/// Inverse of [`daily_energy_twh`]: the average power (GW) behind a daily energy.
pub fn average_power_gw(daily_energy_twh: f64) -> f64 {
    daily_energy_twh * GWH_PER_TWH / HOURS_PER_DAY
}

/// Single-direction efficiency of a store with the given round-trip efficiency.
pub fn one_way_efficiency(round_trip: f64) -> f64 {
    round_trip.sqrt()
}

/// Electrical energy (TWh) Direct Air Capture needs to remove one Mt of CO2.
///
/// # Arguments
///
/// * `energy_cost_kj_per_mol` - DAC process energy in kJ per mol CO2
pub fn dac_twh_per_mt_co2(energy_cost_kj_per_mol: f64) -> f64 {
    let moles = GRAMS_PER_MEGATONNE / CO2_MOLAR_MASS_G_PER_MOL;
    moles * energy_cost_kj_per_mol / KJ_PER_TWH
}

/// Yearly electrical energy (TWh) to remove `mt_co2` Mt of CO2 by Direct Air Capture.
///
/// # Arguments
///
/// * `mt_co2` - CO2 removed per year (Mt)
/// * `energy_cost_kj_per_mol` - DAC process energy in kJ per mol CO2
/// * `storage_energy_twh` - Fixed yearly energy for compressing and storing the CO2 (TWh)
pub fn yearly_dac_energy_twh(
    mt_co2: f64,
    energy_cost_kj_per_mol: f64,
    storage_energy_twh: f64,
) -> f64 {
    mt_co2 * dac_twh_per_mt_co2(energy_cost_kj_per_mol) + storage_energy_twh
}

/// Yearly DAC energy (TWh/year) when a cumulative removal target is spread over `num_years`.
///
/// `storage_energy_twh` is the storage energy for the whole period.
///
/// # Panics
///
/// Panics if `num_years` is zero.
pub fn yearly_dac_energy_twh_cumulative(
    cumulative_mt_co2: f64,
    energy_cost_kj_per_mol: f64,
    storage_energy_twh: f64,
    num_years: u32,
) -> f64 {
    assert!(num_years > 0, "num_years must be > 0");
    yearly_dac_energy_twh(cumulative_mt_co2, energy_cost_kj_per_mol, storage_energy_twh)
        / f64::from(num_years)
}
