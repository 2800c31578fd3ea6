//! Annualised system cost of a simulated scenario.
//!
//! Costs are in GBP per year. Capital costs are spread over the asset
//! lifetime with an annuity factor and topped up with a fixed yearly opex
//! share.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::{ScenarioParameters, SummaryMetrics};
use crate::units::average_power_gw;

const HOURS_PER_YEAR: f64 = 24.0 * 365.25;
const MWH_PER_TWH: f64 = 1e6;
const KW_PER_GW: f64 = 1e6;
const GBP_PER_USD: f64 = 1.0 / 1.35;

/// Anything that can price a scenario from its parameters and run summary.
pub trait CostModel {
    /// Total yearly system cost (GBP/year).
    fn total_cost(&self, params: &ScenarioParameters, summary: &SummaryMetrics) -> f64;
}

/// Annuity factor: present value of one unit paid yearly for `lifetime_years`.
///
/// # Panics
///
/// Panics if `discount_rate` is outside `[0, 1)`.
pub fn annuity_factor(lifetime_years: u32, discount_rate: f64) -> f64 {
    assert!(
        (0.0..1.0).contains(&discount_rate),
        "discount rate must be in [0, 1), got {discount_rate}"
    );
    if discount_rate == 0.0 {
        return f64::from(lifetime_years);
    }
    let n = i32::try_from(lifetime_years).unwrap_or(i32::MAX);
    (1.0 - (1.0 + discount_rate).powi(-n)) / discount_rate
}

/// Yearly cost of an asset with the given capex, yearly opex, lifetime and discount rate.
pub fn annualised_cost(capex: f64, opex: f64, lifetime_years: u32, discount_rate: f64) -> f64 {
    capex / annuity_factor(lifetime_years, discount_rate) + opex
}

/// Cost per MWh of demand served (GBP/MWh).
pub fn energy_cost_per_mwh(total_cost_gbp: f64, demand_twh: f64) -> f64 {
    if demand_twh > 0.0 {
        total_cost_gbp / (demand_twh * MWH_PER_TWH)
    } else {
        0.0
    }
}

/// Yearly cost of a generator billed by LCOE.
///
/// # Arguments
///
/// * `capacity_gw` - Installed capacity
/// * `capacity_factor` - Mean output as a fraction of capacity
/// * `lcoe_gbp_per_mwh` - Levelised cost of energy
pub fn yearly_generation_cost(capacity_gw: f64, capacity_factor: f64, lcoe_gbp_per_mwh: f64) -> f64 {
    let mwh = capacity_gw * 1_000.0 * capacity_factor * HOURS_PER_YEAR;
    mwh * lcoe_gbp_per_mwh
}

/// Capex, opex share and lifetime of one asset class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetCost {
    /// Capital cost per unit (GBP/kW for power, GBP/MWh for storage).
    pub capex: f64,
    /// Yearly opex as a fraction of capex.
    pub opex_fraction: f64,
    pub lifetime_years: u32,
}

impl AssetCost {
    /// Yearly cost of one unit at the given discount rate.
    pub fn annualised(&self, discount_rate: f64) -> f64 {
        annualised_cost(
            self.capex,
            self.capex * self.opex_fraction,
            self.lifetime_years,
            discount_rate,
        )
    }
}

/// LCOE-based generation plus annualised storage capital costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnualisedCostModel {
    pub discount_rate: f64,
    pub renewable_capacity_factor: f64,
    pub renewable_lcoe_gbp_per_mwh: f64,
    pub nuclear_capacity_gw: f64,
    pub nuclear_capacity_factor: f64,
    pub nuclear_lcoe_gbp_per_mwh: f64,
    /// Electrolyser, GBP/kW.
    pub electrolyser: AssetCost,
    /// Hydrogen cavern storage, GBP/MWh.
    pub hydrogen_storage: AssetCost,
    /// Hydrogen-fired generation, GBP/kW.
    pub hydrogen_generation: AssetCost,
    /// Medium-term storage, GBP/MWh.
    pub medium_storage: AssetCost,
    /// Gas CCS plant, GBP/kW.
    pub gas_ccs: AssetCost,
    pub gas_ccs_fuel_gbp_per_mwh: f64,
    pub interconnect_import_gbp_per_mwh: f64,
    pub dac_carbon_storage_gbp_per_tonne: f64,
    /// System-wide cost per MWh of demand (rapid-response transport).
    pub additional_cost_gbp_per_mwh: f64,
    pub demand_twh: f64,
}

impl Default for AnnualisedCostModel {
    fn default() -> Self {
        let hydrogen_asset = |capex| AssetCost {
            capex,
            opex_fraction: 0.015,
            lifetime_years: 30,
        };
        Self {
            discount_rate: 0.05,
            renewable_capacity_factor: 0.2595,
            renewable_lcoe_gbp_per_mwh: 37.6,
            nuclear_capacity_gw: 12.0,
            nuclear_capacity_factor: 0.9,
            nuclear_lcoe_gbp_per_mwh: 78.0,
            electrolyser: hydrogen_asset(450.0 * GBP_PER_USD),
            hydrogen_storage: hydrogen_asset(400.0),
            hydrogen_generation: hydrogen_asset(425.0 * GBP_PER_USD),
            medium_storage: AssetCost {
                capex: 150_000.0,
                opex_fraction: 0.02,
                lifetime_years: 15,
            },
            gas_ccs: AssetCost {
                capex: 2_000.0,
                opex_fraction: 0.03,
                lifetime_years: 25,
            },
            gas_ccs_fuel_gbp_per_mwh: 60.0,
            interconnect_import_gbp_per_mwh: 70.0,
            dac_carbon_storage_gbp_per_tonne: 7.5,
            additional_cost_gbp_per_mwh: 4.0,
            demand_twh: 682.39,
        }
    }
}

/// Yearly cost broken down by component (GBP/year).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub renewables: f64,
    pub nuclear: f64,
    pub hydrogen: f64,
    pub medium_storage: f64,
    pub gas_ccs: f64,
    pub interconnect: f64,
    pub dac_carbon_storage: f64,
    pub additional: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.renewables
            + self.nuclear
            + self.hydrogen
            + self.medium_storage
            + self.gas_ccs
            + self.interconnect
            + self.dac_carbon_storage
            + self.additional
    }
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // GBP -> GBP bn
        let bn = |gbp: f64| gbp / 1e9;
        writeln!(f, "--- Yearly cost (GBP bn) ---")?;
        writeln!(f, "Renewables:                {:.2}", bn(self.renewables))?;
        writeln!(f, "Nuclear:                   {:.2}", bn(self.nuclear))?;
        writeln!(f, "Hydrogen:                  {:.2}", bn(self.hydrogen))?;
        writeln!(f, "Medium storage:            {:.2}", bn(self.medium_storage))?;
        writeln!(f, "Gas CCS:                   {:.2}", bn(self.gas_ccs))?;
        writeln!(f, "Interconnector imports:    {:.2}", bn(self.interconnect))?;
        writeln!(f, "DAC carbon storage:        {:.2}", bn(self.dac_carbon_storage))?;
        writeln!(f, "Additional:                {:.2}", bn(self.additional))?;
        write!(f, "Total:                     {:.2}", bn(self.total()))
    }
}

impl AnnualisedCostModel {
    /// Prices every component of a scenario.
    ///
    /// Hydrogen generation is sized by its power cap, or by the peak daily
    /// output of the run when the cap is unbounded.
    pub fn breakdown(&self, params: &ScenarioParameters, summary: &SummaryMetrics) -> CostBreakdown {
        let r = self.discount_rate;

        let generation_daily = if params.hydrogen_generation_max_daily_energy.is_finite() {
            params.hydrogen_generation_max_daily_energy
        } else {
            summary.peak_hydrogen_generation
        };
        let hydrogen = params.hydrogen_storage_capacity * MWH_PER_TWH
            * self.hydrogen_storage.annualised(r)
            + average_power_gw(params.electrolyser_max_daily_energy) * KW_PER_GW
                * self.electrolyser.annualised(r)
            + average_power_gw(generation_daily) * KW_PER_GW
                * self.hydrogen_generation.annualised(r);

        let gas_ccs = average_power_gw(params.gas_ccs_max_daily_energy) * KW_PER_GW
            * self.gas_ccs.annualised(r)
            + summary.annual_gas_ccs_energy * MWH_PER_TWH * self.gas_ccs_fuel_gbp_per_mwh;

        CostBreakdown {
            renewables: yearly_generation_cost(
                params.renewable_capacity,
                self.renewable_capacity_factor,
                self.renewable_lcoe_gbp_per_mwh,
            ),
            nuclear: yearly_generation_cost(
                self.nuclear_capacity_gw,
                self.nuclear_capacity_factor,
                self.nuclear_lcoe_gbp_per_mwh,
            ),
            hydrogen,
            medium_storage: params.medium_storage_capacity
                * MWH_PER_TWH
                * self.medium_storage.annualised(r),
            gas_ccs,
            interconnect: summary.annual_interconnect_energy
                * MWH_PER_TWH
                * self.interconnect_import_gbp_per_mwh,
            // Mt -> t
            dac_carbon_storage: summary.annual_co2_removals
                * 1e6
                * self.dac_carbon_storage_gbp_per_tonne,
            additional: self.additional_cost_gbp_per_mwh * self.demand_twh * MWH_PER_TWH,
        }
    }

    /// Cost per MWh of the configured demand (GBP/MWh).
    pub fn energy_cost(&self, params: &ScenarioParameters, summary: &SummaryMetrics) -> f64 {
        energy_cost_per_mwh(self.total_cost(params, summary), self.demand_twh)
    }
}

impl CostModel for AnnualisedCostModel {
    fn total_cost(&self, params: &ScenarioParameters, summary: &SummaryMetrics) -> f64 {
        self.breakdown(params, summary).total()
    }
}
