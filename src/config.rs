//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::costs::AnnualisedCostModel;
use crate::sim::{ParameterError, ScenarioParameters};
use crate::supply::SyntheticSupply;
use crate::units::{daily_energy_twh, dac_twh_per_mt_co2, one_way_efficiency};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Installed capacities, efficiencies and the DAC policy.
    #[serde(default)]
    pub system: SystemConfig,
    /// Where the net-supply series comes from.
    #[serde(default)]
    pub supply: SupplyConfig,
    /// Optional interconnector availability file.
    #[serde(default)]
    pub interconnect: InterconnectConfig,
    /// Post-processing assumptions.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Cost assumptions for the annualised system cost.
    #[serde(default)]
    pub costs: AnnualisedCostModel,
}

/// Physical scenario in human units (GW, TWh, fractions).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    /// Installed renewable capacity (GW).
    pub renewable_capacity_gw: f64,
    /// Hydrogen storage capacity (TWh).
    pub hydrogen_storage_twh: f64,
    /// Electrolyser power (GW).
    pub electrolyser_power_gw: f64,
    /// Hydrogen generation power (GW); unbounded when absent.
    pub hydrogen_generation_power_gw: Option<f64>,
    /// Electrolysis efficiency (0.0-1.0].
    pub hydrogen_charge_efficiency: f64,
    /// Hydrogen-to-power efficiency (0.0-1.0].
    pub hydrogen_discharge_efficiency: f64,
    /// Medium-term storage capacity (TWh).
    pub medium_storage_twh: f64,
    /// Medium-term storage charge/discharge power (GW).
    pub medium_storage_power_gw: f64,
    /// Medium-term storage round-trip efficiency (0.0-1.0].
    pub medium_storage_round_trip_efficiency: f64,
    /// Direct Air Capture power (GW).
    pub dac_power_gw: f64,
    /// Gas CCS power (GW).
    pub gas_ccs_power_gw: f64,
    /// DAC runs only once hydrogen storage is full.
    pub only_dac_if_hydrogen_storage_full: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            renewable_capacity_gw: 250.0,
            hydrogen_storage_twh: 71.0,
            electrolyser_power_gw: 50.0,
            hydrogen_generation_power_gw: None,
            hydrogen_charge_efficiency: 0.74,
            hydrogen_discharge_efficiency: 0.55,
            medium_storage_twh: 0.0,
            medium_storage_power_gw: 0.0,
            medium_storage_round_trip_efficiency: 0.85,
            dac_power_gw: 27.0,
            gas_ccs_power_gw: 0.0,
            only_dac_if_hydrogen_storage_full: true,
        }
    }
}

/// Net-supply source selection and synthetic generator settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SupplyConfig {
    /// `"synthetic"` or `"csv"`.
    pub source: String,
    /// Net-supply table for the `csv` source.
    pub path: Option<PathBuf>,
    /// Days to simulate; for `csv`, the file is cut to this length when shorter.
    pub days: usize,
    /// Master random seed for the synthetic source.
    pub seed: u64,
    /// Always-on nuclear capacity (GW).
    pub nuclear_capacity_gw: f64,
    /// Annual mean renewable capacity factor.
    pub mean_capacity_factor: f64,
    /// Seasonal capacity-factor swing.
    pub capacity_factor_amplitude: f64,
    /// Daily weather anomaly standard deviation.
    pub capacity_factor_noise: f64,
    /// Day-to-day weather anomaly correlation [0.0, 1.0).
    pub capacity_factor_persistence: f64,
    /// Yearly demand (TWh).
    pub annual_demand_twh: f64,
    /// Seasonal demand swing as a fraction of the mean.
    pub demand_amplitude: f64,
    /// Fraction of generation lost in transmission [0.0, 1.0).
    pub transmission_losses: f64,
}

impl Default for SupplyConfig {
    fn default() -> Self {
        let synthetic = SyntheticSupply::default();
        Self {
            source: "synthetic".to_string(),
            path: None,
            days: 10 * 365,
            seed: synthetic.seed,
            nuclear_capacity_gw: synthetic.nuclear_capacity_gw,
            mean_capacity_factor: synthetic.mean_capacity_factor,
            capacity_factor_amplitude: synthetic.capacity_factor_amplitude,
            capacity_factor_noise: synthetic.capacity_factor_noise,
            capacity_factor_persistence: synthetic.capacity_factor_persistence,
            annual_demand_twh: synthetic.annual_demand_twh,
            demand_amplitude: synthetic.demand_amplitude,
            transmission_losses: synthetic.transmission_losses,
        }
    }
}

/// Interconnector availability file (one GW value per day).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterconnectConfig {
    /// CSV file; no imports when absent.
    pub path: Option<PathBuf>,
    /// Column holding available import power (GW).
    pub column: String,
}

impl Default for InterconnectConfig {
    fn default() -> Self {
        Self {
            path: None,
            column: "available_gw".to_string(),
        }
    }
}

/// Post-processing assumptions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// DAC process energy (kJ per mol CO2): 43 low, 101 medium, 162 high.
    pub dac_energy_cost_kj_per_mol: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dac_energy_cost_kj_per_mol: 101.0,
        }
    }
}

impl AnalysisConfig {
    /// DAC energy per Mt of CO2 removed (TWh/Mt).
    pub fn dac_twh_per_mt_co2(&self) -> f64 {
        dac_twh_per_mt_co2(self.dac_energy_cost_kj_per_mol)
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"system.hydrogen_storage_twh"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ScenarioConfig {
    /// Returns the baseline scenario: hydrogen storage only, DAC after storage is full.
    pub fn baseline() -> Self {
        Self {
            system: SystemConfig::default(),
            supply: SupplyConfig::default(),
            interconnect: InterconnectConfig::default(),
            analysis: AnalysisConfig::default(),
            costs: AnnualisedCostModel::default(),
        }
    }

    /// Returns the medium-storage preset: baseline plus medium-term storage and gas CCS.
    pub fn medium_storage() -> Self {
        Self {
            system: SystemConfig {
                medium_storage_twh: 0.5,
                medium_storage_power_gw: 20.0,
                gas_ccs_power_gw: 10.0,
                ..SystemConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Returns the DAC-opportunistic preset: more renewables, DAC shares surplus with storage.
    pub fn dac_opportunistic() -> Self {
        Self {
            system: SystemConfig {
                renewable_capacity_gw: 300.0,
                dac_power_gw: 100.0,
                only_dac_if_hydrogen_storage_full: false,
                ..SystemConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "medium_storage", "dac_opportunistic"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "medium_storage" => Ok(Self::medium_storage()),
            "dac_opportunistic" => Ok(Self::dac_opportunistic()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// Relative supply and interconnect paths are resolved against the
    /// file's directory.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        let mut cfg = Self::from_toml_str(&content)?;
        if let Some(dir) = path.parent() {
            cfg.resolve_paths(dir);
        }
        Ok(cfg)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    fn resolve_paths(&mut self, dir: &Path) {
        for path in [&mut self.supply.path, &mut self.interconnect.path]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
    }

    /// Synthetic generator settings for this scenario.
    pub fn synthetic_supply(&self) -> SyntheticSupply {
        let s = &self.supply;
        SyntheticSupply {
            renewable_capacity_gw: self.system.renewable_capacity_gw,
            nuclear_capacity_gw: s.nuclear_capacity_gw,
            mean_capacity_factor: s.mean_capacity_factor,
            capacity_factor_amplitude: s.capacity_factor_amplitude,
            capacity_factor_noise: s.capacity_factor_noise,
            capacity_factor_persistence: s.capacity_factor_persistence,
            annual_demand_twh: s.annual_demand_twh,
            demand_amplitude: s.demand_amplitude,
            transmission_losses: s.transmission_losses,
            seed: s.seed,
        }
    }

    /// Converts the human-unit system section into simulation parameters.
    ///
    /// Powers become daily energies (`GW x 24 h`) and the medium-storage
    /// round-trip efficiency becomes a single-direction one.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] for non-physical values.
    pub fn to_parameters(&self) -> Result<ScenarioParameters, ParameterError> {
        let sys = &self.system;
        let generation = sys
            .hydrogen_generation_power_gw
            .map_or(f64::INFINITY, daily_energy_twh);
        ScenarioParameters::new(
            sys.renewable_capacity_gw,
            sys.hydrogen_storage_twh,
            daily_energy_twh(sys.electrolyser_power_gw),
            generation,
            sys.hydrogen_charge_efficiency,
            sys.hydrogen_discharge_efficiency,
            sys.medium_storage_twh,
            daily_energy_twh(sys.medium_storage_power_gw),
            one_way_efficiency(sys.medium_storage_round_trip_efficiency),
            daily_energy_twh(sys.dac_power_gw),
            daily_energy_twh(sys.gas_ccs_power_gw),
            sys.only_dac_if_hydrogen_storage_full,
        )
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut check = |ok: bool, field: &str, message: &str| {
            if !ok {
                errors.push(ConfigError {
                    field: field.into(),
                    message: message.into(),
                });
            }
        };

        let sys = &self.system;
        for (field, value) in [
            ("system.renewable_capacity_gw", sys.renewable_capacity_gw),
            ("system.hydrogen_storage_twh", sys.hydrogen_storage_twh),
            ("system.electrolyser_power_gw", sys.electrolyser_power_gw),
            ("system.medium_storage_twh", sys.medium_storage_twh),
            ("system.medium_storage_power_gw", sys.medium_storage_power_gw),
            ("system.dac_power_gw", sys.dac_power_gw),
            ("system.gas_ccs_power_gw", sys.gas_ccs_power_gw),
        ] {
            check(value.is_finite() && value >= 0.0, field, "must be finite and >= 0");
        }
        if let Some(gw) = sys.hydrogen_generation_power_gw {
            check(
                gw.is_finite() && gw >= 0.0,
                "system.hydrogen_generation_power_gw",
                "must be finite and >= 0 (omit for unbounded)",
            );
        }
        for (field, value) in [
            (
                "system.hydrogen_charge_efficiency",
                sys.hydrogen_charge_efficiency,
            ),
            (
                "system.hydrogen_discharge_efficiency",
                sys.hydrogen_discharge_efficiency,
            ),
            (
                "system.medium_storage_round_trip_efficiency",
                sys.medium_storage_round_trip_efficiency,
            ),
        ] {
            check(value > 0.0 && value <= 1.0, field, "must be in (0.0, 1.0]");
        }
        check(
            sys.medium_storage_twh > 0.0 || sys.medium_storage_power_gw == 0.0,
            "system.medium_storage_power_gw",
            "must be 0 when system.medium_storage_twh is 0",
        );
        check(
            sys.hydrogen_storage_twh > 0.0 || sys.electrolyser_power_gw == 0.0,
            "system.electrolyser_power_gw",
            "must be 0 when system.hydrogen_storage_twh is 0",
        );
        check(
            sys.hydrogen_storage_twh > 0.0 || sys.hydrogen_generation_power_gw == Some(0.0),
            "system.hydrogen_generation_power_gw",
            "must be set to 0 when system.hydrogen_storage_twh is 0",
        );

        let sup = &self.supply;
        match sup.source.as_str() {
            "synthetic" => {}
            "csv" => check(
                sup.path.is_some(),
                "supply.path",
                "required when supply.source is \"csv\"",
            ),
            _ => check(
                false,
                "supply.source",
                &format!("must be \"synthetic\" or \"csv\", got \"{}\"", sup.source),
            ),
        }
        check(sup.days > 0, "supply.days", "must be > 0");
        check(
            (0.0..=1.0).contains(&sup.mean_capacity_factor),
            "supply.mean_capacity_factor",
            "must be in [0.0, 1.0]",
        );
        check(
            sup.capacity_factor_noise >= 0.0,
            "supply.capacity_factor_noise",
            "must be >= 0",
        );
        check(
            (0.0..1.0).contains(&sup.capacity_factor_persistence),
            "supply.capacity_factor_persistence",
            "must be in [0.0, 1.0)",
        );
        check(
            sup.nuclear_capacity_gw >= 0.0,
            "supply.nuclear_capacity_gw",
            "must be >= 0",
        );
        check(
            sup.annual_demand_twh >= 0.0,
            "supply.annual_demand_twh",
            "must be >= 0",
        );
        check(
            (0.0..1.0).contains(&sup.transmission_losses),
            "supply.transmission_losses",
            "must be in [0.0, 1.0)",
        );

        check(
            !self.interconnect.column.is_empty(),
            "interconnect.column",
            "must not be empty",
        );
        check(
            self.analysis.dac_energy_cost_kj_per_mol > 0.0,
            "analysis.dac_energy_cost_kj_per_mol",
            "must be > 0",
        );
        check(
            (0.0..1.0).contains(&self.costs.discount_rate),
            "costs.discount_rate",
            "must be in [0.0, 1.0)",
        );
        check(
            self.costs.demand_twh > 0.0,
            "costs.demand_twh",
            "must be > 0",
        );
        for (field, asset) in [
            ("costs.electrolyser.lifetime_years", &self.costs.electrolyser),
            ("costs.hydrogen_storage.lifetime_years", &self.costs.hydrogen_storage),
            ("costs.hydrogen_generation.lifetime_years", &self.costs.hydrogen_generation),
            ("costs.medium_storage.lifetime_years", &self.costs.medium_storage),
            ("costs.gas_ccs.lifetime_years", &self.costs.gas_ccs),
        ] {
            check(asset.lifetime_years > 0, field, "must be > 0");
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn baseline_preset_valid() {
        let cfg = ScenarioConfig::baseline();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "baseline should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_baseline() {
        let cfg = ScenarioConfig::from_preset("baseline");
        assert!(cfg.is_ok());
    }

    #[test]
    fn from_preset_unknown() {
        let err = ScenarioConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[system]
renewable_capacity_gw = 300.0
hydrogen_storage_twh = 80.0
electrolyser_power_gw = 60.0
hydrogen_generation_power_gw = 70.0
medium_storage_twh = 1.0
medium_storage_power_gw = 25.0
medium_storage_round_trip_efficiency = 0.81
dac_power_gw = 30.0
gas_ccs_power_gw = 5.0
only_dac_if_hydrogen_storage_full = false

[supply]
source = "csv"
path = "net_supply.csv"
days = 730

[interconnect]
path = "imports.csv"
column = "gw"

[analysis]
dac_energy_cost_kj_per_mol = 43.0

[costs]
discount_rate = 0.035
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(
            cfg.as_ref().map(|c| c.system.hydrogen_generation_power_gw),
            Some(Some(70.0))
        );
        assert_eq!(cfg.as_ref().map(|c| &*c.supply.source), Some("csv"));
        assert_eq!(cfg.as_ref().map(|c| c.supply.days), Some(730));
        assert_eq!(cfg.as_ref().map(|c| &*c.interconnect.column), Some("gw"));
        assert_eq!(cfg.as_ref().map(|c| c.costs.discount_rate), Some(0.035));
        assert!(cfg.map(|c| c.validate().is_empty()).unwrap_or(false));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[system]
renewable_capacity_gw = 250.0
bogus_field = true
"#;
        let result = ScenarioConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[supply]
seed = 99
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.supply.seed), Some(99));
        assert_eq!(cfg.as_ref().map(|c| c.supply.days), Some(3650));
        assert_eq!(
            cfg.as_ref().map(|c| c.system.hydrogen_storage_twh),
            Some(71.0)
        );
    }

    #[test]
    fn to_parameters_converts_units() {
        let params = ScenarioConfig::medium_storage()
            .to_parameters()
            .expect("preset is physical");
        assert_relative_eq!(params.electrolyser_max_daily_energy, 1.2);
        assert_relative_eq!(params.dac_max_daily_energy, 0.648);
        assert_relative_eq!(params.medium_storage_max_daily_energy, 0.48);
        assert_relative_eq!(params.gas_ccs_max_daily_energy, 0.24);
        assert_relative_eq!(params.medium_storage_efficiency, 0.85_f64.sqrt());
        assert!(params.hydrogen_generation_max_daily_energy.is_infinite());
        assert!(params.only_dac_if_storage_full);
    }

    #[test]
    fn to_parameters_rejects_bad_efficiency() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.system.hydrogen_charge_efficiency = 1.5;
        assert!(matches!(
            cfg.to_parameters(),
            Err(ParameterError::EfficiencyOutOfRange { .. })
        ));
    }

    #[test]
    fn validation_collects_every_error() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.system.hydrogen_storage_twh = -1.0;
        cfg.system.hydrogen_discharge_efficiency = 0.0;
        cfg.supply.days = 0;
        let errors = cfg.validate();
        for field in [
            "system.hydrogen_storage_twh",
            "system.hydrogen_discharge_efficiency",
            "supply.days",
        ] {
            assert!(
                errors.iter().any(|e| e.field == field),
                "missing {field}: {errors:?}"
            );
        }
    }

    #[test]
    fn validation_rejects_zero_asset_lifetime() {
        let toml = r#"
[costs.medium_storage]
capex = 150000.0
opex_fraction = 0.02
lifetime_years = 0

[costs.gas_ccs]
capex = 2000.0
opex_fraction = 0.03
lifetime_years = 0
"#;
        let cfg = ScenarioConfig::from_toml_str(toml).expect("parses");
        let fields: Vec<String> = cfg.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [
                "costs.medium_storage.lifetime_years",
                "costs.gas_ccs.lifetime_years"
            ]
        );
    }

    #[test]
    fn validation_catches_power_without_storage() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.system.medium_storage_power_gw = 10.0;
        let errors = cfg.validate();
        assert!(errors
            .iter()
            .any(|e| e.field == "system.medium_storage_power_gw"));
    }

    #[test]
    fn validation_requires_csv_path() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.supply.source = "csv".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "supply.path"));
    }

    #[test]
    fn validation_catches_bad_source() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.supply.source = "weather_api".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "supply.source"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
            assert!(cfg.map(|c| c.to_parameters().is_ok()).unwrap_or(false));
        }
    }

    #[test]
    fn dac_opportunistic_shares_surplus() {
        let base = ScenarioConfig::baseline();
        let opp = ScenarioConfig::dac_opportunistic();
        assert!(opp.system.dac_power_gw > base.system.dac_power_gw);
        assert!(!opp.system.only_dac_if_hydrogen_storage_full);
    }

    #[test]
    fn synthetic_supply_follows_system_capacity() {
        let cfg = ScenarioConfig::dac_opportunistic();
        assert_eq!(cfg.synthetic_supply().renewable_capacity_gw, 300.0);
        assert_eq!(cfg.synthetic_supply().seed, 42);
    }

    #[test]
    fn relative_paths_resolve_against_scenario_dir() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.supply.path = Some(PathBuf::from("data/net.csv"));
        cfg.interconnect.path = Some(PathBuf::from("/abs/imports.csv"));
        cfg.resolve_paths(Path::new("scenarios"));
        assert_eq!(cfg.supply.path, Some(PathBuf::from("scenarios/data/net.csv")));
        assert_eq!(
            cfg.interconnect.path,
            Some(PathBuf::from("/abs/imports.csv"))
        );
    }

    #[test]
    fn dac_conversion_uses_analysis_cost() {
        let cfg = ScenarioConfig::baseline();
        assert_relative_eq!(cfg.analysis.dac_twh_per_mt_co2(), dac_twh_per_mt_co2(101.0));
    }
}
