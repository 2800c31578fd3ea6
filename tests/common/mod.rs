//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use uk_power_balance::sim::ScenarioParameters;
use uk_power_balance::supply::{NetSupplySeries, SyntheticSupply};

/// Plain-field scenario knobs, turned into validated parameters with [`Knobs::build`].
///
/// Defaults: 71 TWh hydrogen store, 1.2 TWh/day electrolyser (50 GW),
/// unbounded hydrogen generation, 0.648 TWh/day DAC (27 GW), no medium
/// storage, no gas, storage-first DAC.
#[derive(Debug, Clone, Copy)]
pub struct Knobs {
    pub hydrogen_storage_capacity: f64,
    pub electrolyser_max_daily_energy: f64,
    pub hydrogen_generation_max_daily_energy: f64,
    pub medium_storage_capacity: f64,
    pub medium_storage_max_daily_energy: f64,
    pub dac_max_daily_energy: f64,
    pub gas_ccs_max_daily_energy: f64,
    pub only_dac_if_storage_full: bool,
}

impl Default for Knobs {
    fn default() -> Self {
        Self {
            hydrogen_storage_capacity: 71.0,
            electrolyser_max_daily_energy: 1.2,
            hydrogen_generation_max_daily_energy: f64::INFINITY,
            medium_storage_capacity: 0.0,
            medium_storage_max_daily_energy: 0.0,
            dac_max_daily_energy: 0.648,
            gas_ccs_max_daily_energy: 0.0,
            only_dac_if_storage_full: true,
        }
    }
}

impl Knobs {
    pub fn build(self) -> ScenarioParameters {
        ScenarioParameters::new(
            250.0,
            self.hydrogen_storage_capacity,
            self.electrolyser_max_daily_energy,
            self.hydrogen_generation_max_daily_energy,
            0.74,
            0.55,
            self.medium_storage_capacity,
            self.medium_storage_max_daily_energy,
            0.85_f64.sqrt(),
            self.dac_max_daily_energy,
            self.gas_ccs_max_daily_energy,
            self.only_dac_if_storage_full,
        )
        .expect("test knobs are physical")
    }
}

/// Ten synthetic years at 250 GW with the given seed.
pub fn synthetic_decade(seed: u64) -> NetSupplySeries {
    SyntheticSupply {
        seed,
        ..SyntheticSupply::default()
    }
    .generate(3650)
    .expect("default synthetic settings are valid")
}

/// Writes `contents` to a per-process file in the temp directory.
pub fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "uk-power-balance-{}-{name}",
        std::process::id()
    ));
    fs::write(&path, contents).expect("temp dir is writable");
    path
}
