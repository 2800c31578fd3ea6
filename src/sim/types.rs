//! Core simulation types: scenario parameters, daily state, per-day records, outcomes.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Magnitude (TWh) below which residues of chained efficiency divisions are
/// treated as exactly zero.
pub const ENERGY_TOLERANCE: f64 = 1e-10;

/// Snaps `value` to zero when it is within [`ENERGY_TOLERANCE`] of it.
///
/// Larger negative values are returned untouched so that real allocation
/// errors surface in validation.
#[inline]
pub fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < ENERGY_TOLERANCE {
        0.0
    } else {
        value
    }
}

/// Rejection reasons for non-physical scenario parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must be >= 0, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be in (0, 1], got {value}")]
    EfficiencyOutOfRange { name: &'static str, value: f64 },

    #[error("{power} must be 0 when {capacity} is 0, got {value}")]
    PowerWithoutCapacity {
        capacity: &'static str,
        power: &'static str,
        value: f64,
    },
}

/// Input problems detected before the day loop starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("net supply on day {day} is not finite ({value})")]
    NonFiniteNetSupply { day: usize, value: f64 },

    #[error("interconnector series covers {imports} days but net supply covers {days}")]
    ImportSeriesTooShort { imports: usize, days: usize },

    #[error("interconnector import on day {day} must be finite and >= 0, got {value}")]
    InvalidImport { day: usize, value: f64 },
}

/// Immutable physical parameters of one scenario, in TWh and TWh/day.
///
/// Power limits are already converted to daily energy caps. Construct with
/// [`ScenarioParameters::new`], which rejects non-physical values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioParameters {
    /// Renewable capacity label (GW); not used by the allocation itself.
    pub renewable_capacity: f64,
    /// Maximum hydrogen storage content (TWh).
    pub hydrogen_storage_capacity: f64,
    /// Electrolyser intake cap (TWh/day).
    pub electrolyser_max_daily_energy: f64,
    /// Hydrogen-to-power output cap (TWh/day).
    pub hydrogen_generation_max_daily_energy: f64,
    /// Electrolysis efficiency `e_in`.
    pub hydrogen_charge_efficiency: f64,
    /// Hydrogen generation efficiency `e_out`.
    pub hydrogen_discharge_efficiency: f64,
    /// Maximum medium-term storage content (TWh).
    pub medium_storage_capacity: f64,
    /// Shared medium-term charge/discharge cap (TWh/day).
    pub medium_storage_max_daily_energy: f64,
    /// Single-direction medium-term efficiency (square root of round trip).
    pub medium_storage_efficiency: f64,
    /// Direct Air Capture intake cap (TWh/day).
    pub dac_max_daily_energy: f64,
    /// Gas CCS output cap (TWh/day).
    pub gas_ccs_max_daily_energy: f64,
    /// Available interconnector imports per day (TWh/day), if any.
    #[serde(skip)]
    pub interconnect_available_imports: Option<Vec<f64>>,
    /// DAC only draws once hydrogen storage is full.
    pub only_dac_if_storage_full: bool,
}

impl ScenarioParameters {
    /// Validates and builds a parameter set.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] found: non-finite or negative
    /// capacities and caps, efficiencies outside `(0, 1]`, or a non-zero power
    /// cap paired with a zero-capacity store.
    #[expect(clippy::too_many_arguments)]
    pub fn new(
        renewable_capacity: f64,
        hydrogen_storage_capacity: f64,
        electrolyser_max_daily_energy: f64,
        hydrogen_generation_max_daily_energy: f64,
        hydrogen_charge_efficiency: f64,
        hydrogen_discharge_efficiency: f64,
        medium_storage_capacity: f64,
        medium_storage_max_daily_energy: f64,
        medium_storage_efficiency: f64,
        dac_max_daily_energy: f64,
        gas_ccs_max_daily_energy: f64,
        only_dac_if_storage_full: bool,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            renewable_capacity,
            hydrogen_storage_capacity,
            electrolyser_max_daily_energy,
            hydrogen_generation_max_daily_energy,
            hydrogen_charge_efficiency,
            hydrogen_discharge_efficiency,
            medium_storage_capacity,
            medium_storage_max_daily_energy,
            medium_storage_efficiency,
            dac_max_daily_energy,
            gas_ccs_max_daily_energy,
            interconnect_available_imports: None,
            only_dac_if_storage_full,
        };
        params.check()?;
        Ok(params)
    }

    /// Attaches a per-day interconnector availability series (TWh/day).
    #[must_use]
    pub fn with_interconnect_imports(mut self, imports: Vec<f64>) -> Self {
        self.interconnect_available_imports = Some(imports);
        self
    }

    /// Import available on `day`, zero when no series is attached.
    #[inline]
    pub fn available_import(&self, day: usize) -> f64 {
        self.interconnect_available_imports
            .as_deref()
            .and_then(|imports| imports.get(day).copied())
            .unwrap_or(0.0)
    }

    fn check(&self) -> Result<(), ParameterError> {
        // Caps may be +inf ("unbounded"), capacities and efficiencies may not.
        let capacities = [
            ("renewable_capacity", self.renewable_capacity),
            ("hydrogen_storage_capacity", self.hydrogen_storage_capacity),
            ("medium_storage_capacity", self.medium_storage_capacity),
        ];
        for (name, value) in capacities {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(ParameterError::Negative { name, value });
            }
        }

        let caps = [
            ("electrolyser_max_daily_energy", self.electrolyser_max_daily_energy),
            (
                "hydrogen_generation_max_daily_energy",
                self.hydrogen_generation_max_daily_energy,
            ),
            (
                "medium_storage_max_daily_energy",
                self.medium_storage_max_daily_energy,
            ),
            ("dac_max_daily_energy", self.dac_max_daily_energy),
            ("gas_ccs_max_daily_energy", self.gas_ccs_max_daily_energy),
        ];
        for (name, value) in caps {
            if value.is_nan() {
                return Err(ParameterError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(ParameterError::Negative { name, value });
            }
        }

        let efficiencies = [
            ("hydrogen_charge_efficiency", self.hydrogen_charge_efficiency),
            ("hydrogen_discharge_efficiency", self.hydrogen_discharge_efficiency),
            ("medium_storage_efficiency", self.medium_storage_efficiency),
        ];
        for (name, value) in efficiencies {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ParameterError::EfficiencyOutOfRange { name, value });
            }
        }

        let pairs = [
            (
                "hydrogen_storage_capacity",
                self.hydrogen_storage_capacity,
                "hydrogen_generation_max_daily_energy",
                self.hydrogen_generation_max_daily_energy,
            ),
            (
                "hydrogen_storage_capacity",
                self.hydrogen_storage_capacity,
                "electrolyser_max_daily_energy",
                self.electrolyser_max_daily_energy,
            ),
            (
                "medium_storage_capacity",
                self.medium_storage_capacity,
                "medium_storage_max_daily_energy",
                self.medium_storage_max_daily_energy,
            ),
        ];
        for (capacity, capacity_value, power, power_value) in pairs {
            if capacity_value == 0.0 && power_value != 0.0 {
                return Err(ParameterError::PowerWithoutCapacity {
                    capacity,
                    power,
                    value: power_value,
                });
            }
        }

        Ok(())
    }
}

/// Storage levels carried from one day to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Hydrogen storage content (TWh).
    pub hydrogen_storage_level: f64,
    /// Medium-term storage content (TWh).
    pub medium_storage_level: f64,
}

impl SimulationState {
    /// Both stores start full.
    pub fn full(params: &ScenarioParameters) -> Self {
        Self {
            hydrogen_storage_level: params.hydrogen_storage_capacity,
            medium_storage_level: params.medium_storage_capacity,
        }
    }
}

/// Complete record of one simulated day. All energies in TWh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyResult {
    /// Day index from the start of the series.
    pub day: usize,
    /// Medium-term storage content at the end of the day.
    pub medium_storage_level: f64,
    /// Hydrogen storage content at the end of the day.
    pub hydrogen_storage_level: f64,
    /// Surplus consumed by Direct Air Capture.
    pub dac_energy: f64,
    /// Surplus that could not be stored or used.
    pub curtailed_energy: f64,
    /// Energy added to medium-term storage (after charge losses).
    pub energy_into_medium_storage: f64,
    /// Energy added to hydrogen storage (after electrolysis losses).
    pub energy_into_hydrogen_storage: f64,
    /// Gas CCS generation dispatched to cover a deficit.
    pub gas_ccs_energy: f64,
    /// Interconnector imports dispatched to cover a deficit.
    pub interconnect_energy: f64,
}

impl fmt::Display for DailyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "day={:>5} | H2={:>7.3} TWh  medium={:>6.3} TWh | \
             into(H2={:.3}, medium={:.3}) dac={:.3} curtailed={:.3} | \
             gas={:.3} imports={:.3}",
            self.day,
            self.hydrogen_storage_level,
            self.medium_storage_level,
            self.energy_into_hydrogen_storage,
            self.energy_into_medium_storage,
            self.dac_energy,
            self.curtailed_energy,
            self.gas_ccs_energy,
            self.interconnect_energy,
        )
    }
}

/// Result of simulating a whole net-supply series.
///
/// There is no partial success: a single uncovered day invalidates the run.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationOutcome {
    /// Every day was covered; one record per day, in order.
    Feasible(Vec<DailyResult>),
    /// The deficit on `day` could not be covered by any source.
    Infeasible {
        /// Index of the first uncovered day.
        day: usize,
    },
}

impl SimulationOutcome {
    /// Returns the per-day records of a feasible run.
    pub fn results(&self) -> Option<&[DailyResult]> {
        match self {
            Self::Feasible(results) => Some(results),
            Self::Infeasible { .. } => None,
        }
    }

    /// Whether every day was covered.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }

    /// Index of the first uncovered day, if any.
    pub fn infeasible_day(&self) -> Option<usize> {
        match self {
            Self::Feasible(_) => None,
            Self::Infeasible { day } => Some(*day),
        }
    }
}
