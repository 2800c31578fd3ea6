//! Daily net-supply series: composed from supply and demand, or generated synthetically.

use std::f64::consts::PI;

use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;
use tracing::debug;

use crate::units::{DAYS_PER_YEAR, daily_energy_twh};

/// Mean length of a year in days, used for the seasonal cycle.
const SEASONAL_PERIOD_DAYS: f64 = 365.25;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SupplyError {
    #[error("supply covers {supply} days but demand covers {demand}")]
    LengthMismatch { supply: usize, demand: usize },

    #[error("transmission losses must be in [0, 1), got {0}")]
    InvalidLosses(f64),
}

/// Ordered per-day net supply (generation minus demand, TWh/day).
///
/// Positive values are surplus days, negative values deficit days.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetSupplySeries {
    values: Vec<f64>,
}

impl NetSupplySeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Nets daily supply against daily demand after transmission losses.
    ///
    /// # Arguments
    ///
    /// * `supply` - Renewable plus nuclear generation per day (TWh)
    /// * `demand` - Demand per day (TWh)
    /// * `transmission_losses` - Fraction of generation lost before reaching demand
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError`] if the series lengths differ or the loss
    /// fraction is outside `[0, 1)`.
    pub fn from_supply_and_demand(
        supply: &[f64],
        demand: &[f64],
        transmission_losses: f64,
    ) -> Result<Self, SupplyError> {
        if supply.len() != demand.len() {
            return Err(SupplyError::LengthMismatch {
                supply: supply.len(),
                demand: demand.len(),
            });
        }
        if !(0.0..1.0).contains(&transmission_losses) {
            return Err(SupplyError::InvalidLosses(transmission_losses));
        }
        let values = supply
            .iter()
            .zip(demand)
            .map(|(s, d)| s * (1.0 - transmission_losses) - d)
            .collect();
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keeps at most the first `days` values.
    pub fn truncate(&mut self, days: usize) {
        self.values.truncate(days);
    }

    /// Number of days with no excess generation (net supply below zero).
    pub fn days_without_excess(&self) -> usize {
        self.values.iter().filter(|v| **v < 0.0).count()
    }

    /// Fraction of days with no excess generation; 0 for an empty series.
    pub fn fraction_days_without_excess(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.days_without_excess() as f64 / self.values.len() as f64
    }

    /// Total unmet demand over the whole series, as a positive figure (TWh).
    pub fn total_unmet_demand(&self) -> f64 {
        self.values.iter().filter(|v| **v < 0.0).map(|v| -v).sum()
    }

    /// Sum of all positive days divided by the number of years covered (TWh/year).
    pub fn annual_surplus(&self) -> f64 {
        self.annualised(|v| v.max(0.0))
    }

    /// Sum of all negative days, as a positive figure, per year (TWh/year).
    pub fn annual_deficit(&self) -> f64 {
        self.annualised(|v| (-v).max(0.0))
    }

    fn annualised(&self, f: impl Fn(f64) -> f64) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let total: f64 = self.values.iter().copied().map(f).sum();
        total / self.values.len() as f64 * DAYS_PER_YEAR
    }
}

impl From<Vec<f64>> for NetSupplySeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Seeded generator of a seasonal net-supply series.
///
/// The renewable capacity factor follows a winter-peaking seasonal cycle plus
/// weather noise with day-to-day persistence:
/// ```text
/// anomaly(d) = rho * anomaly(d-1) + sqrt(1 - rho^2) * N(0, noise)
/// cf(d)      = clamp(mean + amplitude * cos(2 pi d / 365.25) + anomaly(d), 0, 1)
/// ```
/// Demand follows the same seasonal shape around its annual mean. Day 0 is
/// 1 January.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticSupply {
    /// Installed renewable capacity (GW).
    pub renewable_capacity_gw: f64,
    /// Always-on nuclear capacity (GW).
    pub nuclear_capacity_gw: f64,
    /// Annual mean renewable capacity factor.
    pub mean_capacity_factor: f64,
    /// Seasonal swing of the capacity factor around its mean.
    pub capacity_factor_amplitude: f64,
    /// Standard deviation of the daily weather anomaly.
    pub capacity_factor_noise: f64,
    /// Day-to-day correlation of the weather anomaly, in `[0, 1)`.
    pub capacity_factor_persistence: f64,
    /// Total yearly demand (TWh).
    pub annual_demand_twh: f64,
    /// Seasonal swing of demand as a fraction of its mean.
    pub demand_amplitude: f64,
    /// Fraction of generation lost in transmission.
    pub transmission_losses: f64,
    /// RNG seed; identical seeds give identical series.
    pub seed: u64,
}

impl Default for SyntheticSupply {
    fn default() -> Self {
        Self {
            renewable_capacity_gw: 250.0,
            nuclear_capacity_gw: 10.8,
            mean_capacity_factor: 0.2595,
            capacity_factor_amplitude: 0.05,
            capacity_factor_noise: 0.08,
            capacity_factor_persistence: 0.5,
            annual_demand_twh: 575.0,
            demand_amplitude: 0.15,
            transmission_losses: 0.0,
            seed: 42,
        }
    }
}

impl SyntheticSupply {
    /// Generates `days` of net supply.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::InvalidLosses`] if `transmission_losses` is
    /// outside `[0, 1)`.
    pub fn generate(&self, days: usize) -> Result<NetSupplySeries, SupplyError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let rho = self.capacity_factor_persistence.clamp(0.0, 0.999);
        let innovation_scale = (1.0 - rho * rho).sqrt();
        let daily_demand = self.annual_demand_twh / DAYS_PER_YEAR;

        let mut anomaly = gaussian_noise(&mut rng, self.capacity_factor_noise);
        let mut supply = Vec::with_capacity(days);
        let mut demand = Vec::with_capacity(days);
        for d in 0..days {
            let season = (2.0 * PI * d as f64 / SEASONAL_PERIOD_DAYS).cos();
            if d > 0 {
                anomaly = rho * anomaly
                    + innovation_scale * gaussian_noise(&mut rng, self.capacity_factor_noise);
            }
            let cf = (self.mean_capacity_factor + self.capacity_factor_amplitude * season + anomaly)
                .clamp(0.0, 1.0);
            let power_gw = self.renewable_capacity_gw * cf + self.nuclear_capacity_gw;
            supply.push(daily_energy_twh(power_gw));
            demand.push(daily_demand * (1.0 + self.demand_amplitude * season));
        }

        let series =
            NetSupplySeries::from_supply_and_demand(&supply, &demand, self.transmission_losses)?;
        debug!(
            days,
            seed = self.seed,
            annual_surplus_twh = series.annual_surplus(),
            annual_deficit_twh = series.annual_deficit(),
            fraction_days_without_excess = series.fraction_days_without_excess(),
            "generated synthetic net supply"
        );
        Ok(series)
    }
}

/// Gaussian noise by the Box-Muller transform.
///
/// # Arguments
///
/// * `rng` - Random number generator
/// * `std_dev` - Standard deviation of the noise
///
/// # Returns
///
/// Random value from a Gaussian distribution with mean 0 and the given
/// standard deviation; always 0 when `std_dev <= 0`.
pub fn gaussian_noise(rng: &mut StdRng, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return 0.0;
    }

    let u1: f64 = rng.random::<f64>().clamp(1e-12, 1.0);
    let u2: f64 = rng.random::<f64>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    z0 * std_dev
}
