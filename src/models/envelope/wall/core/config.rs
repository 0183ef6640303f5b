use std::num::NonZeroUsize;

use uom::si::{
    f64::{HeatTransfer, Length, MassDensity, SpecificHeatCapacity, TemperatureInterval, Time},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    time::second,
};

use crate::{
    models::envelope::design_day::SECONDS_PER_DAY,
    support::constraint::{ConstraintError, StrictlyPositive},
};

use super::WallError;

/// Numerical and boundary settings for the periodic wall solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallConfig {
    /// Number of finite-volume nodes across the whole construction.
    pub nodes: usize,

    /// Time step; a whole number of seconds that divides one day.
    pub time_step: Time,

    /// Outside surface film coefficient (ho).
    pub outside_film: HeatTransfer,

    /// Inside surface film coefficient (hi).
    pub inside_film: HeatTransfer,

    /// Depth of room air coupled to each unit of wall area (La).
    pub air_depth: Length,

    pub air_density: MassDensity,
    pub air_specific_heat: SpecificHeatCapacity,

    /// Passes stop once the mean node change over a full day falls below this.
    pub tolerance: TemperatureInterval,

    /// Upper bound on full-day passes.
    pub max_passes: usize,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            nodes: 20,
            time_step: Time::new::<second>(60.0),
            outside_film: HeatTransfer::new::<watt_per_square_meter_kelvin>(13.0),
            inside_film: HeatTransfer::new::<watt_per_square_meter_kelvin>(8.0),
            air_depth: Length::new::<meter>(2.5),
            air_density: MassDensity::new::<kilogram_per_cubic_meter>(1.179_766_047_025_846_9),
            air_specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.458_757),
            tolerance: TemperatureInterval::new::<delta_kelvin>(5e-4),
            max_passes: 500,
        }
    }
}

/// Validated configuration in plain SI values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(in crate::models::envelope::wall) struct Parameters {
    /// Time step in whole seconds.
    pub(super) step: NonZeroUsize,
    pub(super) dt: f64,
    pub(super) ho: f64,
    pub(super) hi: f64,

    /// Room-air heat capacity per unit wall area, J/m²·K.
    pub(super) air_heat_capacity: f64,

    pub(super) tolerance: f64,
    pub(super) max_passes: usize,
}

impl Parameters {
    /// Checks `config` and converts it to SI magnitudes.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::InvalidTimeStep`] unless the time step is a whole
    /// number of seconds dividing one day, and [`WallError::InvalidConfig`]
    /// for non-positive film coefficients, air properties, tolerance or pass
    /// limit.
    pub(in crate::models::envelope::wall) fn new(config: &WallConfig) -> Result<Self, WallError> {
        let step = time_step(config.time_step)?;

        let ho = positive("outside_film", config.outside_film.get::<watt_per_square_meter_kelvin>())?;
        let hi = positive("inside_film", config.inside_film.get::<watt_per_square_meter_kelvin>())?;
        let depth = positive("air_depth", config.air_depth.get::<meter>())?;
        let rho = positive(
            "air_density",
            config.air_density.get::<kilogram_per_cubic_meter>(),
        )?;
        let c = positive(
            "air_specific_heat",
            config.air_specific_heat.get::<joule_per_kilogram_kelvin>(),
        )?;
        let tolerance = positive("tolerance", config.tolerance.get::<delta_kelvin>())?;

        if config.max_passes == 0 {
            return Err(WallError::InvalidConfig {
                parameter: "max_passes",
                source: ConstraintError::Zero,
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let dt = step.get() as f64;

        Ok(Self {
            step,
            dt,
            ho,
            hi,
            air_heat_capacity: rho * c * depth,
            tolerance,
            max_passes: config.max_passes,
        })
    }
}

fn time_step(time_step: Time) -> Result<NonZeroUsize, WallError> {
    let seconds = time_step.get::<second>();
    let invalid = || WallError::InvalidTimeStep { seconds };

    if !seconds.is_finite() || seconds.fract() != 0.0 || !(1.0..=86_400.0).contains(&seconds) {
        return Err(invalid());
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let step = NonZeroUsize::new(seconds as usize).ok_or_else(invalid)?;

    if SECONDS_PER_DAY % step.get() != 0 {
        return Err(invalid());
    }
    Ok(step)
}

fn positive(parameter: &'static str, value: f64) -> Result<f64, WallError> {
    StrictlyPositive::new(value)
        .map(|v| v.into_inner())
        .map_err(|source| WallError::InvalidConfig { parameter, source })
}
