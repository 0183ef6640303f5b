use jiff::civil::DateTime;
use uom::{
    ConstZero,
    si::{
        f64::{HeatFluxDensity, ThermodynamicTemperature},
        heat_flux_density::watt_per_square_meter,
    },
};

/// One hourly weather observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRecord {
    /// Start of the observation interval, in local standard time.
    pub time: DateTime,

    /// Dry-bulb air temperature.
    pub dry_bulb: ThermodynamicTemperature,

    /// Solar irradiance components.
    pub irradiance: Irradiance,
}

/// Global, beam and diffuse solar irradiance.
///
/// Follows the EPW convention: `global` and `diffuse` on the horizontal plane,
/// `beam` at normal incidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Irradiance {
    pub global: HeatFluxDensity,
    pub beam: HeatFluxDensity,
    pub diffuse: HeatFluxDensity,
}

impl Irradiance {
    /// Irradiance with all three components in W/m².
    #[must_use]
    pub fn from_watts_per_square_meter(global: f64, beam: f64, diffuse: f64) -> Self {
        Self {
            global: HeatFluxDensity::new::<watt_per_square_meter>(global),
            beam: HeatFluxDensity::new::<watt_per_square_meter>(beam),
            diffuse: HeatFluxDensity::new::<watt_per_square_meter>(diffuse),
        }
    }

    /// Night-time irradiance.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            global: HeatFluxDensity::ZERO,
            beam: HeatFluxDensity::ZERO,
            diffuse: HeatFluxDensity::ZERO,
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.global.value.is_finite() && self.beam.value.is_finite() && self.diffuse.value.is_finite()
    }
}
