use std::f64::consts::PI;

use jiff::{
    SignedDuration,
    civil::{Date, date},
};
use uom::si::{
    angle::degree,
    f64::{
        Angle, HeatFluxDensity, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    heat_flux_density::watt_per_square_meter,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    models::envelope::design_day::{
        DesignDaySample, DesignDaySeries, SECONDS_PER_DAY, SolarPosition, neutral_temperature,
    },
    support::weather::Irradiance,
};

use super::{Construction, Layer, Material};

const DAY: Date = date(2024, 7, 15);

/// Material from conductivity (W/m·K), density (kg/m³) and specific heat (J/kg·K).
pub(super) fn material(k: f64, rho: f64, c: f64) -> Material {
    Material::from_density_and_specific_heat(
        ThermalConductivity::new::<watt_per_meter_kelvin>(k),
        MassDensity::new::<kilogram_per_cubic_meter>(rho),
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(c),
    )
    .unwrap()
}

/// Construction from `(thickness m, k, ρc)` layers, outside first.
pub(super) fn construction(layers: &[(f64, f64, f64)]) -> Construction {
    let layers = layers
        .iter()
        .enumerate()
        .map(|(i, &(thickness, k, rho_c))| {
            Layer::new(
                format!("layer {i}"),
                material(k, rho_c, 1.0),
                Length::new::<meter>(thickness),
            )
            .unwrap()
        })
        .collect();
    Construction::new(layers).unwrap()
}

/// Single-layer construction.
pub(super) fn homogeneous(thickness: f64, k: f64, rho_c: f64) -> Construction {
    construction(&[(thickness, k, rho_c)])
}

/// Constant ambient at `ambient` °C with sun-air held at the resulting
/// neutral temperature.
pub(super) fn steady_series(ambient: f64) -> DesignDaySeries {
    let ta = ThermodynamicTemperature::new::<degree_celsius>(ambient);
    let tsa = neutral_temperature(ta);
    series(|_| (ta, tsa))
}

/// Ambient and sun-air both following a cosine between `min` and `max` °C,
/// peaking at 15:00.
pub(super) fn sinusoidal_series(min: f64, max: f64) -> DesignDaySeries {
    let mid = 0.5 * (min + max);
    let amplitude = 0.5 * (max - min);
    series(|second| {
        #[allow(clippy::cast_precision_loss)]
        let phase = 2.0 * PI * (second as f64 - 15.0 * 3600.0) / SECONDS_PER_DAY as f64;
        let t = ThermodynamicTemperature::new::<degree_celsius>(mid + amplitude * phase.cos());
        (t, t)
    })
}

/// Builds a design day from `(ambient, sun-air)` per second of day.
fn series(
    temperatures: impl Fn(usize) -> (ThermodynamicTemperature, ThermodynamicTemperature),
) -> DesignDaySeries {
    let midnight = DAY.at(0, 0, 0, 0);
    let samples = (0..SECONDS_PER_DAY)
        .map(|second| {
            let (ambient, sol_air) = temperatures(second);
            let offset = SignedDuration::from_secs(i64::try_from(second).unwrap());
            DesignDaySample {
                time: midnight.checked_add(offset).unwrap(),
                ambient,
                irradiance: Irradiance::zero(),
                surface_irradiance: HeatFluxDensity::new::<watt_per_square_meter>(0.0),
                sol_air,
                position: SolarPosition {
                    zenith: Angle::new::<degree>(100.0),
                    azimuth: Angle::new::<degree>(0.0),
                },
            }
        })
        .collect();
    DesignDaySeries::new(DAY, samples).unwrap()
}
