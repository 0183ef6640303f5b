use uom::{
    ConstZero,
    si::{
        angle::degree,
        f64::{Angle, HeatFluxDensity, TemperatureInterval, ThermodynamicTemperature},
        heat_flux_density::watt_per_square_meter,
        heat_transfer::watt_per_square_meter_kelvin,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use super::Surface;

/// Long-wave sky correction for horizontal surfaces, in K.
const HORIZONTAL_LONG_WAVE_CORRECTION: f64 = 3.9;

/// Long-wave radiation correction subtracted from the sun-air temperature.
///
/// A horizontal surface (tilt exactly 0°) sees the full sky and loses
/// 3.9 K; any other tilt gets no correction.
#[must_use]
pub fn long_wave_correction(tilt: Angle) -> TemperatureInterval {
    if tilt.get::<degree>() == 0.0 {
        TemperatureInterval::new::<delta_kelvin>(HORIZONTAL_LONG_WAVE_CORRECTION)
    } else {
        TemperatureInterval::ZERO
    }
}

/// Sun-air temperature: `Tsa = Ta + Is·α/h − LWR`.
#[must_use]
pub fn sol_air_temperature(
    ambient: ThermodynamicTemperature,
    surface_irradiance: HeatFluxDensity,
    surface: &Surface,
) -> ThermodynamicTemperature {
    let absorbed = surface_irradiance.get::<watt_per_square_meter>() * surface.absorptance.get();
    let h = surface
        .convection
        .get()
        .get::<watt_per_square_meter_kelvin>();
    let lwr = long_wave_correction(surface.tilt).get::<delta_kelvin>();

    ThermodynamicTemperature::new::<kelvin>(ambient.get::<kelvin>() + absorbed / h - lwr)
}
