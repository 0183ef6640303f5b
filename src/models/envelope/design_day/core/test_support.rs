use std::f64::consts::PI;

use jiff::{civil::DateTime, tz::Offset};
use thiserror::Error;
use uom::si::{
    angle::degree,
    f64::{Angle, HeatFluxDensity, HeatTransfer, Length, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{StrictlyPositive, UnitInterval},
    weather::{HourlyIrradiance, Irradiance, MonthlyClimate},
};

use super::{Location, SolarGeometry, SolarPosition, Surface};

/// Deterministic sun that rises and sets at fixed fractional hours.
///
/// Between sunrise and sunset the elevation follows `60°·sin(π·f)`, where `f`
/// is the fraction of daylight elapsed; at night the sun sits at −10°.
/// Surface irradiance is the global horizontal component.
#[derive(Debug, Clone, Copy)]
pub(super) struct TestGeometry {
    sunrise: f64,
    sunset: f64,
}

impl TestGeometry {
    pub(super) fn new(sunrise: f64, sunset: f64) -> Self {
        Self { sunrise, sunset }
    }

    fn elevation(&self, time: DateTime) -> f64 {
        let hour = f64::from(time.hour())
            + f64::from(time.minute()) / 60.0
            + f64::from(time.second()) / 3600.0;
        if hour < self.sunrise || hour > self.sunset {
            return -10.0;
        }
        60.0 * (PI * (hour - self.sunrise) / (self.sunset - self.sunrise)).sin()
    }
}

impl SolarGeometry for TestGeometry {
    type Error = TestGeometryError;

    fn solar_position(
        &self,
        _location: &Location,
        times: &[DateTime],
    ) -> Result<Vec<SolarPosition>, Self::Error> {
        Ok(times
            .iter()
            .map(|&time| SolarPosition {
                zenith: Angle::new::<degree>(90.0 - self.elevation(time)),
                azimuth: Angle::new::<degree>(180.0),
            })
            .collect())
    }

    fn surface_irradiance(
        &self,
        _surface: &Surface,
        irradiance: &Irradiance,
        _position: &SolarPosition,
    ) -> Result<HeatFluxDensity, Self::Error> {
        Ok(irradiance.global)
    }
}

#[derive(Debug, Error)]
#[error("ephemeris unavailable")]
pub(super) struct TestGeometryError;

/// Geometry whose ephemeris always fails.
#[derive(Debug, Clone, Copy)]
pub(super) struct FailingGeometry;

impl SolarGeometry for FailingGeometry {
    type Error = TestGeometryError;

    fn solar_position(
        &self,
        _location: &Location,
        _times: &[DateTime],
    ) -> Result<Vec<SolarPosition>, Self::Error> {
        Err(TestGeometryError)
    }

    fn surface_irradiance(
        &self,
        _surface: &Surface,
        _irradiance: &Irradiance,
        _position: &SolarPosition,
    ) -> Result<HeatFluxDensity, Self::Error> {
        Err(TestGeometryError)
    }
}

/// Geometry that drops the last solar position of the day.
#[derive(Debug, Clone, Copy)]
pub(super) struct TruncatingGeometry;

impl SolarGeometry for TruncatingGeometry {
    type Error = TestGeometryError;

    fn solar_position(
        &self,
        location: &Location,
        times: &[DateTime],
    ) -> Result<Vec<SolarPosition>, Self::Error> {
        let mut positions = TestGeometry::new(6.0, 18.0).solar_position(location, times)?;
        positions.pop();
        Ok(positions)
    }

    fn surface_irradiance(
        &self,
        _surface: &Surface,
        irradiance: &Irradiance,
        _position: &SolarPosition,
    ) -> Result<HeatFluxDensity, Self::Error> {
        Ok(irradiance.global)
    }
}

pub(super) fn location() -> Location {
    Location {
        latitude: Angle::new::<degree>(18.85),
        longitude: Angle::new::<degree>(-99.28),
        altitude: Length::new::<meter>(1280.0),
        utc_offset: Offset::constant(-6),
    }
}

pub(super) fn surface(tilt: f64) -> Surface {
    Surface {
        tilt: Angle::new::<degree>(tilt),
        azimuth: Angle::new::<degree>(180.0),
        absorptance: UnitInterval::new(0.6).unwrap(),
        convection: StrictlyPositive::new(HeatTransfer::new::<watt_per_square_meter_kelvin>(13.0))
            .unwrap(),
    }
}

/// Climate with a 12–30 °C swing peaking at 15:00 and a triangular
/// daytime irradiance profile between 07:00 and 17:00.
pub(super) fn climate(month: i8) -> MonthlyClimate {
    let mut hours = [None; 24];
    for (hour, bucket) in hours.iter_mut().enumerate() {
        let distance = (f64::from(u32::try_from(hour).unwrap()) - 12.0).abs();
        let global = (1000.0 - 200.0 * distance).max(0.0);
        *bucket = Some(Irradiance::from_watts_per_square_meter(
            global,
            0.7 * global,
            0.3 * global,
        ));
    }

    MonthlyClimate {
        month,
        mean_daily_minimum: ThermodynamicTemperature::new::<degree_celsius>(12.0),
        mean_daily_maximum: ThermodynamicTemperature::new::<degree_celsius>(30.0),
        mean_hour_of_maximum: 15.0,
        irradiance: HourlyIrradiance::new(hours),
    }
}
