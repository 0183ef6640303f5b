use std::num::NonZeroUsize;

use jiff::civil::{Date, DateTime};
use thiserror::Error;
use uom::si::{
    f64::{HeatFluxDensity, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{units::TemperatureDifference, weather::Irradiance};

use super::{
    SECONDS_PER_DAY, SolarPosition,
    comfort::{comfort_half_width, neutral_temperature},
};

/// Conditions at one second of the design day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignDaySample {
    pub time: DateTime,

    /// Ambient dry-bulb temperature (Ta).
    pub ambient: ThermodynamicTemperature,

    /// Horizontal global/diffuse and normal beam irradiance.
    pub irradiance: Irradiance,

    /// Irradiance incident on the surface (Is).
    pub surface_irradiance: HeatFluxDensity,

    /// Sun-air temperature (Tsa).
    pub sol_air: ThermodynamicTemperature,

    pub position: SolarPosition,
}

/// Errors raised when samples don't form a valid design day.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SeriesError {
    /// The day doesn't have exactly one sample per second.
    #[error("expected {expected} samples, got {actual}")]
    Length { expected: usize, actual: usize },

    /// A sample is out of place in the one-second grid starting at midnight.
    #[error("sample {index} at {time} breaks the one-second grid")]
    NotContiguous { index: usize, time: DateTime },

    /// A sample has a non-finite ambient or sun-air temperature.
    #[error("sample {index} has a non-finite temperature")]
    NonFinite { index: usize },
}

/// One full design day at one-second resolution.
///
/// Holds exactly 86 400 samples, one per second from 00:00:00 of a single
/// civil date, with finite ambient and sun-air temperatures.
/// The only way to build one is [`DesignDaySeries::new`], which checks this.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignDaySeries {
    date: Date,
    samples: Vec<DesignDaySample>,
    ambient_min: ThermodynamicTemperature,
    ambient_max: ThermodynamicTemperature,
    neutral_temperature: ThermodynamicTemperature,
    comfort_half_width: TemperatureInterval,
}

impl DesignDaySeries {
    /// Validates `samples` as the design day for `date`.
    ///
    /// The neutral temperature and comfort half-width are derived from the
    /// ambient temperatures here.
    ///
    /// # Errors
    ///
    /// Returns a [`SeriesError`] if the samples are not one per second from
    /// midnight of `date`, or if any ambient or sun-air temperature is not finite.
    pub fn new(date: Date, samples: Vec<DesignDaySample>) -> Result<Self, SeriesError> {
        if samples.len() != SECONDS_PER_DAY {
            return Err(SeriesError::Length {
                expected: SECONDS_PER_DAY,
                actual: samples.len(),
            });
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for (index, sample) in samples.iter().enumerate() {
            if sample.time.date() != date || second_of_day(sample.time) != Some(index) {
                return Err(SeriesError::NotContiguous {
                    index,
                    time: sample.time,
                });
            }

            let ta = sample.ambient.get::<kelvin>();
            if !ta.is_finite() || !sample.sol_air.value.is_finite() {
                return Err(SeriesError::NonFinite { index });
            }

            min = min.min(ta);
            max = max.max(ta);
            sum += ta;
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = ThermodynamicTemperature::new::<kelvin>(sum / SECONDS_PER_DAY as f64);
        let ambient_min = ThermodynamicTemperature::new::<kelvin>(min);
        let ambient_max = ThermodynamicTemperature::new::<kelvin>(max);

        Ok(Self {
            date,
            samples,
            ambient_min,
            ambient_max,
            neutral_temperature: neutral_temperature(mean),
            comfort_half_width: comfort_half_width(ambient_max.minus(ambient_min)),
        })
    }

    /// Civil date of the design day.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// All 86 400 samples, in time order.
    #[must_use]
    pub fn samples(&self) -> &[DesignDaySample] {
        &self.samples
    }

    /// Every `step`-th sample, starting at midnight.
    pub fn subsample(&self, step: NonZeroUsize) -> impl Iterator<Item = &DesignDaySample> {
        self.samples.iter().step_by(step.get())
    }

    /// Lowest ambient temperature of the day.
    #[must_use]
    pub fn ambient_min(&self) -> ThermodynamicTemperature {
        self.ambient_min
    }

    /// Highest ambient temperature of the day.
    #[must_use]
    pub fn ambient_max(&self) -> ThermodynamicTemperature {
        self.ambient_max
    }

    /// Daily ambient swing, `max Ta − min Ta`.
    #[must_use]
    pub fn ambient_swing(&self) -> TemperatureInterval {
        self.ambient_max.minus(self.ambient_min)
    }

    /// Neutral temperature Tn, `13.5 + 0.54·mean(Ta)` in °C.
    #[must_use]
    pub fn neutral_temperature(&self) -> ThermodynamicTemperature {
        self.neutral_temperature
    }

    /// Comfort band half-width ΔTn, stepped on the daily ambient swing.
    #[must_use]
    pub fn comfort_half_width(&self) -> TemperatureInterval {
        self.comfort_half_width
    }

    /// Lower and upper comfort bounds, `Tn ∓ ΔTn`.
    #[must_use]
    pub fn comfort_band(&self) -> (ThermodynamicTemperature, ThermodynamicTemperature) {
        let tn = self.neutral_temperature.get::<kelvin>();
        let half = self.comfort_half_width.get::<delta_kelvin>();
        (
            ThermodynamicTemperature::new::<kelvin>(tn - half),
            ThermodynamicTemperature::new::<kelvin>(tn + half),
        )
    }
}

fn second_of_day(time: DateTime) -> Option<usize> {
    if time.subsec_nanosecond() != 0 {
        return None;
    }
    let seconds =
        i32::from(time.hour()) * 3600 + i32::from(time.minute()) * 60 + i32::from(time.second());
    usize::try_from(seconds).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use jiff::civil::date;
    use uom::si::{angle::degree, f64::Angle, thermodynamic_temperature::degree_celsius};

    fn samples(day: Date, ambient: impl Fn(usize) -> f64) -> Vec<DesignDaySample> {
        let midnight = day.at(0, 0, 0, 0);
        (0..SECONDS_PER_DAY)
            .map(|second| {
                let t = ThermodynamicTemperature::new::<degree_celsius>(ambient(second));
                DesignDaySample {
                    time: midnight
                        .checked_add(jiff::SignedDuration::from_secs(i64::try_from(second).unwrap()))
                        .unwrap(),
                    ambient: t,
                    irradiance: Irradiance::zero(),
                    surface_irradiance: Irradiance::zero().global,
                    sol_air: t,
                    position: SolarPosition {
                        zenith: Angle::new::<degree>(100.0),
                        azimuth: Angle::new::<degree>(0.0),
                    },
                }
            })
            .collect()
    }

    #[test]
    fn comfort_signals_from_ambient() {
        let day = date(2024, 6, 15);
        // Square wave between 10 °C and 30 °C: mean 20 °C, swing 20 K.
        let series = DesignDaySeries::new(day, samples(day, |s| if s < 43_200 { 10.0 } else { 30.0 }))
            .unwrap();

        assert_relative_eq!(series.neutral_temperature().get::<degree_celsius>(), 24.3, epsilon = 1e-9);
        assert_relative_eq!(series.comfort_half_width().get::<delta_kelvin>(), 2.0);
        assert_relative_eq!(series.ambient_swing().get::<delta_kelvin>(), 20.0, epsilon = 1e-9);

        let (lower, upper) = series.comfort_band();
        assert_relative_eq!(lower.get::<degree_celsius>(), 22.3, epsilon = 1e-9);
        assert_relative_eq!(upper.get::<degree_celsius>(), 26.3, epsilon = 1e-9);
    }

    #[test]
    fn subsample_starts_at_midnight() {
        let day = date(2024, 6, 15);
        let series = DesignDaySeries::new(day, samples(day, |_| 20.0)).unwrap();

        let coarse: Vec<_> = series.subsample(NonZeroUsize::new(600).unwrap()).collect();

        assert_eq!(coarse.len(), 144);
        assert_eq!(coarse[0].time, day.at(0, 0, 0, 0));
        assert_eq!(coarse[1].time, day.at(0, 10, 0, 0));
        assert_eq!(coarse[143].time, day.at(23, 50, 0, 0));
    }

    #[test]
    fn rejects_wrong_length() {
        let day = date(2024, 6, 15);
        let mut s = samples(day, |_| 20.0);
        s.pop();
        assert_eq!(
            DesignDaySeries::new(day, s),
            Err(SeriesError::Length {
                expected: SECONDS_PER_DAY,
                actual: SECONDS_PER_DAY - 1
            })
        );
    }

    #[test]
    fn rejects_gaps_and_foreign_dates() {
        let day = date(2024, 6, 15);

        let mut swapped = samples(day, |_| 20.0);
        swapped.swap(10, 11);
        assert!(matches!(
            DesignDaySeries::new(day, swapped),
            Err(SeriesError::NotContiguous { index: 10, .. })
        ));

        let other_day = samples(date(2024, 6, 16), |_| 20.0);
        assert!(matches!(
            DesignDaySeries::new(day, other_day),
            Err(SeriesError::NotContiguous { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_non_finite_temperatures() {
        let day = date(2024, 6, 15);
        let mut s = samples(day, |_| 20.0);
        s[500].sol_air = ThermodynamicTemperature::new::<degree_celsius>(f64::NAN);
        assert_eq!(
            DesignDaySeries::new(day, s),
            Err(SeriesError::NonFinite { index: 500 })
        );
    }
}
