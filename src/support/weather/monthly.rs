use std::collections::BTreeMap;

use jiff::civil::{Date, DateTime};
use uom::si::{
    f64::{HeatFluxDensity, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    thermodynamic_temperature::degree_celsius,
};

use super::{ClimateError, Irradiance, WeatherRecord};

/// Monthly climate statistics that anchor a design day.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyClimate {
    /// Calendar month, 1–12.
    pub month: i8,

    /// Mean over the month's days of each day's minimum dry-bulb temperature.
    pub mean_daily_minimum: ThermodynamicTemperature,

    /// Mean over the month's days of each day's maximum dry-bulb temperature.
    pub mean_daily_maximum: ThermodynamicTemperature,

    /// Mean time of day (fractional hour) at which the daily maximum occurs.
    pub mean_hour_of_maximum: f64,

    /// Hour-of-day mean irradiance.
    pub irradiance: HourlyIrradiance,
}

/// Mean irradiance for each hour of the day.
///
/// Hours without any record are empty rather than zero, so interpolation can
/// bridge them instead of treating them as night.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyIrradiance([Option<Irradiance>; 24]);

impl HourlyIrradiance {
    /// Creates a profile from 24 hourly buckets, hour 0 first.
    #[must_use]
    pub fn new(hours: [Option<Irradiance>; 24]) -> Self {
        Self(hours)
    }

    /// Returns the mean irradiance for `hour`, if that bucket has data.
    #[must_use]
    pub fn hour(&self, hour: usize) -> Option<&Irradiance> {
        self.0.get(hour).and_then(Option::as_ref)
    }

    /// Iterates over the populated buckets in hour order.
    pub fn anchors(&self) -> impl Iterator<Item = (usize, &Irradiance)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(hour, bucket)| bucket.as_ref().map(|irr| (hour, irr)))
    }
}

/// Computes the monthly climate statistics for `month`.
///
/// Records outside the month are ignored, as are records whose dry-bulb
/// temperature is not finite (missing-data markers).
/// When several records tie for a day's maximum, the earliest one sets the
/// hour of the maximum.
///
/// # Errors
///
/// Returns [`ClimateError::InvalidMonth`] if `month` is not in 1–12, and
/// [`ClimateError::DataGap`] if no usable record falls within the month.
pub fn monthly_climate(
    records: &[WeatherRecord],
    month: i8,
) -> Result<MonthlyClimate, ClimateError> {
    check_month(month)?;

    let mut days: BTreeMap<Date, DayExtremes> = BTreeMap::new();
    for record in records.iter().filter(|r| r.time.month() == month) {
        let t = record.dry_bulb.get::<degree_celsius>();
        if !t.is_finite() {
            continue;
        }
        days.entry(record.time.date())
            .and_modify(|day| day.update(t, record.time))
            .or_insert_with(|| DayExtremes::new(t, record.time));
    }

    if days.is_empty() {
        return Err(ClimateError::DataGap { month });
    }

    let mut minimum = Mean::default();
    let mut maximum = Mean::default();
    let mut hour_of_maximum = Mean::default();
    for day in days.values() {
        minimum.add(day.min);
        maximum.add(day.max);
        hour_of_maximum.add(fractional_hour(day.max_time));
    }

    Ok(MonthlyClimate {
        month,
        mean_daily_minimum: ThermodynamicTemperature::new::<degree_celsius>(minimum.value()),
        mean_daily_maximum: ThermodynamicTemperature::new::<degree_celsius>(maximum.value()),
        mean_hour_of_maximum: hour_of_maximum.value(),
        irradiance: hourly_irradiance(records, month)?,
    })
}

/// Computes the hour-of-day mean irradiance for `month`.
///
/// Records are bucketed by the hour of their timestamp (0–23).
/// Records with any non-finite component are skipped.
///
/// # Errors
///
/// Returns [`ClimateError::InvalidMonth`] if `month` is not in 1–12, and
/// [`ClimateError::DataGap`] if no usable record falls within the month.
pub fn hourly_irradiance(
    records: &[WeatherRecord],
    month: i8,
) -> Result<HourlyIrradiance, ClimateError> {
    check_month(month)?;

    let mut buckets = [IrradianceMean::default(); 24];
    for record in records.iter().filter(|r| r.time.month() == month) {
        if !record.irradiance.is_finite() {
            continue;
        }
        // Hours are always 0..=23 for a civil time.
        let hour = usize::try_from(record.time.hour()).unwrap_or_default();
        buckets[hour].add(&record.irradiance);
    }

    if buckets.iter().all(|b| b.global.count == 0) {
        return Err(ClimateError::DataGap { month });
    }

    Ok(HourlyIrradiance(buckets.map(|b| b.value())))
}

fn check_month(month: i8) -> Result<(), ClimateError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ClimateError::InvalidMonth { month })
    }
}

/// Hour plus minute as a fractional hour; seconds are ignored.
fn fractional_hour(time: DateTime) -> f64 {
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0
}

/// Extremes of one civil day, in °C.
#[derive(Debug, Clone, Copy)]
struct DayExtremes {
    min: f64,
    max: f64,
    max_time: DateTime,
}

impl DayExtremes {
    fn new(t: f64, time: DateTime) -> Self {
        Self {
            min: t,
            max: t,
            max_time: time,
        }
    }

    fn update(&mut self, t: f64, time: DateTime) {
        self.min = self.min.min(t);
        if t > self.max || (t == self.max && time < self.max_time) {
            self.max = t;
            self.max_time = time;
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn value(&self) -> f64 {
        self.sum / self.count as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct IrradianceMean {
    global: Mean,
    beam: Mean,
    diffuse: Mean,
}

impl IrradianceMean {
    fn add(&mut self, irradiance: &Irradiance) {
        self.global.add(irradiance.global.get::<watt_per_square_meter>());
        self.beam.add(irradiance.beam.get::<watt_per_square_meter>());
        self.diffuse.add(irradiance.diffuse.get::<watt_per_square_meter>());
    }

    fn value(&self) -> Option<Irradiance> {
        if self.global.count == 0 {
            return None;
        }
        Some(Irradiance {
            global: HeatFluxDensity::new::<watt_per_square_meter>(self.global.value()),
            beam: HeatFluxDensity::new::<watt_per_square_meter>(self.beam.value()),
            diffuse: HeatFluxDensity::new::<watt_per_square_meter>(self.diffuse.value()),
        })
    }
}
