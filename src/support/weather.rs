//! Monthly climate statistics from hourly weather records.
//!
//! A design day is built from a handful of monthly aggregates rather than from
//! any single historical day. This module reduces hourly records (as read from
//! an EPW-style file by the caller) into a [`MonthlyClimate`]:
//!
//! - the mean of the daily minimum and daily maximum dry-bulb temperatures,
//! - the mean time of day at which the daily maximum occurs,
//! - the hour-of-day mean of global, beam and diffuse irradiance.
//!
//! Parsing weather files is left to the caller; records only need a civil
//! timestamp in local standard time, the dry-bulb temperature and the three
//! irradiance components.
//!
//! # Example
//!
//! ```
//! use jiff::civil::date;
//! use twine_envelope::support::weather::{Irradiance, WeatherRecord, monthly_climate};
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
//!
//! let records: Vec<_> = (0..24)
//!     .map(|hour| WeatherRecord {
//!         time: date(2024, 4, 15).at(hour, 0, 0, 0),
//!         dry_bulb: ThermodynamicTemperature::new::<degree_celsius>(15.0 + f64::from(hour) / 2.0),
//!         irradiance: Irradiance::zero(),
//!     })
//!     .collect();
//!
//! let climate = monthly_climate(&records, 4).unwrap();
//! assert_eq!(climate.mean_hour_of_maximum, 23.0);
//! ```

mod error;
mod monthly;
mod record;

pub use error::ClimateError;
pub use monthly::{HourlyIrradiance, MonthlyClimate, hourly_irradiance, monthly_climate};
pub use record::{Irradiance, WeatherRecord};
