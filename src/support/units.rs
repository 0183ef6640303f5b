//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units at its public boundaries
//! (temperatures, irradiance, film coefficients, conductivities, lengths).
//! This module provides the pieces wall modeling needs that [`uom`] doesn't ship.
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts one absolute temperature from
//! another and returns a [`TemperatureInterval`], which is how daily swings
//! (`max Ta − min Ta`, `max Ti − min Ti`) are expressed:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use twine_envelope::support::units::TemperatureDifference;
//!
//! let t_max = ThermodynamicTemperature::new::<degree_celsius>(31.0);
//! let t_min = ThermodynamicTemperature::new::<degree_celsius>(14.0);
//! let swing = t_max.minus(t_min);
//! assert!((swing.get::<temperature_interval::kelvin>() - 17.0).abs() < 1e-9);
//! ```
//!
//! ## Volumetric heat capacity
//!
//! [`VolumetricHeatCapacity`] (J/m³·K) is the product of density and specific
//! heat and is what the conduction equations actually use.
//!
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval

mod quantities;
mod temperature_difference;

pub use quantities::VolumetricHeatCapacity;
pub use temperature_difference::TemperatureDifference;
