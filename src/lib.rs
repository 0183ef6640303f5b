//! # Twine Envelope
//!
//! Design-day envelope models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! The crate predicts how an opaque building wall responds to a representative
//! day of outdoor climate:
//!
//! 1. Hourly weather records for one month are reduced to a
//!    [`MonthlyClimate`](support::weather::MonthlyClimate).
//! 2. [`DesignDay`](models::envelope::design_day::DesignDay) turns those
//!    statistics into a one-second sun-air temperature series for a surface.
//! 3. [`PeriodicWall`](models::envelope::wall::PeriodicWall) drives a
//!    multilayer wall with that series until the indoor air temperature
//!    repeats from one day to the next.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Code that starts out model-specific lives in that model's internal `core`
//! module and only moves to [`support`] once more than one model needs it.

pub mod models;
pub mod support;
