//! Building envelope models.
//!
//! - [`design_day`]: sun-air temperature for an idealized day of a month.
//! - [`wall`]: periodic transient conduction through a multilayer wall.

pub mod design_day;
pub mod wall;
