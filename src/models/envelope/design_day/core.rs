//! Design-day sun-air temperature synthesis.
//!
//! A design day is an idealized 24-hour period built from monthly statistics
//! instead of any recorded day. The ambient temperature follows a cosine
//! cycle between the mean daily minimum at sunrise and the mean daily maximum
//! at its mean hour; hourly-mean irradiance is interpolated to one-second
//! resolution; and both combine into the sun-air temperature seen by the
//! outside face of a wall.

mod ambient;
mod comfort;
mod error;
mod geometry;
mod input;
mod irradiance;
mod series;
mod sol_air;
mod synthesize;

#[cfg(test)]
mod test_support;

pub use ambient::AmbientCurve;
pub use comfort::{comfort_half_width, neutral_temperature};
pub use error::{SynthesisError, UpsampleError};
pub use geometry::{Location, SolarGeometry, SolarPosition, Surface};
pub use input::DesignDayInput;
pub use series::{DesignDaySample, DesignDaySeries, SeriesError};
pub use sol_air::{long_wave_correction, sol_air_temperature};

pub(super) use synthesize::synthesize;

/// Number of one-second samples in a design day.
pub const SECONDS_PER_DAY: usize = 86_400;
