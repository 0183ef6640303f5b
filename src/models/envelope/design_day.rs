//! Design-day sun-air temperature model.
//!
//! [`DesignDay`] turns a month of climate statistics into a one-second
//! sun-air temperature series for a building surface. Solar ephemeris and
//! plane-of-array transposition are supplied by a [`SolarGeometry`]
//! implementation.
//!
//! The computational core is in the internal `core` module.

mod core;

pub use self::core::{
    AmbientCurve, DesignDayInput, DesignDaySample, DesignDaySeries, Location, SECONDS_PER_DAY,
    SeriesError, SolarGeometry, SolarPosition, Surface, SynthesisError, UpsampleError,
    comfort_half_width, long_wave_correction, neutral_temperature, sol_air_temperature,
};

use twine_core::Model;

/// Design-day synthesizer.
///
/// Wraps a [`SolarGeometry`] so the same ephemeris can be reused across
/// months and surfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesignDay<G> {
    geometry: G,
}

impl<G: SolarGeometry> DesignDay<G> {
    /// Creates a synthesizer backed by `geometry`.
    #[must_use]
    pub fn new(geometry: G) -> Self {
        Self { geometry }
    }

    /// Returns the solar geometry collaborator.
    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Synthesizes the design day described by `input`.
    ///
    /// # Errors
    ///
    /// Returns a [`SynthesisError`] if the design date is outside the climate
    /// month, the sun never rises, the temperature anchors are out of order,
    /// the irradiance profile can't be interpolated, or the solar geometry
    /// collaborator fails.
    pub fn synthesize(&self, input: &DesignDayInput) -> Result<DesignDaySeries, SynthesisError> {
        self::core::synthesize(&self.geometry, input)
    }
}

impl<G: SolarGeometry> Model for DesignDay<G> {
    type Input = DesignDayInput;
    type Output = DesignDaySeries;
    type Error = SynthesisError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.synthesize(input)
    }
}
