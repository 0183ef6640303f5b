use jiff::civil::Date;
use ninterp::error::{InterpolateError, ValidateError};
use thiserror::Error;

use super::SeriesError;

/// Errors that can occur while synthesizing a design day.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// The ambient curve anchors don't describe a valid day.
    ///
    /// Either the sun never rises on the design date (`sunrise` is `None`) or
    /// the anchors are out of order, which would put a zero-length half-wave
    /// in the ambient curve.
    #[error("design day geometry undefined: sunrise={sunrise:?}, peak={peak}")]
    GeometryUndefined {
        /// Sunrise as a fractional hour, if the sun rises at all.
        sunrise: Option<f64>,

        /// Mean hour of the daily maximum temperature.
        peak: f64,
    },

    /// The design date falls outside the month the climate summarizes.
    #[error("design date {date} is not in climate month {month}")]
    MonthMismatch { date: Date, month: i8 },

    /// No valid design date exists for the requested year and month.
    #[error("no design date in {year}-{month:02}")]
    InvalidDate { year: i16, month: i8 },

    /// The solar geometry collaborator failed.
    #[error("solar geometry failed: {context}")]
    Geometry {
        /// Operation that failed.
        context: String,

        /// Underlying collaborator error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The solar geometry collaborator returned the wrong number of positions.
    #[error("solar geometry returned {actual} positions for {expected} times")]
    GeometryLength { expected: usize, actual: usize },

    /// Hourly irradiance could not be interpolated to one-second resolution.
    #[error("irradiance upsampling failed")]
    Upsample(#[from] UpsampleError),

    /// The synthesized samples violate the series invariant.
    #[error("invalid design day series")]
    Series(#[from] SeriesError),
}

impl SynthesisError {
    /// Creates a geometry failure error with context.
    pub(super) fn geometry_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Geometry {
            context: context.into(),
            source: Box::new(err),
        }
    }
}

/// Errors that can occur while interpolating hourly irradiance.
#[derive(Debug, Error)]
pub enum UpsampleError {
    /// The hourly profile has no populated hour.
    #[error("hourly irradiance profile is empty")]
    NoAnchors,

    #[error(transparent)]
    Validation(#[from] ValidateError),

    #[error(transparent)]
    Interpolation(#[from] InterpolateError),
}
