use thiserror::Error;
use uom::si::f64::TemperatureInterval;

use crate::support::{constraint::ConstraintError, tridiagonal::TridiagonalError};

/// Errors that can occur while describing or discretizing a construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssemblyError {
    /// The construction has no layers.
    #[error("construction has no layers")]
    Empty,

    /// Too few nodes to give every layer one and still span two nodes.
    #[error("{nodes} nodes can't discretize {layers} layers (need at least max(2, layers))")]
    TooFewNodes { nodes: usize, layers: usize },

    /// A layer or material property violates its constraint.
    #[error("invalid layer {property}")]
    InvalidLayer {
        /// Name of the offending property.
        property: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// A material name is missing from the catalog.
    #[error("unknown material: {name}")]
    UnknownMaterial { name: String },
}

/// Errors that can occur while solving the periodic wall response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WallError {
    /// The construction could not be discretized.
    #[error("invalid assembly")]
    Assembly(#[from] AssemblyError),

    /// The time step is not a whole number of seconds dividing one day.
    #[error("invalid time step: {seconds} s")]
    InvalidTimeStep { seconds: f64 },

    /// A configuration value violates its constraint.
    #[error("invalid configuration value: {parameter}")]
    InvalidConfig {
        parameter: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// The pass limit was reached before the daily cycle repeated.
    #[error("did not converge after {passes} passes: mean change={mean_change:?}")]
    NonConvergence {
        passes: usize,

        /// Mean absolute node change over the last pass.
        mean_change: TemperatureInterval,
    },

    /// An observer stopped the solve before the daily cycle repeated.
    #[error("did not converge: stopped by observer after {passes} passes")]
    Aborted {
        passes: usize,

        /// Mean absolute node change over the last pass.
        mean_change: TemperatureInterval,
    },

    /// A time step produced a singular system or a non-finite temperature.
    ///
    /// `source` is set when the tridiagonal solve itself failed.
    #[error("numeric instability in pass {pass} at step {step}")]
    NumericInstability {
        pass: usize,
        step: usize,

        #[source]
        source: Option<TridiagonalError>,
    },
}
