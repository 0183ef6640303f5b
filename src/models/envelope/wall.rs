//! Periodic wall conduction model.
//!
//! [`PeriodicWall`] drives a discretized [`Construction`] with the sun-air
//! temperature of a [`DesignDaySeries`] and returns the steady periodic
//! response of the room air behind it, with decrement factors relative to
//! the ambient and sun-air swings.
//!
//! The computational core is in the internal `core` module.
//!
//! [`DesignDaySeries`]: crate::models::envelope::design_day::DesignDaySeries

mod core;

pub use self::core::{
    Action, AssemblyError, Construction, DecrementFactor, DiscretizedWall, Event, Layer,
    Material, MaterialCatalog, Node, ResultSample, Results, WallConfig, WallError,
};

use twine_core::{Model, Observer};

use self::core::Parameters;
use super::design_day::DesignDaySeries;

/// A discretized wall ready to be solved against design days.
#[derive(Debug, Clone)]
pub struct PeriodicWall {
    wall: DiscretizedWall,
    config: WallConfig,
    parameters: Parameters,
}

impl PeriodicWall {
    /// Discretizes `construction` and validates `config`.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Assembly`] if the construction can't be split into
    /// `config.nodes` cells, and [`WallError::InvalidTimeStep`] or
    /// [`WallError::InvalidConfig`] for an invalid configuration.
    pub fn new(construction: &Construction, config: WallConfig) -> Result<Self, WallError> {
        let parameters = Parameters::new(&config)?;
        let wall = DiscretizedWall::new(construction, config.nodes)?;
        Ok(Self {
            wall,
            config,
            parameters,
        })
    }

    /// Discretizes and solves in one call.
    ///
    /// # Errors
    ///
    /// Returns any error from [`PeriodicWall::new`] or [`PeriodicWall::solve`].
    pub fn solve_construction(
        construction: &Construction,
        series: &DesignDaySeries,
        config: WallConfig,
    ) -> Result<Results, WallError> {
        Self::new(construction, config)?.solve(series)
    }

    /// Returns the discretized wall.
    #[must_use]
    pub fn wall(&self) -> &DiscretizedWall {
        &self.wall
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    /// Solves the periodic response to `series`.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NonConvergence`] if the daily cycle doesn't repeat
    /// within `max_passes`, or [`WallError::NumericInstability`] if a step
    /// produces a singular system or a non-finite temperature.
    pub fn solve(&self, series: &DesignDaySeries) -> Result<Results, WallError> {
        self.solve_observed(series, ())
    }

    /// Solves the periodic response to `series`, reporting each full-day pass
    /// to `observer`.
    ///
    /// The observer may return [`Action::StopEarly`] to end the solve; unless
    /// that pass converged, the solve then fails with [`WallError::Aborted`].
    ///
    /// # Errors
    ///
    /// Returns the errors of [`PeriodicWall::solve`], plus
    /// [`WallError::Aborted`].
    pub fn solve_observed<Obs>(
        &self,
        series: &DesignDaySeries,
        observer: Obs,
    ) -> Result<Results, WallError>
    where
        Obs: Observer<Event, Action>,
    {
        self::core::solve(&self.wall, &self.parameters, series, observer)
    }
}

impl Model for PeriodicWall {
    type Input = DesignDaySeries;
    type Output = Results;
    type Error = WallError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}
