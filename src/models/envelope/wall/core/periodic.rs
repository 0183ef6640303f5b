//! Fixed-point iteration toward the periodic daily response.
//!
//! The wall starts uniformly at the design day's neutral temperature and is
//! driven through the day again and again, each pass starting from where the
//! previous one ended, until the state at the end of a day matches the state
//! at its start.

mod action;
mod event;

pub use action::Action;
pub use event::Event;

use log::debug;
use twine_core::Observer;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::models::envelope::design_day::DesignDaySeries;

use super::{
    DiscretizedWall, WallError,
    config::Parameters,
    step::{StepFailure, Stepper},
};

/// Converged state of the periodic solve, in kelvin.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Periodic {
    /// Node temperatures at the end of the final pass.
    pub(super) field: Vec<f64>,

    /// Room air after each time step of the final pass.
    pub(super) indoor: Vec<f64>,

    pub(super) passes: usize,
    pub(super) mean_change: f64,
}

/// Repeats full-day passes until the mean node change over a pass falls
/// below the tolerance.
///
/// Each step is forced by the sun-air temperature at the start of the step.
/// The observer sees every pass. A converged pass wins over a stop request.
///
/// # Errors
///
/// Returns [`WallError::NumericInstability`] if a step fails,
/// [`WallError::Aborted`] if the observer stops an unconverged solve, and
/// [`WallError::NonConvergence`] if the pass limit is reached.
pub(super) fn solve<Obs>(
    wall: &DiscretizedWall,
    params: &Parameters,
    series: &DesignDaySeries,
    mut observer: Obs,
) -> Result<Periodic, WallError>
where
    Obs: Observer<Event, Action>,
{
    let forcing: Vec<f64> = series
        .subsample(params.step)
        .map(|sample| sample.sol_air.get::<kelvin>())
        .collect();

    let n = wall.len();
    let initial = series.neutral_temperature().get::<kelvin>();
    let mut state = vec![initial; n + 1];
    let mut start = vec![initial; n];
    let mut indoor = vec![initial; forcing.len()];

    let mut stepper = Stepper::new(wall, params);
    let mut mean_change = f64::INFINITY;

    for pass in 1..=params.max_passes {
        start.copy_from_slice(&state[..n]);

        for (step, (&sol_air, air)) in forcing.iter().zip(&mut indoor).enumerate() {
            stepper
                .step(&mut state, sol_air)
                .map_err(|failure| WallError::NumericInstability {
                    pass,
                    step,
                    source: match failure {
                        StepFailure::Singular(err) => Some(err),
                        StepFailure::NonFinite => None,
                    },
                })?;
            *air = state[n];
        }

        mean_change = mean_abs_change(&state[..n], &start);

        let (indoor_min, indoor_max) = indoor
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| {
                (lo.min(t), hi.max(t))
            });
        debug!(
            "pass {pass}: mean change {mean_change:.3e} K, indoor {:.2}..{:.2} K",
            indoor_min, indoor_max
        );

        let action = observer.observe(&Event {
            pass,
            mean_change: TemperatureInterval::new::<delta_kelvin>(mean_change),
            indoor_min: ThermodynamicTemperature::new::<kelvin>(indoor_min),
            indoor_max: ThermodynamicTemperature::new::<kelvin>(indoor_max),
        });

        if mean_change < params.tolerance {
            return Ok(Periodic {
                field: state[..n].to_vec(),
                indoor,
                passes: pass,
                mean_change,
            });
        }

        if action == Some(Action::StopEarly) {
            return Err(WallError::Aborted {
                passes: pass,
                mean_change: TemperatureInterval::new::<delta_kelvin>(mean_change),
            });
        }
    }

    Err(WallError::NonConvergence {
        passes: params.max_passes,
        mean_change: TemperatureInterval::new::<delta_kelvin>(mean_change),
    })
}

/// Mean of `|end − start|` over paired elements.
#[allow(clippy::cast_precision_loss)]
fn mean_abs_change(end: &[f64], start: &[f64]) -> f64 {
    let total: f64 = end.iter().zip(start).map(|(e, s)| (e - s).abs()).sum();
    total / end.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Time, time::second};

    use crate::support::tridiagonal::TridiagonalError;

    use super::super::{
        WallConfig,
        test_support::{homogeneous, sinusoidal_series, steady_series},
    };

    fn setup(config: WallConfig) -> (DiscretizedWall, Parameters) {
        let wall = DiscretizedWall::new(&homogeneous(0.1, 1.0, 1e6), config.nodes).unwrap();
        (wall, Parameters::new(&config).unwrap())
    }

    fn coarse() -> WallConfig {
        WallConfig {
            nodes: 10,
            time_step: Time::new::<second>(600.0),
            ..WallConfig::default()
        }
    }

    #[test]
    fn steady_forcing_converges_on_the_first_pass() {
        // Constant sun-air equal to the neutral temperature leaves the wall alone.
        let series = steady_series(25.0);
        let (wall, params) = setup(coarse());

        let periodic = solve(&wall, &params, &series, ()).unwrap();

        let tn = series.neutral_temperature().get::<kelvin>();
        assert_eq!(periodic.passes, 1);
        assert_eq!(periodic.indoor.len(), 144);
        for t in periodic.field.iter().chain(&periodic.indoor) {
            assert_relative_eq!(*t, tn, epsilon = 1e-9);
        }
    }

    #[test]
    fn daily_cycle_converges() {
        let series = sinusoidal_series(10.0, 35.0);
        let (wall, params) = setup(coarse());

        let periodic = solve(&wall, &params, &series, ()).unwrap();

        assert!(periodic.passes <= 200, "took {} passes", periodic.passes);
        assert!(periodic.mean_change < 5e-4);
        assert_eq!(periodic.field.len(), 10);
    }

    #[test]
    fn pass_limit_raises_non_convergence() {
        let series = sinusoidal_series(10.0, 35.0);
        let (wall, params) = setup(WallConfig {
            max_passes: 1,
            ..coarse()
        });

        let result = solve(&wall, &params, &series, ());
        assert!(matches!(
            result,
            Err(WallError::NonConvergence { passes: 1, .. })
        ));
    }

    #[test]
    fn observer_sees_each_pass_and_can_stop() {
        let series = sinusoidal_series(10.0, 35.0);
        let (wall, params) = setup(coarse());

        let mut passes = Vec::new();
        let result = solve(&wall, &params, &series, |event: &Event| {
            passes.push(event.pass);
            assert!(event.indoor_min <= event.indoor_max);
            (event.pass == 2).then_some(Action::StopEarly)
        });

        assert_eq!(passes, [1, 2]);
        assert!(matches!(result, Err(WallError::Aborted { passes: 2, .. })));
    }

    #[test]
    fn convergence_wins_over_stop_request() {
        let series = steady_series(25.0);
        let (wall, params) = setup(coarse());

        let result = solve(&wall, &params, &series, |_: &Event| Some(Action::StopEarly));
        assert!(result.is_ok());
    }

    #[test]
    fn infinite_heat_capacity_is_numerically_unstable() {
        let series = sinusoidal_series(10.0, 35.0);
        let config = coarse();
        let wall =
            DiscretizedWall::new(&homogeneous(0.1, 1.0, f64::INFINITY), config.nodes).unwrap();
        let params = Parameters::new(&config).unwrap();

        let result = solve(&wall, &params, &series, ());
        assert!(matches!(
            result,
            Err(WallError::NumericInstability {
                pass: 1,
                step: 0,
                source: Some(TridiagonalError::SingularPivot { row: 0, .. }),
            })
        ));
    }
}
