use log::debug;
use twine_core::Observer;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::models::envelope::design_day::DesignDaySeries;

use super::{
    Action, DiscretizedWall, Event, ResultSample, Results, WallError,
    config::Parameters,
    metrics::{decrement_factor, swing},
    periodic,
};

/// Solves the periodic response of `wall` to `series` and summarizes it.
///
/// Decrement factors compare swings over the sampled time steps.
///
/// # Errors
///
/// Returns a [`WallError`] if the periodic solve fails.
pub(in crate::models::envelope::wall) fn solve<Obs>(
    wall: &DiscretizedWall,
    params: &Parameters,
    series: &DesignDaySeries,
    observer: Obs,
) -> Result<Results, WallError>
where
    Obs: Observer<Event, Action>,
{
    let periodic = periodic::solve(wall, params, series, observer)?;

    let indoor_swing = swing(periodic.indoor.iter().copied());
    let ambient_swing = swing(
        series
            .subsample(params.step)
            .map(|s| s.ambient.get::<kelvin>()),
    );
    let sol_air_swing = swing(
        series
            .subsample(params.step)
            .map(|s| s.sol_air.get::<kelvin>()),
    );

    let fd = decrement_factor("ambient", indoor_swing, ambient_swing);
    let fd_sa = decrement_factor("sun-air", indoor_swing, sol_air_swing);

    debug!(
        "converged after {} passes: indoor swing {indoor_swing:.3} K, FD={:?}, FDsa={:?}",
        periodic.passes,
        fd.map(|f| f.value()),
        fd_sa.map(|f| f.value()),
    );

    let samples = series
        .subsample(params.step)
        .zip(&periodic.indoor)
        .map(|(design, &indoor)| ResultSample {
            design: *design,
            indoor: ThermodynamicTemperature::new::<kelvin>(indoor),
        })
        .collect();

    Ok(Results {
        samples,
        field: periodic
            .field
            .iter()
            .map(|&t| ThermodynamicTemperature::new::<kelvin>(t))
            .collect(),
        passes: periodic.passes,
        mean_change: TemperatureInterval::new::<delta_kelvin>(periodic.mean_change),
        decrement_factor: fd,
        sol_air_decrement_factor: fd_sa,
        neutral_temperature: series.neutral_temperature(),
        comfort_half_width: series.comfort_half_width(),
    })
}
