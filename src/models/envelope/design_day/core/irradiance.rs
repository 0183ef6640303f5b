use ndarray::Array1;
use ninterp::{
    interpolator::Extrapolate,
    prelude::{Interp1DOwned, Interpolator},
    strategy::Linear,
};
use uom::si::{f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter};

use crate::support::weather::{HourlyIrradiance, Irradiance};

use super::{SECONDS_PER_DAY, UpsampleError};

/// Interpolates an hourly irradiance profile to one value per second.
///
/// Each populated hour is an anchor at `hour·3600 s`. Between anchors the
/// components are interpolated linearly in time; before the first and after
/// the last anchor the nearest anchor value is held. Every anchor second gets
/// the hourly mean back exactly.
///
/// # Errors
///
/// Returns [`UpsampleError::NoAnchors`] if no hour is populated, or a
/// validation error if the anchor values can't be interpolated.
pub(super) fn upsample(profile: &HourlyIrradiance) -> Result<Vec<Irradiance>, UpsampleError> {
    let anchors: Vec<_> = profile.anchors().collect();

    match anchors.as_slice() {
        [] => Err(UpsampleError::NoAnchors),
        [(_, only)] => Ok(vec![**only; SECONDS_PER_DAY]),
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let x: Array1<f64> = anchors
                .iter()
                .map(|(hour, _)| (hour * 3600) as f64)
                .collect();

            let global = component(&x, &anchors, |irr| irr.global)?;
            let beam = component(&x, &anchors, |irr| irr.beam)?;
            let diffuse = component(&x, &anchors, |irr| irr.diffuse)?;

            let mut series = Vec::with_capacity(SECONDS_PER_DAY);
            for second in 0..SECONDS_PER_DAY {
                #[allow(clippy::cast_precision_loss)]
                let t = [second as f64];
                series.push(Irradiance {
                    global: watts(global.interpolate(&t)?),
                    beam: watts(beam.interpolate(&t)?),
                    diffuse: watts(diffuse.interpolate(&t)?),
                });
            }

            // Pin the anchors so rounding in the interpolation weights can't move them.
            for &(hour, irr) in &anchors {
                series[hour * 3600] = *irr;
            }

            Ok(series)
        }
    }
}

fn component(
    x: &Array1<f64>,
    anchors: &[(usize, &Irradiance)],
    select: impl Fn(&Irradiance) -> HeatFluxDensity,
) -> Result<Interp1DOwned<f64, Linear>, UpsampleError> {
    let f_x: Array1<f64> = anchors
        .iter()
        .map(|(_, irr)| select(irr).get::<watt_per_square_meter>())
        .collect();

    Ok(Interp1DOwned::new(
        x.clone(),
        f_x,
        Linear,
        Extrapolate::Clamp,
    )?)
}

fn watts(value: f64) -> HeatFluxDensity {
    HeatFluxDensity::new::<watt_per_square_meter>(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn flat(global: f64) -> Option<Irradiance> {
        Some(Irradiance::from_watts_per_square_meter(global, 0.5 * global, 0.25 * global))
    }

    fn global_at(series: &[Irradiance], second: usize) -> f64 {
        series[second].global.get::<watt_per_square_meter>()
    }

    #[test]
    fn anchors_are_reproduced_exactly() {
        let mut hours = [None; 24];
        for (hour, bucket) in hours.iter_mut().enumerate() {
            let h = f64::from(u32::try_from(hour).unwrap());
            *bucket = flat(h * h * 3.0);
        }
        let profile = HourlyIrradiance::new(hours);

        let series = upsample(&profile).unwrap();

        assert_eq!(series.len(), SECONDS_PER_DAY);
        for (hour, irr) in profile.anchors() {
            let at = &series[hour * 3600];
            assert_eq!(at.global, irr.global);
            assert_eq!(at.beam, irr.beam);
            assert_eq!(at.diffuse, irr.diffuse);
        }
    }

    #[test]
    fn linear_between_anchors() {
        let mut hours = [None; 24];
        hours[10] = flat(200.0);
        hours[11] = flat(800.0);
        let series = upsample(&HourlyIrradiance::new(hours)).unwrap();

        assert_relative_eq!(global_at(&series, 10 * 3600 + 1800), 500.0, epsilon = 1e-9);
        assert_relative_eq!(global_at(&series, 10 * 3600 + 900), 350.0, epsilon = 1e-9);
    }

    #[test]
    fn gaps_are_bridged_and_edges_are_held() {
        let mut hours = [None; 24];
        hours[8] = flat(100.0);
        hours[12] = flat(900.0);
        hours[16] = flat(300.0);
        let series = upsample(&HourlyIrradiance::new(hours)).unwrap();

        // Hours 9–11 are missing and get interpolated across.
        assert_relative_eq!(global_at(&series, 10 * 3600), 500.0, epsilon = 1e-9);

        // Before the first anchor and after the last one, the edge value holds.
        assert_relative_eq!(global_at(&series, 0), 100.0);
        assert_relative_eq!(global_at(&series, SECONDS_PER_DAY - 1), 300.0);
    }

    #[test]
    fn single_anchor_is_constant() {
        let mut hours = [None; 24];
        hours[13] = flat(640.0);
        let series = upsample(&HourlyIrradiance::new(hours)).unwrap();

        assert_relative_eq!(global_at(&series, 0), 640.0);
        assert_relative_eq!(global_at(&series, 50_000), 640.0);
    }

    #[test]
    fn empty_profile_is_rejected() {
        let profile = HourlyIrradiance::new([None; 24]);
        assert!(matches!(upsample(&profile), Err(UpsampleError::NoAnchors)));
    }
}
