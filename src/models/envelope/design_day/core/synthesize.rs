use jiff::{SignedDuration, civil::DateTime};

use super::{
    AmbientCurve, DesignDayInput, DesignDaySample, DesignDaySeries, SECONDS_PER_DAY,
    SolarGeometry, SynthesisError, irradiance::upsample, sol_air::sol_air_temperature,
};

/// Synthesizes the one-second design day described by `input`.
///
/// 1. Lays out 86 400 civil timestamps from midnight of `input.date`.
/// 2. Asks `geometry` for the sun position at each one and finds sunrise.
/// 3. Builds the ambient curve between sunrise (minimum) and the mean hour
///    of the daily maximum.
/// 4. Upsamples the hourly irradiance and transposes it onto the surface.
/// 5. Combines both into sun-air temperature and validates the series.
///
/// # Errors
///
/// Returns a [`SynthesisError`] if the date is outside the climate month, the
/// sun never rises, the anchors are out of order, or a collaborator fails.
pub(in crate::models::envelope::design_day) fn synthesize<G: SolarGeometry>(
    geometry: &G,
    input: &DesignDayInput,
) -> Result<DesignDaySeries, SynthesisError> {
    let DesignDayInput {
        climate,
        location,
        date,
        surface,
    } = input;

    if date.month() != climate.month {
        return Err(SynthesisError::MonthMismatch {
            date: *date,
            month: climate.month,
        });
    }

    let times = day_times(date.at(0, 0, 0, 0));

    let positions = geometry
        .solar_position(location, &times)
        .map_err(|err| SynthesisError::geometry_failed("solar position", err))?;
    if positions.len() != times.len() {
        return Err(SynthesisError::GeometryLength {
            expected: times.len(),
            actual: positions.len(),
        });
    }

    let peak = climate.mean_hour_of_maximum;
    let (sunrise, _sunset) = geometry
        .sunrise_sunset(&times, &positions)
        .ok_or(SynthesisError::GeometryUndefined {
            sunrise: None,
            peak,
        })?;

    let curve = AmbientCurve::new(
        climate.mean_daily_minimum,
        climate.mean_daily_maximum,
        sunrise,
        peak,
    )?;
    let irradiance = upsample(&climate.irradiance)?;

    let mut samples = Vec::with_capacity(SECONDS_PER_DAY);
    for (second, ((time, position), irradiance)) in
        times.into_iter().zip(positions).zip(irradiance).enumerate()
    {
        let surface_irradiance = geometry
            .surface_irradiance(surface, &irradiance, &position)
            .map_err(|err| SynthesisError::geometry_failed("surface irradiance", err))?;

        #[allow(clippy::cast_precision_loss)]
        let ambient = curve.temperature(second as f64);

        samples.push(DesignDaySample {
            time,
            ambient,
            irradiance,
            surface_irradiance,
            sol_air: sol_air_temperature(ambient, surface_irradiance, surface),
            position,
        });
    }

    let series = DesignDaySeries::new(*date, samples)?;
    log::debug!(
        "design day {date}: sunrise={sunrise:.3} h, peak={peak:.3} h, Tn={:.2} K",
        series.neutral_temperature().value
    );

    Ok(series)
}

/// One civil timestamp per second starting at `midnight`.
fn day_times(midnight: DateTime) -> Vec<DateTime> {
    (0..SECONDS_PER_DAY)
        .scan(midnight, |time, _| {
            let current = *time;
            *time = time.saturating_add(SignedDuration::from_secs(1));
            Some(current)
        })
        .collect()
}
