use std::f64::consts::PI;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::{SECONDS_PER_DAY, SynthesisError};

/// Idealized daily dry-bulb temperature cycle.
///
/// Three cosine half-waves join the daily minimum at sunrise (`Ho`) to the
/// daily maximum at the hour of maximum (`Hi`) and back:
///
/// ```text
/// t ≤ Ho:       y = (cos(π·(Ho − t)/(D + Ho − Hi)) + 1)/2
/// Ho < t ≤ Hi:  y = (cos(π·(t − Ho)/(Hi − Ho)) + 1)/2
/// t > Hi:       y = (cos(π·(D + Ho − t)/(D + Ho − Hi)) + 1)/2
///
/// Ta(t) = Tmin + (Tmax − Tmin)·(1 − y)
/// ```
///
/// with every time in seconds of the day and `D = 86 400 s`.
/// The curve is continuous, reaches `Tmin` exactly at `Ho` and `Tmax` exactly
/// at `Hi`, and wraps smoothly from midnight to midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientCurve {
    t_min: f64,
    t_max: f64,
    sunrise: f64,
    peak: f64,
}

impl AmbientCurve {
    /// Creates a curve from the daily extremes and the two anchor hours.
    ///
    /// `sunrise` and `peak` are fractional hours of the day.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::GeometryUndefined`] unless
    /// `0 ≤ sunrise < peak < 24`, since otherwise one of the half-waves has
    /// zero or negative length.
    pub fn new(
        t_min: ThermodynamicTemperature,
        t_max: ThermodynamicTemperature,
        sunrise: f64,
        peak: f64,
    ) -> Result<Self, SynthesisError> {
        let ordered = sunrise.is_finite()
            && peak.is_finite()
            && sunrise >= 0.0
            && sunrise < peak
            && peak < 24.0;
        if !ordered {
            return Err(SynthesisError::GeometryUndefined {
                sunrise: Some(sunrise),
                peak,
            });
        }

        Ok(Self {
            t_min: t_min.get::<kelvin>(),
            t_max: t_max.get::<kelvin>(),
            sunrise: sunrise * 3600.0,
            peak: peak * 3600.0,
        })
    }

    /// Shape factor `y`: 1 at sunrise (coolest), 0 at the peak (warmest).
    #[must_use]
    pub fn shape(&self, second: f64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let day = SECONDS_PER_DAY as f64;
        let night = day + self.sunrise - self.peak;

        let phase = if second <= self.sunrise {
            (self.sunrise - second) / night
        } else if second <= self.peak {
            (second - self.sunrise) / (self.peak - self.sunrise)
        } else {
            (day + self.sunrise - second) / night
        };

        (f64::cos(PI * phase) + 1.0) / 2.0
    }

    /// Ambient temperature `second` seconds after midnight.
    #[must_use]
    pub fn temperature(&self, second: f64) -> ThermodynamicTemperature {
        let y = self.shape(second);
        ThermodynamicTemperature::new::<kelvin>(self.t_min + (self.t_max - self.t_min) * (1.0 - y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    fn curve() -> AmbientCurve {
        AmbientCurve::new(
            ThermodynamicTemperature::new::<degree_celsius>(12.0),
            ThermodynamicTemperature::new::<degree_celsius>(30.0),
            6.5,
            15.0,
        )
        .unwrap()
    }

    fn celsius(curve: &AmbientCurve, second: f64) -> f64 {
        curve.temperature(second).get::<degree_celsius>()
    }

    #[test]
    fn extremes_at_anchors() {
        let curve = curve();
        assert_relative_eq!(celsius(&curve, 6.5 * 3600.0), 12.0, epsilon = 1e-9);
        assert_relative_eq!(celsius(&curve, 15.0 * 3600.0), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn stays_within_extremes() {
        let curve = curve();
        for second in (0..86_400).step_by(60) {
            let t = celsius(&curve, f64::from(second));
            assert!((12.0 - 1e-9..=30.0 + 1e-9).contains(&t), "t={t} at {second}");
        }
    }

    #[test]
    fn continuous_at_anchors() {
        let curve = curve();
        for anchor in [6.5 * 3600.0, 15.0 * 3600.0] {
            let before = celsius(&curve, anchor - 1e-3);
            let after = celsius(&curve, anchor + 1e-3);
            assert_relative_eq!(before, after, epsilon = 1e-6);
        }
    }

    #[test]
    fn wraps_at_midnight() {
        let curve = curve();
        assert_relative_eq!(celsius(&curve, 0.0), celsius(&curve, 86_400.0), epsilon = 1e-9);
    }

    #[test]
    fn warms_after_sunrise_and_cools_after_peak() {
        let curve = curve();
        assert!(celsius(&curve, 9.0 * 3600.0) < celsius(&curve, 12.0 * 3600.0));
        assert!(celsius(&curve, 18.0 * 3600.0) > celsius(&curve, 22.0 * 3600.0));
        assert!(celsius(&curve, 2.0 * 3600.0) > celsius(&curve, 5.0 * 3600.0));
    }

    #[test]
    fn rejects_out_of_order_anchors() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        for (sunrise, peak) in [(15.0, 15.0), (16.0, 14.0), (6.0, 24.0), (f64::NAN, 14.0)] {
            assert!(matches!(
                AmbientCurve::new(t, t, sunrise, peak),
                Err(SynthesisError::GeometryUndefined { .. })
            ));
        }
    }
}
