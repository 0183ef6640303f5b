use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{models::envelope::design_day::DesignDaySample, support::units::TemperatureDifference};

use super::DecrementFactor;

/// Design-day conditions at one time step, paired with the room air
/// temperature at the end of that step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultSample {
    pub design: DesignDaySample,

    /// Room-air temperature (Ti).
    pub indoor: ThermodynamicTemperature,
}

/// Periodic daily response of a wall and the room behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    /// One sample per time step over the converged day.
    pub samples: Vec<ResultSample>,

    /// Node temperatures at the end of the converged day, outside first.
    pub field: Vec<ThermodynamicTemperature>,

    /// Full-day passes needed to converge.
    pub passes: usize,

    /// Mean absolute node change over the final pass.
    pub mean_change: TemperatureInterval,

    /// Indoor swing over the ambient swing (FD); `None` for a flat ambient.
    pub decrement_factor: Option<DecrementFactor>,

    /// Indoor swing over the sun-air swing (FDsa); `None` for a flat sun-air.
    pub sol_air_decrement_factor: Option<DecrementFactor>,

    pub neutral_temperature: ThermodynamicTemperature,
    pub comfort_half_width: TemperatureInterval,
}

impl Results {
    /// Lowest and highest indoor temperature over the day.
    ///
    /// Returns `None` only if there are no samples.
    #[must_use]
    pub fn indoor_range(&self) -> Option<(ThermodynamicTemperature, ThermodynamicTemperature)> {
        let mut indoor = self.samples.iter().map(|s| s.indoor);
        let first = indoor.next()?;
        Some(indoor.fold((first, first), |(lo, hi), t| {
            (if t < lo { t } else { lo }, if t > hi { t } else { hi })
        }))
    }

    /// Daily indoor swing, `max Ti − min Ti`.
    #[must_use]
    pub fn indoor_swing(&self) -> Option<TemperatureInterval> {
        self.indoor_range().map(|(lo, hi)| hi.minus(lo))
    }

    /// Fraction of time steps with the room inside the comfort band.
    ///
    /// Returns `None` only if there are no samples.
    #[must_use]
    pub fn fraction_comfortable(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let tn = self.neutral_temperature.get::<kelvin>();
        let half = self.comfort_half_width.get::<delta_kelvin>();
        let inside = self
            .samples
            .iter()
            .filter(|s| (s.indoor.get::<kelvin>() - tn).abs() <= half)
            .count();

        #[allow(clippy::cast_precision_loss)]
        let fraction = inside as f64 / self.samples.len() as f64;
        Some(fraction)
    }
}
