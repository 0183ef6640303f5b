use jiff::{civil::DateTime, tz::Offset};
use uom::si::{
    angle::degree,
    f64::{Angle, HeatFluxDensity, HeatTransfer, Length},
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitInterval},
    weather::Irradiance,
};

/// Sun position for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Angle between the sun and the local vertical.
    pub zenith: Angle,

    /// Compass bearing of the sun, clockwise from north.
    pub azimuth: Angle,
}

impl SolarPosition {
    /// Angle of the sun above the horizon (`90° − zenith`).
    #[must_use]
    pub fn elevation(&self) -> Angle {
        Angle::new::<degree>(90.0) - self.zenith
    }

    /// Returns `true` if the sun is on or above the horizon.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.elevation().get::<degree>() >= 0.0
    }
}

/// Site of the building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: Angle,
    pub longitude: Angle,
    pub altitude: Length,

    /// Fixed offset of local standard time from UTC.
    ///
    /// Design-day timestamps are civil times in this offset; no daylight
    /// saving rules are applied.
    pub utc_offset: Offset,
}

/// Exterior surface of the wall being analyzed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Angle from horizontal: 0° is a roof, 90° a vertical wall.
    pub tilt: Angle,

    /// Compass bearing the surface faces, clockwise from north.
    pub azimuth: Angle,

    /// Fraction of incident solar irradiance absorbed by the surface.
    pub absorptance: Constrained<f64, UnitInterval>,

    /// Exterior convection coefficient used to convert absorbed irradiance
    /// into an equivalent temperature rise.
    pub convection: Constrained<HeatTransfer, StrictlyPositive>,
}

/// Solar ephemeris and plane-of-array transposition.
///
/// Synthesis needs three things it does not compute itself: where the sun is
/// at every second of the design day, when it rises, and how much irradiance
/// reaches a tilted surface.
/// Implementations typically wrap an established solar position algorithm.
pub trait SolarGeometry {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the sun position at each of `times`, in order.
    ///
    /// `times` are civil times in `location.utc_offset`.
    ///
    /// # Errors
    ///
    /// Returns an implementation-specific error if a position can't be computed.
    fn solar_position(
        &self,
        location: &Location,
        times: &[DateTime],
    ) -> Result<Vec<SolarPosition>, Self::Error>;

    /// Returns the sunrise and sunset as fractional hours of the day.
    ///
    /// The default scans `positions` for the first and last instant with the
    /// sun on or above the horizon and reports `hour + minute / 60` for each.
    /// Returns `None` if the sun never rises.
    fn sunrise_sunset(&self, times: &[DateTime], positions: &[SolarPosition]) -> Option<(f64, f64)> {
        let first = positions.iter().position(SolarPosition::is_up)?;
        let last = positions.iter().rposition(SolarPosition::is_up)?;
        Some((
            fractional_hour(*times.get(first)?),
            fractional_hour(*times.get(last)?),
        ))
    }

    /// Returns the irradiance incident on `surface`.
    ///
    /// # Errors
    ///
    /// Returns an implementation-specific error if the transposition fails.
    fn surface_irradiance(
        &self,
        surface: &Surface,
        irradiance: &Irradiance,
        position: &SolarPosition,
    ) -> Result<HeatFluxDensity, Self::Error>;
}

/// Hour plus minute as a fractional hour; seconds are ignored.
fn fractional_hour(time: DateTime) -> f64 {
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0
}
