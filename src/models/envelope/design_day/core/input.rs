use jiff::civil::Date;

use crate::support::weather::MonthlyClimate;

use super::{Location, Surface, SynthesisError};

/// Day of the month used by [`DesignDayInput::mid_month`].
const MID_MONTH_DAY: i8 = 15;

/// Everything needed to synthesize one design day.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignDayInput {
    /// Monthly statistics the idealized day is built from.
    pub climate: MonthlyClimate,

    pub location: Location,

    /// Civil date of the design day; must fall in `climate.month`.
    pub date: Date,

    pub surface: Surface,
}

impl DesignDayInput {
    /// Builds an input for the 15th of the climate's month in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidDate`] if `year` and the climate month
    /// don't form a valid civil date.
    pub fn mid_month(
        climate: MonthlyClimate,
        location: Location,
        year: i16,
        surface: Surface,
    ) -> Result<Self, SynthesisError> {
        let month = climate.month;
        let date = Date::new(year, month, MID_MONTH_DAY)
            .map_err(|_| SynthesisError::InvalidDate { year, month })?;

        Ok(Self {
            climate,
            location,
            date,
            surface,
        })
    }
}
