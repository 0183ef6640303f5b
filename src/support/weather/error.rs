use thiserror::Error;

/// Errors that can occur while aggregating monthly climate statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClimateError {
    /// The requested month is outside 1–12.
    #[error("invalid month: {month}")]
    InvalidMonth { month: i8 },

    /// No usable records fall within the requested month.
    ///
    /// A design day cannot be synthesized from this month.
    #[error("no weather records for month {month}")]
    DataGap { month: i8 },
}
