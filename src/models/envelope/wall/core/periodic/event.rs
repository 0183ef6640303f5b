use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};

/// Event emitted by the periodic wall solver after each full-day pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Pass number, starting at 1.
    pub pass: usize,

    /// Mean absolute node change between the start and end of the pass.
    pub mean_change: TemperatureInterval,

    /// Lowest room-air temperature recorded during the pass.
    pub indoor_min: ThermodynamicTemperature,

    /// Highest room-air temperature recorded during the pass.
    pub indoor_max: ThermodynamicTemperature,
}
