use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// Upper bounds (exclusive) of the daily-swing bands, in K, paired with the
/// half-width of the comfort band for that swing.
const HALF_WIDTH_STEPS: [(f64, f64); 9] = [
    (13.0, 1.25),
    (16.0, 1.50),
    (19.0, 1.75),
    (24.0, 2.00),
    (28.0, 2.25),
    (33.0, 2.50),
    (38.0, 2.75),
    (45.0, 3.00),
    (52.0, 3.25),
];

/// Half-width of the comfort band for swings of 52 K and above.
const WIDEST_HALF_WIDTH: f64 = 3.50;

/// Neutral (thermal comfort) temperature for a mean ambient temperature.
///
/// `Tn = 13.5 + 0.54·Ta_mean`, both in °C.
#[must_use]
pub fn neutral_temperature(mean_ambient: ThermodynamicTemperature) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(
        13.5 + 0.54 * mean_ambient.get::<degree_celsius>(),
    )
}

/// Half-width of the comfort band around the neutral temperature.
///
/// The width steps up with the daily ambient swing `max Ta − min Ta`:
///
/// | swing (K)  | half-width (K) |
/// |------------|----------------|
/// | < 13       | 1.25           |
/// | [13, 16)   | 1.50           |
/// | [16, 19)   | 1.75           |
/// | [19, 24)   | 2.00           |
/// | [24, 28)   | 2.25           |
/// | [28, 33)   | 2.50           |
/// | [33, 38)   | 2.75           |
/// | [38, 45)   | 3.00           |
/// | [45, 52)   | 3.25           |
/// | ≥ 52       | 3.50           |
#[must_use]
pub fn comfort_half_width(swing: TemperatureInterval) -> TemperatureInterval {
    let swing = swing.get::<delta_kelvin>();
    let half_width = HALF_WIDTH_STEPS
        .iter()
        .find(|(upper, _)| swing < *upper)
        .map_or(WIDEST_HALF_WIDTH, |&(_, half_width)| half_width);
    TemperatureInterval::new::<delta_kelvin>(half_width)
}
