use log::warn;

/// Ratio of the indoor daily swing to an exterior daily swing.
///
/// Passive walls damp the exterior swing, so physical values fall in
/// `[0, 1]`. Values outside that range are kept as computed and can be
/// flagged with [`DecrementFactor::is_physical`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DecrementFactor(f64);

impl DecrementFactor {
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if the factor lies in `[0, 1]`.
    #[must_use]
    pub fn is_physical(self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }
}

/// Difference between the largest and smallest value.
///
/// Returns zero for an empty iterator.
pub(super) fn swing(values: impl IntoIterator<Item = f64>) -> f64 {
    let (lo, hi) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
            (lo.min(t), hi.max(t))
        });
    if lo.is_finite() && hi.is_finite() {
        hi - lo
    } else {
        0.0
    }
}

/// `indoor / exterior`, or `None` if the exterior doesn't swing.
///
/// Logs a warning when the result is outside `[0, 1]`.
pub(super) fn decrement_factor(
    name: &str,
    indoor: f64,
    exterior: f64,
) -> Option<DecrementFactor> {
    if exterior == 0.0 {
        return None;
    }

    let factor = DecrementFactor(indoor / exterior);
    if !factor.is_physical() {
        warn!(
            "{name} decrement factor {:.4} is outside [0, 1] (indoor swing {indoor:.4} K, exterior swing {exterior:.4} K)",
            factor.0
        );
    }
    Some(factor)
}
