//! Construction-time numeric constraints for envelope inputs.
//!
//! Wall and surface inputs carry physical invariants that must hold before any
//! computation starts: a layer cannot have zero thickness, a material cannot
//! have negative conductivity, and a solar absorptance lives in `[0, 1]`.
//! Wrapping such values in [`Constrained<T, C>`] checks the invariant once,
//! when the value is built, so downstream code can rely on it without
//! re-validating.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero (thicknesses, conductivities,
//!   heat capacities, film coefficients, tolerances)
//! - [`UnitInterval`]: closed unit interval `0 ≤ x ≤ 1` (absorptances)
//!
//! Custom invariants can be added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A check applied to a value when it is wrapped in [`Constrained`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Reason a value was rejected by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value that satisfied constraint `C` when it was built.
///
/// # Example
///
/// ```
/// use twine_envelope::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::centimeter};
///
/// let thickness = Constrained::<_, StrictlyPositive>::new(Length::new::<centimeter>(12.0)).unwrap();
/// assert_eq!(thickness.into_inner().get::<centimeter>(), 12.0);
///
/// assert!(Constrained::<_, StrictlyPositive>::new(Length::new::<centimeter>(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the inner value.
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
