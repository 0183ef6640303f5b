//! Tridiagonal linear systems.
//!
//! One-dimensional implicit conduction produces a tridiagonal matrix at every
//! time step. [`TridiagonalSystem`] stores the three diagonals and the
//! right-hand side, and [`TridiagonalSystem::solve_into`] runs the Thomas
//! algorithm (forward elimination followed by back substitution).
//!
//! Row `i` of the system reads:
//!
//! ```text
//! lower[i]·x[i-1] + diag[i]·x[i] + upper[i]·x[i+1] = rhs[i]
//! ```
//!
//! `lower[0]` and `upper[n-1]` are ignored.
//!
//! The algorithm does no pivoting. It is stable for diagonally dominant
//! matrices, which every conduction system assembled in this crate is.

use thiserror::Error;

/// Errors that can occur while solving a tridiagonal system.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TridiagonalError {
    /// The system has no rows.
    #[error("tridiagonal system is empty")]
    Empty,

    /// Elimination produced a zero or non-finite pivot.
    #[error("singular pivot at row {row}: {pivot}")]
    SingularPivot { row: usize, pivot: f64 },
}

/// Diagonals and right-hand side of an `n × n` tridiagonal system.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    pub lower: Vec<f64>,
    pub diag: Vec<f64>,
    pub upper: Vec<f64>,
    pub rhs: Vec<f64>,
    scratch: Vec<f64>,
}

impl TridiagonalSystem {
    /// Creates a zeroed system with `n` rows.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            lower: vec![0.0; n],
            diag: vec![0.0; n],
            upper: vec![0.0; n],
            rhs: vec![0.0; n],
            scratch: vec![0.0; n],
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diag.len()
    }

    /// Returns `true` if the system has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// Solves the system and writes the solution into `x`.
    ///
    /// The diagonals are left untouched so the same system can be reassembled
    /// in place for the next time step. `x` is resized to the system length.
    ///
    /// # Errors
    ///
    /// Returns [`TridiagonalError`] if the system is empty or a pivot vanishes.
    pub fn solve_into(&mut self, x: &mut Vec<f64>) -> Result<(), TridiagonalError> {
        let n = self.len();
        if n == 0 {
            return Err(TridiagonalError::Empty);
        }

        x.resize(n, 0.0);
        let c_prime = &mut self.scratch;
        c_prime.resize(n, 0.0);

        // Forward elimination: c' holds the modified upper diagonal,
        // x temporarily holds the modified right-hand side.
        let pivot = check_pivot(0, self.diag[0])?;
        c_prime[0] = self.upper[0] / pivot;
        x[0] = self.rhs[0] / pivot;

        for i in 1..n {
            let pivot = check_pivot(i, self.diag[i] - self.lower[i] * c_prime[i - 1])?;
            c_prime[i] = if i < n - 1 {
                self.upper[i] / pivot
            } else {
                0.0
            };
            x[i] = (self.rhs[i] - self.lower[i] * x[i - 1]) / pivot;
        }

        // Back substitution.
        for i in (0..n - 1).rev() {
            x[i] -= c_prime[i] * x[i + 1];
        }

        Ok(())
    }
}

fn check_pivot(row: usize, pivot: f64) -> Result<f64, TridiagonalError> {
    if pivot == 0.0 || !pivot.is_finite() {
        return Err(TridiagonalError::SingularPivot { row, pivot });
    }
    Ok(pivot)
}
