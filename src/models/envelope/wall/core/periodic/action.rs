/// Control actions supported by the periodic wall solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current pass.
    ///
    /// If the pass did not converge the solve fails with
    /// [`WallError::Aborted`](super::super::WallError::Aborted).
    StopEarly,
}
