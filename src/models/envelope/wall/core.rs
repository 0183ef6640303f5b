//! Periodic transient conduction through a multilayer wall.
//!
//! A construction is split into finite-volume cells, coupled on the outside
//! to the sun-air temperature through the outside film and on the inside to
//! a well-mixed slab of room air through the inside film. The system is
//! stepped with a fully implicit scheme over a design day, repeating the day
//! until the daily cycle closes on itself.

mod assembly;
mod config;
mod discretize;
mod error;
mod metrics;
mod periodic;
mod results;
mod solve;
mod step;

#[cfg(test)]
mod test_support;

pub use assembly::{Construction, Layer, Material, MaterialCatalog};
pub use config::WallConfig;
pub use discretize::{DiscretizedWall, Node};
pub use error::{AssemblyError, WallError};
pub use metrics::DecrementFactor;
pub use periodic::{Action, Event};
pub use results::{ResultSample, Results};

pub(super) use config::Parameters;
pub(super) use solve::solve;
