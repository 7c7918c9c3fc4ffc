//! Prelude for the speed crate.
//!
//! Re-exports the curve prelude alongside the speed types, so one import
//! covers a full acceleration pipeline.

pub use crate::args::SpeedArgs;
pub use crate::calculator::SpeedCalculator;
pub use crate::error::SpeedError;
pub use crate::settings::AccelSettings;
pub use crate::smoother::{LinearExponentialSmoother, SimpleExponentialSmoother, Smoother};
pub use pointeraccel_curves::prelude::*;
