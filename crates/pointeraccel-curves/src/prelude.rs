//! Prelude for the curves crate.
//!
//! ```
//! use pointeraccel_curves::prelude::*;
//!
//! let curve = AccelCurve::from_args(&AccelArgs::natural(1.0, 2.0))?;
//! assert!(curve.accelerate(0.0).abs() < f64::EPSILON);
//! # Ok::<(), AccelError>(())
//! ```

pub use crate::args::{AccelArgs, AccelMode};
pub use crate::classic::ClassicAccel;
pub use crate::curve::{AccelCurve, AccelFunction, Accelerate};
pub use crate::error::AccelError;
pub use crate::linear::LinearAccel;
pub use crate::lut::AccelLut;
pub use crate::natural::NaturalAccel;
