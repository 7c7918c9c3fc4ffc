//! Pointer Acceleration Curves
//!
//! This crate implements the transfer functions that remap a pointer's input
//! speed to an acceleration output, plus a pre-computed lookup table for
//! hot-path evaluation.
//!
//! # Overview
//!
//! The curve family supports:
//! - **Natural**: `k * (1 - e^(-m * x))`, rises from zero toward a fixed limit
//! - **Classic**: `(a * x)^(exponent - 1)`, power response
//! - **Linear**: `a * x`
//!
//! Every curve is built from [`AccelArgs`] in two steps: the arguments are
//! verified, then the calibration constants are derived. A built curve is an
//! immutable `Copy` value; evaluation never fails and never allocates.
//!
//! [`AccelFunction`] wraps a curve with an input offset and turns its output
//! into a sensitivity multiplier.
//!
//! # Example
//!
//! ```
//! use pointeraccel_curves::{AccelArgs, NaturalAccel};
//!
//! // Built once, at config load time
//! let curve = NaturalAccel::new(&AccelArgs::natural(4.0, 3.0))?;
//!
//! // Evaluated per input sample
//! let output = curve.accelerate(1.0);
//! assert!((output - 1.729_329_4).abs() < 1e-7);
//!
//! // Limits at or below 1 are rejected
//! assert!(NaturalAccel::new(&AccelArgs::natural(4.0, 1.0)).is_err());
//! # Ok::<(), pointeraccel_curves::AccelError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod args;
pub mod base;
pub mod classic;
pub mod curve;
pub mod error;
pub mod linear;
pub mod lut;
pub mod natural;
pub mod prelude;

pub use args::{AccelArgs, AccelMode};
pub use base::AccelBase;
pub use classic::ClassicAccel;
pub use curve::{AccelCurve, AccelFunction, Accelerate};
pub use error::AccelError;
pub use linear::LinearAccel;
pub use lut::AccelLut;
pub use natural::NaturalAccel;
