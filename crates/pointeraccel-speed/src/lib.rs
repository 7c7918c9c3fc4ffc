//! Pointer Speed Calculation
//!
//! Converts raw per-report pointer movement into a speed value that the
//! acceleration curves in [`pointeraccel_curves`] consume.
//!
//! # Overview
//!
//! - [`SpeedCalculator`]: Lp-norm magnitude over elapsed time, optionally smoothed
//! - [`SimpleExponentialSmoother`] and [`LinearExponentialSmoother`]: the two
//!   smoothing strategies
//! - [`AccelSettings`]: one serializable record holding both curve and speed
//!   arguments, built into a ready-to-use pair
//!
//! # Example
//!
//! ```
//! use pointeraccel_speed::{AccelSettings, SpeedArgs};
//! use pointeraccel_curves::AccelArgs;
//!
//! let settings = AccelSettings {
//!     accel: AccelArgs::natural(0.5, 2.0),
//!     speed: SpeedArgs::default(),
//! };
//! let (func, mut calc) = settings.build()?;
//!
//! let speed = calc.calculate_speed(6.0, 8.0, 1.0);
//! assert!((speed - 10.0).abs() < 1e-12);
//! assert!(func.apply(speed) < 2.0);
//! # Ok::<(), pointeraccel_speed::SpeedError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod args;
pub mod calculator;
pub mod error;
pub mod prelude;
pub mod settings;
pub mod smoother;

pub use args::SpeedArgs;
pub use calculator::SpeedCalculator;
pub use error::SpeedError;
pub use settings::AccelSettings;
pub use smoother::{LinearExponentialSmoother, SimpleExponentialSmoother, Smoother};
