//! Speed calculator arguments.

use serde::{Deserialize, Serialize};

/// Arguments controlling how raw movement becomes a speed value.
///
/// Missing fields fall back to [`SpeedArgs::default`] when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedArgs {
    /// Exponent of the Lp norm used for the movement magnitude.
    /// `2` is euclidean, `inf` takes the larger axis.
    pub lp_norm: f64,
    /// Whether to pass speeds through an exponential smoother.
    pub should_smooth: bool,
    /// Smoothing half-life in polling-time units.
    pub smooth_halflife: f64,
    /// Use the trend-following smoother instead of the simple one.
    pub use_linear: bool,
}

impl Default for SpeedArgs {
    fn default() -> Self {
        Self {
            lp_norm: 2.0,
            should_smooth: false,
            smooth_halflife: 50.0,
            use_linear: false,
        }
    }
}

impl SpeedArgs {
    /// Euclidean, smoothed arguments with the given half-life.
    pub fn smoothed(smooth_halflife: f64, use_linear: bool) -> Self {
        Self {
            should_smooth: true,
            smooth_halflife,
            use_linear,
            ..Self::default()
        }
    }
}
