//! Acceleration arguments as supplied by the configuration layer.

use serde::{Deserialize, Serialize};

use crate::error::AccelError;

/// Which member of the curve family to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccelMode {
    /// `f(x) = a * x`
    Linear,
    /// `f(x) = (a * x)^(exponent - 1)`
    Classic,
    /// `f(x) = k * (1 - e^(-a/k * x))`, vanishing-difference curve.
    #[default]
    Natural,
}

/// Raw acceleration arguments.
///
/// These are plain values: nothing is validated until a curve is built from
/// them. Missing fields fall back to [`AccelArgs::default`] when deserializing.
///
/// # Example
///
/// ```
/// use pointeraccel_curves::{AccelArgs, AccelMode};
///
/// let args = AccelArgs::from_json(r#"{ "mode": "natural", "limit": 2.0 }"#)?;
/// assert_eq!(args.mode, AccelMode::Natural);
/// assert!((args.limit - 2.0).abs() < f64::EPSILON);
/// # Ok::<(), pointeraccel_curves::AccelError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccelArgs {
    /// Curve variant.
    pub mode: AccelMode,
    /// Input speed below which no acceleration is applied.
    pub offset: f64,
    /// Rate input; becomes the base `speed_coeff`.
    pub acceleration: f64,
    /// Output ceiling for the natural curve (must be > 1).
    pub limit: f64,
    /// Power for the classic curve (must be > 1).
    pub exponent: f64,
}

impl Default for AccelArgs {
    fn default() -> Self {
        Self {
            mode: AccelMode::Natural,
            offset: 0.0,
            acceleration: 0.005,
            limit: 1.5,
            exponent: 2.0,
        }
    }
}

impl AccelArgs {
    /// Arguments for a natural curve.
    pub fn natural(acceleration: f64, limit: f64) -> Self {
        Self {
            mode: AccelMode::Natural,
            acceleration,
            limit,
            ..Self::default()
        }
    }

    /// Arguments for a linear curve.
    pub fn linear(acceleration: f64) -> Self {
        Self {
            mode: AccelMode::Linear,
            acceleration,
            ..Self::default()
        }
    }

    /// Arguments for a classic (power) curve.
    pub fn classic(acceleration: f64, exponent: f64) -> Self {
        Self {
            mode: AccelMode::Classic,
            acceleration,
            exponent,
            ..Self::default()
        }
    }

    /// Replace the offset.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Parse arguments from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::Config`] if `json` is not a valid argument object.
    pub fn from_json(json: &str) -> Result<Self, AccelError> {
        serde_json::from_str(json).map_err(|e| AccelError::Config(e.to_string()))
    }

    /// Serialize arguments to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String, AccelError> {
        serde_json::to_string_pretty(self).map_err(|e| AccelError::Config(e.to_string()))
    }
}
