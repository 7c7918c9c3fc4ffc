//! Combined per-device settings.

use pointeraccel_curves::{AccelArgs, AccelFunction};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::args::SpeedArgs;
use crate::calculator::SpeedCalculator;
use crate::error::SpeedError;

/// Acceleration and speed arguments for one device.
///
/// # Example
///
/// ```
/// use pointeraccel_speed::AccelSettings;
///
/// let settings = AccelSettings::from_json(
///     r#"{ "accel": { "acceleration": 1.0, "limit": 2.0 }, "speed": { "lp_norm": 2.0 } }"#,
/// )?;
/// let (func, mut calc) = settings.build()?;
///
/// let speed = calc.calculate_speed(3.0, 4.0, 1.0);
/// assert!(func.apply(speed) > 1.0);
/// # Ok::<(), pointeraccel_speed::SpeedError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccelSettings {
    /// Curve arguments.
    pub accel: AccelArgs,
    /// Speed calculation arguments.
    pub speed: SpeedArgs,
}

impl AccelSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SpeedError::Config`] if the input is not valid JSON or a field
    /// has the wrong type. Values are not validated until [`build`](Self::build).
    pub fn from_json(json: &str) -> Result<Self, SpeedError> {
        serde_json::from_str(json).map_err(|e| SpeedError::Config(e.to_string()))
    }

    /// Serialize settings to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SpeedError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SpeedError> {
        serde_json::to_string_pretty(self).map_err(|e| SpeedError::Config(e.to_string()))
    }

    /// Validate everything and build the runtime pair.
    ///
    /// # Errors
    ///
    /// Returns [`SpeedError::Accel`] if the curve arguments are rejected and
    /// [`SpeedError::InvalidArgument`] if the speed arguments are.
    pub fn build(&self) -> Result<(AccelFunction, SpeedCalculator), SpeedError> {
        let func = AccelFunction::new(&self.accel)?;
        let calc = SpeedCalculator::new(&self.speed)?;
        debug!(mode = ?self.accel.mode, "acceleration settings built");
        Ok((func, calc))
    }
}
