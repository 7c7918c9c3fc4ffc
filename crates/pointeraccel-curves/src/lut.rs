//! Pre-computed lookup table for hot-path curve evaluation.

use serde::{Deserialize, Serialize};

use crate::curve::Accelerate;
use crate::error::AccelError;

const BAD_MAX_SPEED: &str = "max speed must be positive";

/// Pre-computed samples of an acceleration curve over `[0, max_speed]`.
///
/// Lookup is O(1) with linear interpolation between neighbouring samples,
/// no allocation and no transcendental functions, which keeps per-sample
/// cost flat in an input loop polling at 1kHz or more.
///
/// Speeds outside the table range are clamped to it, so anything past
/// `max_speed` returns the last sample.
///
/// # Example
///
/// ```
/// use pointeraccel_curves::{AccelArgs, AccelLut, NaturalAccel};
///
/// let curve = NaturalAccel::new(&AccelArgs::natural(1.0, 2.0))?;
/// let lut = AccelLut::from_curve(&curve, 20.0)?;
///
/// assert!((lut.lookup(1.0) - curve.accelerate(1.0)).abs() < 1e-3);
/// # Ok::<(), pointeraccel_curves::AccelError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AccelLut {
    max_speed: f64,
    table: [f64; 256],
}

impl AccelLut {
    /// Number of samples in the table.
    pub const SIZE: usize = 256;

    const LAST_INDEX: f64 = 255.0;

    /// Sample `curve` at [`Self::SIZE`] evenly spaced speeds in `[0, max_speed]`.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::InvalidArgument`] if `max_speed` is not a
    /// positive finite number.
    pub fn from_curve<C>(curve: &C, max_speed: f64) -> Result<Self, AccelError>
    where
        C: Accelerate + ?Sized,
    {
        Self::from_fn(|speed| curve.accelerate(speed), max_speed)
    }

    /// Sample an arbitrary function at [`Self::SIZE`] evenly spaced speeds.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::InvalidArgument`] if `max_speed` is not a
    /// positive finite number.
    pub fn from_fn<F>(f: F, max_speed: f64) -> Result<Self, AccelError>
    where
        F: Fn(f64) -> f64,
    {
        validate_max_speed(max_speed)?;

        let mut table = [0.0f64; Self::SIZE];
        for (i, entry) in (0u32..).zip(table.iter_mut()) {
            let position = f64::from(i) / Self::LAST_INDEX;
            *entry = f(position * max_speed);
        }

        Ok(Self { max_speed, table })
    }

    /// Interpolated output for `speed`.
    ///
    /// NaN input yields NaN.
    #[inline]
    pub fn lookup(&self, speed: f64) -> f64 {
        let scaled = speed.clamp(0.0, self.max_speed) / self.max_speed * Self::LAST_INDEX;
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "scaled is clamped to [0, 255]; NaN saturates to 0"
        )]
        let index_low = (scaled as usize).min(Self::SIZE - 2);
        let fraction = scaled - index_low as f64;

        let (Some(&low), Some(&high)) = (self.table.get(index_low), self.table.get(index_low + 1))
        else {
            return self.table.last().copied().unwrap_or(0.0);
        };

        low + fraction * (high - low)
    }

    /// Upper end of the sampled speed range.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Raw samples, for inspection and tests.
    pub fn table(&self) -> &[f64; 256] {
        &self.table
    }

    /// Whether samples never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.table.windows(2).all(|pair| match pair {
            [a, b] => b >= a,
            _ => true,
        })
    }

    /// Smallest sample.
    pub fn min_value(&self) -> f64 {
        self.table.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest sample.
    pub fn max_value(&self) -> f64 {
        self.table.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

fn validate_max_speed(max_speed: f64) -> Result<(), AccelError> {
    if !max_speed.is_finite() || max_speed <= 0.0 {
        return Err(AccelError::InvalidArgument(BAD_MAX_SPEED));
    }
    Ok(())
}

#[derive(Serialize)]
struct AccelLutRef<'a> {
    max_speed: f64,
    table: &'a [f64],
}

#[derive(Deserialize)]
struct AccelLutOwned {
    max_speed: f64,
    table: Vec<f64>,
}

impl Serialize for AccelLut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        AccelLutRef {
            max_speed: self.max_speed,
            table: self.table.as_slice(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AccelLut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = AccelLutOwned::deserialize(deserializer)?;
        validate_max_speed(raw.max_speed).map_err(serde::de::Error::custom)?;
        let table: [f64; 256] = raw.table.try_into().map_err(|v: Vec<f64>| {
            serde::de::Error::custom(format!(
                "Expected 256 entries in AccelLut, got {}",
                v.len()
            ))
        })?;
        Ok(Self {
            max_speed: raw.max_speed,
            table,
        })
    }
}
