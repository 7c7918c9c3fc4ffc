//! The acceleration curve family and the offset-aware multiplier built on it.

use tracing::debug;

use crate::args::{AccelArgs, AccelMode};
use crate::classic::ClassicAccel;
use crate::error::AccelError;
use crate::linear::LinearAccel;
use crate::lut::AccelLut;
use crate::natural::NaturalAccel;

const NEGATIVE_OFFSET: &str = "offset must be non-negative";

/// Anything that maps an input speed to an accelerated output.
///
/// Implementations must be pure: the same speed always yields the same
/// output, with no side effects.
pub trait Accelerate {
    /// Map an input speed to its accelerated output.
    fn accelerate(&self, speed: f64) -> f64;
}

/// Closed set of supported acceleration curves.
///
/// # Example
///
/// ```
/// use pointeraccel_curves::{AccelArgs, AccelCurve, Accelerate};
///
/// let curve = AccelCurve::from_args(&AccelArgs::natural(4.0, 3.0))?;
/// assert!((curve.accelerate(1.0) - 1.729_329_4).abs() < 1e-7);
/// # Ok::<(), pointeraccel_curves::AccelError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AccelCurve {
    /// See [`LinearAccel`].
    Linear(LinearAccel),
    /// See [`ClassicAccel`].
    Classic(ClassicAccel),
    /// See [`NaturalAccel`].
    Natural(NaturalAccel),
}

impl AccelCurve {
    /// Build the curve selected by `args.mode`.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::InvalidArgument`] if the selected variant rejects
    /// its arguments.
    pub fn from_args(args: &AccelArgs) -> Result<Self, AccelError> {
        match args.mode {
            AccelMode::Linear => Ok(Self::Linear(LinearAccel::new(args))),
            AccelMode::Classic => ClassicAccel::new(args).map(Self::Classic),
            AccelMode::Natural => NaturalAccel::new(args).map(Self::Natural),
        }
    }

    /// The mode this curve was built for.
    pub fn mode(&self) -> AccelMode {
        match self {
            Self::Linear(_) => AccelMode::Linear,
            Self::Classic(_) => AccelMode::Classic,
            Self::Natural(_) => AccelMode::Natural,
        }
    }

    /// Sample this curve into a lookup table over `[0, max_speed]`.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::InvalidArgument`] if `max_speed` is not a
    /// positive finite number.
    pub fn to_lut(&self, max_speed: f64) -> Result<AccelLut, AccelError> {
        AccelLut::from_curve(self, max_speed)
    }
}

impl Accelerate for AccelCurve {
    #[inline]
    fn accelerate(&self, speed: f64) -> f64 {
        match self {
            Self::Linear(curve) => curve.accelerate(speed),
            Self::Classic(curve) => curve.accelerate(speed),
            Self::Natural(curve) => curve.accelerate(speed),
        }
    }
}

/// A curve plus the offset below which it does not engage.
///
/// [`apply`](Self::apply) yields the sensitivity multiplier for a sample:
/// `1` up to the offset, then `1 + curve(speed - offset)`.
///
/// # Example
///
/// ```
/// use pointeraccel_curves::{AccelArgs, AccelFunction};
///
/// let func = AccelFunction::new(&AccelArgs::natural(1.0, 2.0).with_offset(5.0))?;
///
/// assert!((func.apply(3.0) - 1.0).abs() < f64::EPSILON);
/// assert!((func.apply(6.0) - 1.632_120_558_8).abs() < 1e-9);
/// # Ok::<(), pointeraccel_curves::AccelError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelFunction {
    curve: AccelCurve,
    offset: f64,
}

impl AccelFunction {
    /// Build the curve and validate the offset.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::InvalidArgument`] if the offset is negative or
    /// not finite, or if the curve rejects its arguments.
    pub fn new(args: &AccelArgs) -> Result<Self, AccelError> {
        if !args.offset.is_finite() || args.offset < 0.0 {
            debug!(offset = args.offset, "rejected acceleration offset");
            return Err(AccelError::InvalidArgument(NEGATIVE_OFFSET));
        }

        let curve = AccelCurve::from_args(args)?;
        Ok(Self {
            curve,
            offset: args.offset,
        })
    }

    /// Sensitivity multiplier for an input speed.
    #[inline]
    pub fn apply(&self, speed: f64) -> f64 {
        if speed <= self.offset {
            return 1.0;
        }
        1.0 + self.curve.accelerate(speed - self.offset)
    }

    /// The underlying curve.
    pub fn curve(&self) -> &AccelCurve {
        &self.curve
    }

    /// Speed below which the multiplier stays at 1.
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_from_args_dispatches_on_mode() -> Result<(), AccelError> {
        let linear = AccelCurve::from_args(&AccelArgs::linear(1.0))?;
        assert!(matches!(linear, AccelCurve::Linear(_)));
        assert_eq!(linear.mode(), AccelMode::Linear);

        let classic = AccelCurve::from_args(&AccelArgs::classic(1.0, 3.0))?;
        assert!(matches!(classic, AccelCurve::Classic(_)));
        assert_eq!(classic.mode(), AccelMode::Classic);

        let natural = AccelCurve::from_args(&AccelArgs::natural(1.0, 2.0))?;
        assert!(matches!(natural, AccelCurve::Natural(_)));
        assert_eq!(natural.mode(), AccelMode::Natural);
        Ok(())
    }

    #[test]
    fn test_from_args_propagates_validation() {
        let result = AccelCurve::from_args(&AccelArgs::natural(1.0, 1.0));
        assert_eq!(
            result,
            Err(AccelError::InvalidArgument("limit must be greater than 1"))
        );

        let result = AccelCurve::from_args(&AccelArgs::classic(1.0, 1.0));
        assert_eq!(
            result,
            Err(AccelError::InvalidArgument("exponent must be greater than 1"))
        );
    }

    #[test]
    fn test_curve_matches_variant() -> Result<(), AccelError> {
        let args = AccelArgs::natural(4.0, 3.0);
        let curve = AccelCurve::from_args(&args)?;
        let natural = NaturalAccel::new(&args)?;

        for i in 0..=20 {
            let speed = f64::from(i) * 0.5;
            assert_relative_eq!(curve.accelerate(speed), natural.accelerate(speed));
        }
        Ok(())
    }

    #[test]
    fn test_all_curves_zero_at_zero() -> Result<(), AccelError> {
        let curves = [
            AccelCurve::from_args(&AccelArgs::linear(0.5))?,
            AccelCurve::from_args(&AccelArgs::classic(0.5, 2.5))?,
            AccelCurve::from_args(&AccelArgs::natural(0.5, 2.0))?,
        ];

        for curve in curves {
            let at_zero = curve.accelerate(0.0);
            assert!(
                at_zero.abs() < f64::EPSILON,
                "Curve {:?} at 0.0 returned {}",
                curve,
                at_zero
            );
        }
        Ok(())
    }

    #[test]
    fn test_function_below_offset_is_unity() {
        let func = must(AccelFunction::new(
            &AccelArgs::natural(1.0, 2.0).with_offset(2.0),
        ));

        for speed in [-1.0, 0.0, 1.0, 2.0] {
            assert_relative_eq!(func.apply(speed), 1.0);
        }
    }

    #[test]
    fn test_function_shifts_by_offset() {
        let args = AccelArgs::natural(1.0, 2.0).with_offset(2.0);
        let func = must(AccelFunction::new(&args));
        let curve = must(NaturalAccel::new(&args));

        assert_relative_eq!(func.apply(3.0), 1.0 + curve.accelerate(1.0));
        assert_relative_eq!(func.apply(12.0), 1.0 + curve.accelerate(10.0));
    }

    #[test]
    fn test_function_without_offset() {
        let func = must(AccelFunction::new(&AccelArgs::natural(1.0, 2.0)));

        assert_relative_eq!(func.apply(0.0), 1.0);
        assert_relative_eq!(func.apply(1.0), 1.632_120_558_8, epsilon = 1e-9);
        assert!(func.apply(1e6) < 2.0 + 1e-9);
    }

    #[test]
    fn test_function_rejects_bad_offset() {
        for offset in [-0.1, f64::NAN, f64::INFINITY] {
            let result = AccelFunction::new(&AccelArgs::natural(1.0, 2.0).with_offset(offset));
            assert_eq!(
                result,
                Err(AccelError::InvalidArgument("offset must be non-negative")),
                "offset {} should be rejected",
                offset
            );
        }
    }

    #[test]
    fn test_function_accessors() {
        let func = must(AccelFunction::new(
            &AccelArgs::classic(1.0, 3.0).with_offset(1.5),
        ));
        assert_relative_eq!(func.offset(), 1.5);
        assert_eq!(func.curve().mode(), AccelMode::Classic);
    }

    #[test]
    fn test_curve_to_lut() -> Result<(), AccelError> {
        let curve = AccelCurve::from_args(&AccelArgs::natural(1.0, 2.0))?;
        let lut = curve.to_lut(10.0)?;

        assert_relative_eq!(lut.lookup(0.0), 0.0);
        assert_relative_eq!(lut.lookup(5.0), curve.accelerate(5.0), epsilon = 1e-3);
        Ok(())
    }
}
