//! Classic (power) acceleration.

use tracing::debug;

use crate::args::AccelArgs;
use crate::base::AccelBase;
use crate::curve::Accelerate;
use crate::error::AccelError;

const EXPONENT_TOO_LOW: &str = "exponent must be greater than 1";

/// Classic acceleration curve: `f(x) = (a * x)^(exponent - 1)`.
///
/// An exponent of 2 reduces to [`LinearAccel`](crate::LinearAccel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassicAccel {
    speed_coeff: f64,
    power: f64,
}

impl ClassicAccel {
    /// Build the curve from raw arguments.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::InvalidArgument`] if `args.exponent <= 1` (or NaN).
    pub fn new(args: &AccelArgs) -> Result<Self, AccelError> {
        Self::verify(args)?;

        let base = AccelBase::new(args);
        let power = args.exponent - 1.0;

        debug!(speed_coeff = base.speed_coeff, power, "built classic acceleration curve");
        Ok(Self {
            speed_coeff: base.speed_coeff,
            power,
        })
    }

    /// Check `args` without building anything.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::InvalidArgument`] if `args.exponent <= 1` (or NaN).
    pub fn verify(args: &AccelArgs) -> Result<(), AccelError> {
        if args.exponent.is_nan() || args.exponent <= 1.0 {
            debug!(exponent = args.exponent, "rejected classic acceleration exponent");
            return Err(AccelError::InvalidArgument(EXPONENT_TOO_LOW));
        }
        Ok(())
    }

    /// Map an input speed to its accelerated output.
    ///
    /// Non-positive speeds map to zero.
    #[inline]
    pub fn accelerate(&self, speed: f64) -> f64 {
        if speed <= 0.0 {
            return 0.0;
        }
        (self.speed_coeff * speed).powf(self.power)
    }

    /// Power applied to the scaled speed (exponent minus one).
    pub fn power(&self) -> f64 {
        self.power
    }
}

impl Accelerate for ClassicAccel {
    #[inline]
    fn accelerate(&self, speed: f64) -> f64 {
        ClassicAccel::accelerate(self, speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::LinearAccel;
    use approx::assert_relative_eq;

    #[test]
    fn test_classic_evaluate() -> Result<(), AccelError> {
        let curve = ClassicAccel::new(&AccelArgs::classic(0.5, 3.0))?;

        assert!(curve.accelerate(0.0).abs() < f64::EPSILON);
        assert_relative_eq!(curve.accelerate(2.0), 1.0);
        assert_relative_eq!(curve.accelerate(4.0), 4.0);
        Ok(())
    }

    #[test]
    fn test_classic_exponent_two_is_linear() -> Result<(), AccelError> {
        let classic = ClassicAccel::new(&AccelArgs::classic(0.3, 2.0))?;
        let linear = LinearAccel::new(&AccelArgs::linear(0.3));

        for i in 0..=50 {
            let speed = f64::from(i) * 0.4;
            assert_relative_eq!(classic.accelerate(speed), linear.accelerate(speed), epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_classic_rejects_low_exponent() {
        for exponent in [1.0, 0.5, -1.0, f64::NAN] {
            match ClassicAccel::new(&AccelArgs::classic(1.0, exponent)) {
                Err(AccelError::InvalidArgument(msg)) => {
                    assert_eq!(msg, "exponent must be greater than 1");
                }
                other => panic!("Expected InvalidArgument for {}, got {:?}", exponent, other),
            }
        }
    }

    #[test]
    fn test_classic_negative_speed_is_zero() -> Result<(), AccelError> {
        let curve = ClassicAccel::new(&AccelArgs::classic(1.0, 2.5))?;
        assert!(curve.accelerate(-3.0).abs() < f64::EPSILON);
        Ok(())
    }
}
