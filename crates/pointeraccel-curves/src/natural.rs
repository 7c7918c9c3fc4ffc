//! Natural (vanishing difference) acceleration.

use tracing::debug;

use crate::args::AccelArgs;
use crate::base::AccelBase;
use crate::curve::Accelerate;
use crate::error::AccelError;

const LIMIT_TOO_LOW: &str = "limit must be greater than 1";

/// Natural acceleration curve: `f(x) = k * (1 - e^(-m * x))`.
///
/// Output starts at exactly zero and rises toward `k` without ever reaching
/// it. `k` is the configured limit minus one; `m` is the base speed
/// coefficient divided by `k`, folded in at construction so evaluation does
/// no division.
///
/// The value is immutable and `Copy`; share it freely across threads.
///
/// # Example
///
/// ```
/// use pointeraccel_curves::{AccelArgs, NaturalAccel};
///
/// let curve = NaturalAccel::new(&AccelArgs::natural(1.0, 2.0))?;
///
/// assert!(curve.accelerate(0.0).abs() < f64::EPSILON);
/// assert!((curve.accelerate(1.0) - 0.632_120_558_8).abs() < 1e-9);
/// # Ok::<(), pointeraccel_curves::AccelError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NaturalAccel {
    limit: f64,
    speed_coeff: f64,
}

impl NaturalAccel {
    /// Build the curve from raw arguments.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::InvalidArgument`] if `args.limit <= 1` (or NaN).
    pub fn new(args: &AccelArgs) -> Result<Self, AccelError> {
        Self::verify(args)?;

        let base = AccelBase::new(args);
        let limit = args.limit - 1.0;
        let speed_coeff = base.speed_coeff / limit;

        debug!(limit, speed_coeff, "built natural acceleration curve");
        Ok(Self { limit, speed_coeff })
    }

    /// Check `args` without building anything.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::InvalidArgument`] if `args.limit <= 1` (or NaN).
    pub fn verify(args: &AccelArgs) -> Result<(), AccelError> {
        if args.limit.is_nan() || args.limit <= 1.0 {
            debug!(limit = args.limit, "rejected natural acceleration limit");
            return Err(AccelError::InvalidArgument(LIMIT_TOO_LOW));
        }
        Ok(())
    }

    /// Map an input speed to its accelerated output.
    #[inline]
    pub fn accelerate(&self, speed: f64) -> f64 {
        self.limit - (self.limit * (-self.speed_coeff * speed).exp())
    }

    /// Asymptotic ceiling of the output (configured limit minus one).
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Rate coefficient with the limit already divided out.
    pub fn speed_coeff(&self) -> f64 {
        self.speed_coeff
    }
}

impl Accelerate for NaturalAccel {
    #[inline]
    fn accelerate(&self, speed: f64) -> f64 {
        NaturalAccel::accelerate(self, speed)
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
    fn test_natural_internal_fields() -> Result<(), AccelError> {
        let curve = NaturalAccel::new(&AccelArgs::natural(1.0, 2.0))?;
        assert_relative_eq!(curve.limit(), 1.0);
        assert_relative_eq!(curve.speed_coeff(), 1.0);

        let curve = NaturalAccel::new(&AccelArgs::natural(4.0, 3.0))?;
        assert_relative_eq!(curve.limit(), 2.0);
        assert_relative_eq!(curve.speed_coeff(), 2.0);
        Ok(())
    }

    #[test]
    fn test_natural_zero_speed_is_exactly_zero() -> Result<(), AccelError> {
        for (acceleration, limit) in [(1.0, 2.0), (4.0, 3.0), (0.005, 1.5), (100.0, 1.0001)] {
            let curve = NaturalAccel::new(&AccelArgs::natural(acceleration, limit))?;
            // exactly +0.0, not just close to it
            assert_eq!(curve.accelerate(0.0).to_bits(), 0.0f64.to_bits());
        }
        Ok(())
    }

    #[test]
    fn test_natural_unit_limit_scenario() {
        let curve = must(NaturalAccel::new(&AccelArgs::natural(1.0, 2.0)));

        assert_relative_eq!(curve.accelerate(1.0), 0.632_120_558_8, epsilon = 1e-9);
        assert_relative_eq!(curve.accelerate(10.0), 0.999_954_6, epsilon = 1e-7);
    }

    #[test]
    fn test_natural_double_limit_scenario() {
        let curve = must(NaturalAccel::new(&AccelArgs::natural(4.0, 3.0)));

        assert_relative_eq!(curve.accelerate(1.0), 1.729_329_4, epsilon = 1e-7);
    }

    #[test]
    fn test_natural_rejects_limit_of_one() {
        let result = NaturalAccel::new(&AccelArgs::natural(1.0, 1.0));
        match result {
            Err(AccelError::InvalidArgument(msg)) => {
                assert_eq!(msg, "limit must be greater than 1");
            }
            other => panic!("Expected InvalidArgument error, got {:?}", other),
        }
    }

    #[test]
    fn test_natural_rejects_low_limits() {
        for limit in [0.5, 0.0, -2.0, f64::NAN, f64::NEG_INFINITY] {
            let result = NaturalAccel::new(&AccelArgs::natural(1.0, limit));
            assert!(
                matches!(result, Err(AccelError::InvalidArgument(_))),
                "limit {} should be rejected",
                limit
            );
        }
    }

    #[test]
    fn test_natural_verify_matches_new() {
        let good = AccelArgs::natural(1.0, 1.5);
        let bad = AccelArgs::natural(1.0, 0.9);

        assert!(NaturalAccel::verify(&good).is_ok());
        assert!(NaturalAccel::new(&good).is_ok());
        assert!(NaturalAccel::verify(&bad).is_err());
        assert!(NaturalAccel::new(&bad).is_err());
    }

    #[test]
    fn test_natural_is_strictly_increasing() {
        let curve = must(NaturalAccel::new(&AccelArgs::natural(0.5, 2.5)));

        let mut prev = curve.accelerate(0.0);
        for i in 1..=200 {
            let speed = f64::from(i) * 0.1;
            let out = curve.accelerate(speed);
            assert!(out > prev, "not increasing at speed {}: {} <= {}", speed, out, prev);
            prev = out;
        }
    }

    #[test]
    fn test_natural_stays_below_limit_and_converges() {
        let curve = must(NaturalAccel::new(&AccelArgs::natural(1.0, 2.0)));

        // past ~36 the gap to the limit drops below f64 resolution
        for i in 0..=100 {
            let speed = f64::from(i) * 0.25;
            assert!(curve.accelerate(speed) < curve.limit());
        }
        assert!((curve.accelerate(1e6) - curve.limit()).abs() < 1e-9);
    }

    #[test]
    fn test_natural_negative_speed_is_negative() {
        let curve = must(NaturalAccel::new(&AccelArgs::natural(1.0, 2.0)));
        assert!(curve.accelerate(-1.0) < 0.0);
    }

    #[test]
    fn test_natural_accepts_zero_and_negative_coefficient() {
        let flat = must(NaturalAccel::new(&AccelArgs::natural(0.0, 2.0)));
        assert!(flat.accelerate(5.0).abs() < f64::EPSILON);

        let inverted = must(NaturalAccel::new(&AccelArgs::natural(-1.0, 2.0)));
        assert!(inverted.accelerate(1.0) < 0.0);
    }

    #[test]
    fn test_natural_trait_matches_inherent() {
        let curve = must(NaturalAccel::new(&AccelArgs::natural(1.0, 2.0)));
        let dyn_curve: &dyn Accelerate = &curve;
        assert_relative_eq!(dyn_curve.accelerate(3.0), curve.accelerate(3.0));
    }

    #[test]
    fn test_natural_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NaturalAccel>();
    }
}
