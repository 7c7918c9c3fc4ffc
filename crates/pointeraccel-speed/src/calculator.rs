//! Turns raw pointer movement into a speed value.

use tracing::debug;

use crate::args::SpeedArgs;
use crate::error::SpeedError;
use crate::smoother::{LinearExponentialSmoother, SimpleExponentialSmoother, Smoother};

const BAD_LP_NORM: &str = "lp norm must be positive";
const BAD_HALFLIFE: &str = "smooth halflife must be positive";

#[derive(Clone, Copy, Debug, PartialEq)]
enum SpeedSmoother {
    Simple(SimpleExponentialSmoother),
    Linear(LinearExponentialSmoother),
}

impl SpeedSmoother {
    fn as_smoother(&mut self) -> &mut dyn Smoother {
        match self {
            Self::Simple(s) => s,
            Self::Linear(s) => s,
        }
    }
}

/// Speed calculator for one input stream.
///
/// The default calculator measures euclidean distance per unit time with no
/// smoothing. Call [`init`](Self::init) to change the norm or enable
/// smoothing; doing so also clears smoothing history.
///
/// # Example
///
/// ```
/// use pointeraccel_speed::SpeedCalculator;
///
/// let mut calc = SpeedCalculator::default();
/// let speed = calc.calculate_speed(3.0, 4.0, 2.0);
/// assert!((speed - 2.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedCalculator {
    lp_norm: f64,
    smoother: Option<SpeedSmoother>,
}

impl Default for SpeedCalculator {
    fn default() -> Self {
        Self {
            lp_norm: 2.0,
            smoother: None,
        }
    }
}

impl SpeedCalculator {
    /// Create a calculator configured from `args`.
    ///
    /// # Errors
    ///
    /// See [`init`](Self::init).
    pub fn new(args: &SpeedArgs) -> Result<Self, SpeedError> {
        let mut calc = Self::default();
        calc.init(args)?;
        Ok(calc)
    }

    /// Check `args` without applying them.
    ///
    /// # Errors
    ///
    /// Returns [`SpeedError::InvalidArgument`] if `lp_norm` is not positive,
    /// or if smoothing is enabled and `smooth_halflife` is not a positive
    /// finite number.
    pub fn verify(args: &SpeedArgs) -> Result<(), SpeedError> {
        if args.lp_norm.is_nan() || args.lp_norm <= 0.0 {
            debug!(lp_norm = args.lp_norm, "rejected speed lp norm");
            return Err(SpeedError::InvalidArgument(BAD_LP_NORM));
        }
        if args.should_smooth && (!args.smooth_halflife.is_finite() || args.smooth_halflife <= 0.0)
        {
            debug!(
                smooth_halflife = args.smooth_halflife,
                "rejected speed smoothing halflife"
            );
            return Err(SpeedError::InvalidArgument(BAD_HALFLIFE));
        }
        Ok(())
    }

    /// Reconfigure the calculator. History is discarded.
    ///
    /// On error the calculator is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`verify`](Self::verify).
    pub fn init(&mut self, args: &SpeedArgs) -> Result<(), SpeedError> {
        Self::verify(args)?;

        self.lp_norm = args.lp_norm;
        self.smoother = match (args.should_smooth, args.use_linear) {
            (false, _) => None,
            (true, false) => Some(SpeedSmoother::Simple(SimpleExponentialSmoother::new(
                args.smooth_halflife,
            ))),
            (true, true) => Some(SpeedSmoother::Linear(LinearExponentialSmoother::new(
                args.smooth_halflife,
            ))),
        };

        debug!(
            lp_norm = self.lp_norm,
            smoothing = args.should_smooth,
            linear = args.use_linear,
            "speed calculator initialized"
        );
        Ok(())
    }

    /// Speed of a movement of `(x, y)` over `time`.
    ///
    /// A non-positive or NaN `time` yields zero and leaves smoothing state
    /// untouched.
    pub fn calculate_speed(&mut self, x: f64, y: f64, time: f64) -> f64 {
        if time.is_nan() || time <= 0.0 {
            return 0.0;
        }

        let speed = self.magnitude(x, y) / time;
        match &mut self.smoother {
            Some(smoother) => smoother.as_smoother().smooth(speed, time),
            None => speed,
        }
    }

    /// Lp norm of `(x, y)` under the configured exponent.
    pub fn magnitude(&self, x: f64, y: f64) -> f64 {
        let (x, y) = (x.abs(), y.abs());
        let p = self.lp_norm;

        if p.is_infinite() {
            return x.max(y);
        }
        if (p - 2.0).abs() < f64::EPSILON {
            return x.hypot(y);
        }

        // scale by the larger component so large exponents neither overflow
        // nor flush to zero
        let largest = x.max(y);
        if largest <= 0.0 || largest.is_infinite() {
            return largest;
        }
        let (x, y) = (x / largest, y / largest);
        largest * (x.powf(p) + y.powf(p)).powf(p.recip())
    }

    /// Whether speeds are passed through a smoother.
    pub fn is_smoothing(&self) -> bool {
        self.smoother.is_some()
    }

    /// Clear smoothing history, keeping configuration.
    pub fn reset(&mut self) {
        if let Some(smoother) = &mut self.smoother {
            smoother.as_smoother().reset();
        }
    }
}
