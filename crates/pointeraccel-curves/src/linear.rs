//! Linear acceleration.

use crate::args::AccelArgs;
use crate::base::AccelBase;
use crate::curve::Accelerate;

/// Linear acceleration curve: `f(x) = a * x`.
///
/// Has no arguments that can be invalid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearAccel {
    speed_coeff: f64,
}

impl LinearAccel {
    /// Build the curve from raw arguments.
    pub fn new(args: &AccelArgs) -> Self {
        let base = AccelBase::new(args);
        Self {
            speed_coeff: base.speed_coeff,
        }
    }

    /// Map an input speed to its accelerated output.
    #[inline]
    pub fn accelerate(&self, speed: f64) -> f64 {
        self.speed_coeff * speed
    }

    /// Rate coefficient.
    pub fn speed_coeff(&self) -> f64 {
        self.speed_coeff
    }
}

impl Accelerate for LinearAccel {
    #[inline]
    fn accelerate(&self, speed: f64) -> f64 {
        LinearAccel::accelerate(self, speed)
    }
}
