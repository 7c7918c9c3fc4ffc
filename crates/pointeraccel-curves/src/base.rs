//! Fields shared by every curve variant.

use crate::args::AccelArgs;

/// Common calibration derived from [`AccelArgs`].
///
/// Each variant embeds one of these and may rescale `speed_coeff` further
/// during its own construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelBase {
    /// Rate coefficient applied to input speed.
    pub speed_coeff: f64,
}

impl AccelBase {
    /// Derive the shared calibration from raw arguments.
    pub fn new(args: &AccelArgs) -> Self {
        Self {
            speed_coeff: args.acceleration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_coeff_comes_from_acceleration() {
        let base = AccelBase::new(&AccelArgs::natural(0.75, 2.0));
        assert!((base.speed_coeff - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_speed_coeff_is_not_validated() {
        let base = AccelBase::new(&AccelArgs::linear(-3.0));
        assert!((base.speed_coeff + 3.0).abs() < f64::EPSILON);
    }
}
