//! Exponential speed smoothers.
//!
//! Both smoothers keep two running averages of the input speed: a "window"
//! average with the configured half-life and a faster "cutoff" average. The
//! output is the smaller of the two, so a sudden burst is damped while a
//! sudden stop is followed quickly.

use tracing::trace;

/// Smoothing half-life of the trend estimate in the linear smoother.
pub const TREND_HALFLIFE: f64 = 1.25;

/// Per-step damping applied to the trend estimate in the linear smoother.
pub const TREND_DAMPING: f64 = 0.75;

/// A stateful speed smoother.
pub trait Smoother: std::fmt::Debug {
    /// Feed one speed sample taken `time_delta` after the previous one.
    fn smooth(&mut self, speed: f64, time_delta: f64) -> f64;

    /// Forget all history.
    fn reset(&mut self);
}

/// Per-sample decay for a half-life: `0.5^(1 / halflife)`.
fn window_coefficient(halflife: f64) -> f64 {
    0.5f64.powf(halflife.recip())
}

/// A faster companion to a window coefficient.
fn cutoff_coefficient(window: f64) -> f64 {
    1.0 - (1.0 - window).sqrt()
}

/// Time-adjusted blend factor: `1 - coeff^dt`.
#[inline]
fn blend(coefficient: f64, time_delta: f64) -> f64 {
    1.0 - coefficient.powf(time_delta)
}

/// Simple exponential smoothing of speed.
///
/// # Example
///
/// ```
/// use pointeraccel_speed::{SimpleExponentialSmoother, Smoother};
///
/// let mut smoother = SimpleExponentialSmoother::new(50.0);
/// let first = smoother.smooth(10.0, 1.0);
/// assert!(first > 0.0 && first < 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleExponentialSmoother {
    window_coeff: f64,
    cutoff_coeff: f64,
    window_total: f64,
    cutoff_total: f64,
}

impl SimpleExponentialSmoother {
    /// Create a smoother with the given half-life. The caller validates it.
    pub fn new(halflife: f64) -> Self {
        let window_coeff = window_coefficient(halflife);
        Self {
            window_coeff,
            cutoff_coeff: cutoff_coefficient(window_coeff),
            window_total: 0.0,
            cutoff_total: 0.0,
        }
    }
}

impl Smoother for SimpleExponentialSmoother {
    #[inline]
    fn smooth(&mut self, speed: f64, time_delta: f64) -> f64 {
        self.window_total += blend(self.window_coeff, time_delta) * (speed - self.window_total);
        self.cutoff_total += blend(self.cutoff_coeff, time_delta) * (speed - self.cutoff_total);
        self.window_total.min(self.cutoff_total)
    }

    fn reset(&mut self) {
        trace!("resetting simple exponential smoother");
        self.window_total = 0.0;
        self.cutoff_total = 0.0;
    }
}

/// One damped-trend exponential average (Holt's linear method).
#[derive(Clone, Copy, Debug, PartialEq)]
struct TrendAverage {
    coeff: f64,
    trend_coeff: f64,
    total: f64,
    trend: f64,
}

impl TrendAverage {
    fn new(coeff: f64, trend_coeff: f64) -> Self {
        Self {
            coeff,
            trend_coeff,
            total: 0.0,
            trend: 0.0,
        }
    }

    #[inline]
    fn update(&mut self, speed: f64, time_delta: f64) -> f64 {
        let old_total = self.total;

        self.total += TREND_DAMPING * self.trend * time_delta;
        self.total += blend(self.coeff, time_delta) * (speed - self.total);
        // a falling trend must not carry the average below zero
        self.total = self.total.max(0.0);

        self.trend *= TREND_DAMPING;
        self.trend += blend(self.trend_coeff, time_delta)
            * ((self.total - old_total) / time_delta - self.trend);

        self.total
    }

    fn reset(&mut self) {
        self.total = 0.0;
        self.trend = 0.0;
    }
}

/// Exponential smoothing of speed with a damped linear trend.
///
/// Tracks acceleration of the input so that a steadily rising speed lags
/// less than with [`SimpleExponentialSmoother`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearExponentialSmoother {
    window: TrendAverage,
    cutoff: TrendAverage,
}

impl LinearExponentialSmoother {
    /// Create a smoother with the given half-life. The caller validates it.
    pub fn new(halflife: f64) -> Self {
        let window_coeff = window_coefficient(halflife);
        let window_trend_coeff = window_coefficient(TREND_HALFLIFE);
        Self {
            window: TrendAverage::new(window_coeff, window_trend_coeff),
            cutoff: TrendAverage::new(
                cutoff_coefficient(window_coeff),
                cutoff_coefficient(window_trend_coeff),
            ),
        }
    }
}

impl Smoother for LinearExponentialSmoother {
    #[inline]
    fn smooth(&mut self, speed: f64, time_delta: f64) -> f64 {
        let window = self.window.update(speed, time_delta);
        let cutoff = self.cutoff.update(speed, time_delta);
        window.min(cutoff)
    }

    fn reset(&mut self) {
        trace!("resetting linear exponential smoother");
        self.window.reset();
        self.cutoff.reset();
    }
}
