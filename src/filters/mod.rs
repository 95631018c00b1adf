//! Digital filters for smoothing noisy sensor readings
//!
//! Each filter is an independent stateful value object: construct it with
//! its coefficients, advance it with repeated `filter(...)` calls, and
//! `reset()` it to return to the unseeded condition without losing the
//! configured coefficients.

pub mod low_pass;
pub mod high_pass;
pub mod complementary;
pub mod kalman;
pub mod moving_average;
pub mod median;
pub mod band_stop;

pub use low_pass::LowPassFilter;
pub use high_pass::HighPassFilter;
pub use complementary::ComplementaryFilter;
pub use kalman::KalmanFilter;
pub use moving_average::MovingAverageFilter;
pub use median::MedianFilter;
pub use band_stop::BandStopFilter;

use serde::{Deserialize, Serialize};

/// Kind discriminator for the scalar filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterType {
    LowPass,
    HighPass,
    MovingAverage,
    Median,
    Kalman,
    BandStop,
}

/// Common surface of the single-input scalar filters.
///
/// Implemented by every filter that maps one sample to one estimate, so
/// callers can hold a `Box<dyn ScalarFilter>` chosen at runtime.
/// [`ComplementaryFilter`] is deliberately outside this trait: its update
/// takes an angle, a rate and a time step rather than a single sample.
pub trait ScalarFilter {
    /// Advance the filter with a new sample and return the current estimate
    fn filter(&mut self, value: f64) -> f64;

    /// Clear learned state, keeping the configured coefficients
    fn reset(&mut self);

    /// Kind of this filter
    fn filter_type(&self) -> FilterType;
}
