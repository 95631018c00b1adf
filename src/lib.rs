//! Sensor Signal Filters
//!
//! A small library of single-purpose digital filters for smoothing noisy
//! sensor readings, e.g. IMU angle estimation or load-cell channels. Each
//! filter is an independent stateful value object advanced by repeated
//! `filter(...)` calls.

pub mod filters;
pub mod fusion;
pub mod utils;

// Re-export commonly used types
pub use filters::{
    BandStopFilter, ComplementaryFilter, FilterType, HighPassFilter, KalmanFilter,
    LowPassFilter, MedianFilter, MovingAverageFilter, ScalarFilter,
};
pub use fusion::{AxisLowPass, TiltAngles, TiltEstimator};
pub use utils::{ConfigError, FilterParams, FilterProfiles};
