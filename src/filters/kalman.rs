//! Scalar Kalman filter for one-dimensional measurement streams

use super::{FilterType, ScalarFilter};

/// Recursive Bayesian estimator fusing a noisy scalar measurement stream
/// with an internal state estimate.
///
/// Each update runs the standard scalar recursion: predict `p = p + q`,
/// gain `k = p / (p + r)`, update `x = x + k * (measurement - x)` and
/// `p = (1 - k) * p`. The first call seeds `x` from the measurement and
/// skips the prediction step, so an arbitrary initial covariance cannot
/// corrupt the estimate.
#[derive(Debug, Clone)]
pub struct KalmanFilter {
    /// Process noise: uncertainty growth between updates
    q: f64,
    /// Measurement noise: uncertainty of incoming measurements
    r: f64,
    /// Estimate error covariance
    p: f64,
    /// Current state estimate
    x: f64,
    initialized: bool,
}

impl Default for KalmanFilter {
    fn default() -> Self {
        Self::with_parameters(0.01, 1.0, 1.0)
    }
}

impl KalmanFilter {
    /// Create a filter with default noise parameters (q = 0.01, r = 1.0,
    /// initial error estimate 1.0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with custom process noise, measurement noise and
    /// initial error estimate
    pub fn with_parameters(process_noise: f64, measurement_noise: f64, estimate_error: f64) -> Self {
        Self {
            q: process_noise,
            r: measurement_noise,
            p: estimate_error,
            x: 0.0,
            initialized: false,
        }
    }

    /// Advance the filter with a new measurement and return the filtered
    /// state estimate.
    ///
    /// The first call returns the measurement unchanged, leaving the error
    /// covariance untouched.
    pub fn filter(&mut self, measurement: f64) -> f64 {
        if !self.initialized {
            self.x = measurement;
            self.initialized = true;
            return self.x;
        }

        self.p += self.q;
        let k = self.p / (self.p + self.r);
        self.x += k * (measurement - self.x);
        self.p = (1.0 - k) * self.p;
        self.x
    }

    /// Retune the process and measurement noise at runtime
    pub fn set_noise(&mut self, process_noise: f64, measurement_noise: f64) {
        self.q = process_noise;
        self.r = measurement_noise;
    }

    /// Forcibly reseed the state estimate, e.g. after a known external
    /// correction. The error covariance is left untouched.
    pub fn set_state(&mut self, state: f64) {
        self.x = state;
        self.initialized = true;
    }

    /// Get the current state estimate
    pub fn get_state(&self) -> f64 {
        self.x
    }

    /// Get the current error covariance
    pub fn get_covariance(&self) -> f64 {
        self.p
    }

    /// Get the configured process noise
    pub fn get_process_noise(&self) -> f64 {
        self.q
    }

    /// Get the configured measurement noise
    pub fn get_measurement_noise(&self) -> f64 {
        self.r
    }

    /// Check whether the filter has seen its first measurement
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Restore the error covariance to 1.0 and the estimate to 0, clearing
    /// the initialized flag. The noise parameters q and r persist.
    pub fn reset(&mut self) {
        self.p = 1.0;
        self.x = 0.0;
        self.initialized = false;
    }
}

impl ScalarFilter for KalmanFilter {
    fn filter(&mut self, value: f64) -> f64 {
        KalmanFilter::filter(self, value)
    }

    fn reset(&mut self) {
        KalmanFilter::reset(self);
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Kalman
    }
}
