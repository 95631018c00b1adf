//! First-order high-pass filter

use super::{FilterType, ScalarFilter};

/// Discrete approximation of a first-order RC high-pass filter, isolating
/// the high-frequency component of a signal:
/// `output = alpha * (previous_output + value - previous_input)`.
///
/// The first call seeds the state from the sample but returns 0, since a
/// high-pass filter has no meaningful output without at least one
/// derivative estimate. Default alpha is 0.9.
#[derive(Debug, Clone)]
pub struct HighPassFilter {
    alpha: f64,
    last_input: f64,
    last_output: f64,
    initialized: bool,
}

impl Default for HighPassFilter {
    fn default() -> Self {
        Self::with_alpha(0.9)
    }
}

impl HighPassFilter {
    /// Create a filter with the default alpha (0.9)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with a custom alpha, clamped to [0.0, 1.0]
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            last_input: 0.0,
            last_output: 0.0,
            initialized: false,
        }
    }

    /// Advance the filter with a new sample and return the high-frequency
    /// component estimate. The first call returns 0 regardless of input.
    pub fn filter(&mut self, value: f64) -> f64 {
        if !self.initialized {
            self.last_input = value;
            self.last_output = 0.0;
            self.initialized = true;
            return 0.0;
        }

        let output = self.alpha * (self.last_output + value - self.last_input);
        self.last_input = value;
        self.last_output = output;
        output
    }

    /// Set alpha, clamped to [0.0, 1.0]
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Get the configured alpha
    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the last output (0.0 before the first sample)
    pub fn get_output(&self) -> f64 {
        self.last_output
    }

    /// Check whether the filter has seen its first sample
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Zero both retained state values, keeping alpha
    pub fn reset(&mut self) {
        self.last_input = 0.0;
        self.last_output = 0.0;
        self.initialized = false;
    }
}

impl ScalarFilter for HighPassFilter {
    fn filter(&mut self, value: f64) -> f64 {
        HighPassFilter::filter(self, value)
    }

    fn reset(&mut self) {
        HighPassFilter::reset(self);
    }

    fn filter_type(&self) -> FilterType {
        FilterType::HighPass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_returns_zero() {
        let mut filter = HighPassFilter::with_alpha(0.9);
        assert_eq!(filter.filter(123.4), 0.0);
        assert!(filter.is_initialized());
    }

    #[test]
    fn test_second_call_applies_recurrence() {
        let mut filter = HighPassFilter::with_alpha(0.9);
        filter.filter(10.0);

        let result = filter.filter(14.0);
        // 0.9 * (0 + 14 - 10) = 3.6
        assert!((result - 3.6).abs() < 1e-12);
    }

    #[test]
    fn test_constant_signal_decays_to_zero() {
        let mut filter = HighPassFilter::with_alpha(0.5);
        filter.filter(5.0);
        let mut last = f64::INFINITY;
        for _ in 0..10 {
            let out = filter.filter(5.0);
            assert!(out.abs() <= last.abs());
            last = out;
        }
        assert!(last.abs() < 1e-2);
    }

    #[test]
    fn test_alpha_clamped() {
        let mut filter = HighPassFilter::with_alpha(3.0);
        assert_eq!(filter.get_alpha(), 1.0);
        filter.set_alpha(-2.0);
        assert_eq!(filter.get_alpha(), 0.0);
    }

    #[test]
    fn test_reset_restores_first_call_behavior() {
        let mut filter = HighPassFilter::with_alpha(0.8);
        filter.filter(10.0);
        filter.filter(20.0);

        filter.reset();

        assert!(!filter.is_initialized());
        assert_eq!(filter.get_output(), 0.0);
        assert!((filter.get_alpha() - 0.8).abs() < 1e-12);
        assert_eq!(filter.filter(50.0), 0.0);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let mut filter: Box<dyn ScalarFilter> = Box::new(HighPassFilter::new());
        assert_eq!(filter.filter_type(), FilterType::HighPass);
        assert_eq!(filter.filter(9.0), 0.0);
    }
}
