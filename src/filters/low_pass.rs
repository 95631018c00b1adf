//! First-order low-pass filter (exponential moving average)

use super::{FilterType, ScalarFilter};

/// Exponential moving average smoothing of a scalar signal.
///
/// Each call blends the new sample into the retained output:
/// `output = alpha * value + (1 - alpha) * previous_output`. The first call
/// seeds the output with the sample directly, so there is no start-up
/// transient from a zero-initialized state.
///
/// # Configuration
/// - `alpha = 1.0`: no smoothing (pass-through)
/// - `alpha = 0.1`: heavy smoothing (default)
/// - `alpha = 0.0`: holds the first sample indefinitely
#[derive(Debug, Clone)]
pub struct LowPassFilter {
    alpha: f64,
    output: f64,
    initialized: bool,
}

impl Default for LowPassFilter {
    fn default() -> Self {
        Self::with_alpha(0.1)
    }
}

impl LowPassFilter {
    /// Create a filter with the default smoothing factor (0.1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with a custom smoothing factor.
    ///
    /// Alpha is clamped to [0.0, 1.0].
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            output: 0.0,
            initialized: false,
        }
    }

    /// Advance the filter with a new sample and return the smoothed value.
    ///
    /// The first call returns the sample unchanged.
    pub fn filter(&mut self, value: f64) -> f64 {
        if !self.initialized {
            self.output = value;
            self.initialized = true;
            return self.output;
        }

        self.output = self.alpha * value + (1.0 - self.alpha) * self.output;
        self.output
    }

    /// Set the smoothing factor, clamped to [0.0, 1.0]
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Get the configured smoothing factor
    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the last smoothed value (0.0 before the first sample)
    pub fn get_output(&self) -> f64 {
        self.output
    }

    /// Check whether the filter has seen its first sample
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Clear the retained output, keeping alpha
    pub fn reset(&mut self) {
        self.output = 0.0;
        self.initialized = false;
    }
}

impl ScalarFilter for LowPassFilter {
    fn filter(&mut self, value: f64) -> f64 {
        LowPassFilter::filter(self, value)
    }

    fn reset(&mut self) {
        LowPassFilter::reset(self);
    }

    fn filter_type(&self) -> FilterType {
        FilterType::LowPass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_returns_sample() {
        let mut filter = LowPassFilter::with_alpha(0.3);
        let result = filter.filter(42.5);
        assert!((result - 42.5).abs() < 1e-12);
        assert!(filter.is_initialized());
    }

    #[test]
    fn test_second_call_applies_recurrence() {
        let mut filter = LowPassFilter::with_alpha(0.3);
        filter.filter(10.0);

        let result = filter.filter(20.0);
        // 0.3 * 20 + 0.7 * 10 = 13.0
        assert!((result - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_alpha_clamped_on_construction_and_assignment() {
        let filter = LowPassFilter::with_alpha(2.5);
        assert_eq!(filter.get_alpha(), 1.0);

        let mut filter = LowPassFilter::with_alpha(-0.7);
        assert_eq!(filter.get_alpha(), 0.0);

        filter.set_alpha(1.5);
        assert_eq!(filter.get_alpha(), 1.0);
        filter.set_alpha(-1.0);
        assert_eq!(filter.get_alpha(), 0.0);
        filter.set_alpha(0.42);
        assert!((filter.get_alpha() - 0.42).abs() < 1e-12);
    }

    #[test]
    fn test_alpha_one_passes_through() {
        let mut filter = LowPassFilter::with_alpha(1.0);
        filter.filter(5.0);
        let result = filter.filter(-3.0);
        assert!((result - (-3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_alpha_zero_holds_first_sample() {
        let mut filter = LowPassFilter::with_alpha(0.0);
        filter.filter(7.0);
        assert!((filter.filter(100.0) - 7.0).abs() < 1e-12);
        assert!((filter.filter(-100.0) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_restores_first_call_behavior() {
        let mut filter = LowPassFilter::with_alpha(0.3);
        filter.filter(10.0);
        filter.filter(20.0);

        filter.reset();

        assert!(!filter.is_initialized());
        assert_eq!(filter.get_output(), 0.0);
        assert!((filter.get_alpha() - 0.3).abs() < 1e-12);

        // Behaves exactly like a fresh instance again
        let result = filter.filter(99.0);
        assert!((result - 99.0).abs() < 1e-12);
    }

    #[test]
    fn test_accessors_do_not_mutate() {
        let mut filter = LowPassFilter::with_alpha(0.5);
        filter.filter(4.0);
        filter.filter(8.0);

        let first = filter.get_output();
        let second = filter.get_output();
        assert_eq!(first, second);
        assert_eq!(filter.get_alpha(), filter.get_alpha());
    }

    #[test]
    fn test_trait_object_dispatch() {
        let mut filter: Box<dyn ScalarFilter> = Box::new(LowPassFilter::new());
        assert_eq!(filter.filter_type(), FilterType::LowPass);
        let result = filter.filter(3.0);
        assert!((result - 3.0).abs() < 1e-12);
    }
}
