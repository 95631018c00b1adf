//! Sliding-window moving average filter

use super::{FilterType, ScalarFilter};

/// Boxcar average over a fixed window of recent samples, maintained as a
/// ring buffer with a running sum.
///
/// The first sample floods the whole window, so the filter starts from the
/// signal level instead of ramping up from zero.
#[derive(Debug, Clone)]
pub struct MovingAverageFilter {
    samples: Vec<f64>,
    window_size: usize,
    index: usize,
    count: usize,
    sum: f64,
    initialized: bool,
}

impl MovingAverageFilter {
    /// Create a filter over the given window size. A zero window is
    /// widened to one.
    pub fn new(window_size: usize) -> Self {
        let window_size = window_size.max(1);
        Self {
            samples: vec![0.0; window_size],
            window_size,
            index: 0,
            count: 0,
            sum: 0.0,
            initialized: false,
        }
    }

    /// Advance the filter with a new sample and return the window average
    pub fn filter(&mut self, value: f64) -> f64 {
        if !self.initialized {
            self.samples.fill(value);
            self.sum = value * self.window_size as f64;
            self.count = self.window_size;
            self.initialized = true;
            return value;
        }

        self.sum -= self.samples[self.index];
        self.samples[self.index] = value;
        self.sum += value;
        self.index = (self.index + 1) % self.window_size;

        self.sum / self.count as f64
    }

    /// Get the current window average (0.0 before the first sample)
    pub fn get_average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }

    /// Number of samples currently contributing to the average
    pub fn get_count(&self) -> usize {
        self.count
    }

    /// Configured window size
    pub fn get_window_size(&self) -> usize {
        self.window_size
    }

    /// Check whether the window is fully populated
    pub fn is_ready(&self) -> bool {
        self.count == self.window_size
    }

    /// Clear the window, sum and count, keeping the window size
    pub fn reset(&mut self) {
        self.samples.fill(0.0);
        self.index = 0;
        self.count = 0;
        self.sum = 0.0;
        self.initialized = false;
    }
}

impl ScalarFilter for MovingAverageFilter {
    fn filter(&mut self, value: f64) -> f64 {
        MovingAverageFilter::filter(self, value)
    }

    fn reset(&mut self) {
        MovingAverageFilter::reset(self);
    }

    fn filter_type(&self) -> FilterType {
        FilterType::MovingAverage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_floods_window() {
        let mut filter = MovingAverageFilter::new(4);
        let result = filter.filter(8.0);

        assert!((result - 8.0).abs() < 1e-12);
        assert!(filter.is_ready());
        assert_eq!(filter.get_count(), 4);
        assert!((filter.get_average() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_window_average_updates() {
        let mut filter = MovingAverageFilter::new(4);
        filter.filter(8.0); // window: [8, 8, 8, 8]

        // window: [4, 8, 8, 8] -> 7.0
        let result = filter.filter(4.0);
        assert!((result - 7.0).abs() < 1e-12);

        // window: [4, 0, 8, 8] -> 5.0
        let result = filter.filter(0.0);
        assert!((result - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_window_slides_past_oldest_sample() {
        let mut filter = MovingAverageFilter::new(2);
        filter.filter(10.0); // [10, 10]
        filter.filter(20.0); // [20, 10] -> 15
        let result = filter.filter(30.0); // [20, 30] -> 25
        assert!((result - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_window_widened_to_one() {
        let mut filter = MovingAverageFilter::new(0);
        assert_eq!(filter.get_window_size(), 1);
        let result = filter.filter(3.5);
        assert!((result - 3.5).abs() < 1e-12);
        let result = filter.filter(9.0);
        assert!((result - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_clears_window() {
        let mut filter = MovingAverageFilter::new(3);
        filter.filter(6.0);
        filter.filter(9.0);

        filter.reset();

        assert_eq!(filter.get_count(), 0);
        assert!(!filter.is_ready());
        assert_eq!(filter.get_average(), 0.0);
        assert_eq!(filter.get_window_size(), 3);

        let result = filter.filter(12.0);
        assert!((result - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let mut filter: Box<dyn ScalarFilter> = Box::new(MovingAverageFilter::new(5));
        assert_eq!(filter.filter_type(), FilterType::MovingAverage);
        let result = filter.filter(1.0);
        assert!((result - 1.0).abs() < 1e-12);
    }
}
