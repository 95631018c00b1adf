//! Sliding-window median filter

use super::{FilterType, ScalarFilter};

/// Median over a fixed window of recent samples, robust against impulsive
/// spikes that would skew an average.
///
/// An even requested window is widened by one so the median is always a
/// real sample. The first sample floods the whole window.
#[derive(Debug, Clone)]
pub struct MedianFilter {
    buffer: Vec<f64>,
    scratch: Vec<f64>,
    window_size: usize,
    index: usize,
    initialized: bool,
}

impl Default for MedianFilter {
    fn default() -> Self {
        Self::new(5)
    }
}

impl MedianFilter {
    /// Create a filter over the given window size. An even size is widened
    /// to the next odd number; a zero window becomes one.
    pub fn new(window_size: usize) -> Self {
        let window_size = window_size.max(1);
        let window_size = if window_size % 2 == 0 {
            window_size + 1
        } else {
            window_size
        };
        Self {
            buffer: vec![0.0; window_size],
            scratch: vec![0.0; window_size],
            window_size,
            index: 0,
            initialized: false,
        }
    }

    /// Advance the filter with a new sample and return the window median
    pub fn filter(&mut self, value: f64) -> f64 {
        if !self.initialized {
            self.buffer.fill(value);
            self.initialized = true;
        }

        self.buffer[self.index] = value;
        self.index = (self.index + 1) % self.window_size;

        self.scratch.copy_from_slice(&self.buffer);
        Self::insertion_sort(&mut self.scratch);
        self.scratch[self.window_size / 2]
    }

    /// Configured (odd) window size
    pub fn get_window_size(&self) -> usize {
        self.window_size
    }

    /// Check whether the filter has seen its first sample
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Clear the window, keeping the window size
    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.index = 0;
        self.initialized = false;
    }

    // Window sizes are small; insertion sort beats the allocation and
    // comparator overhead of a general sort here.
    fn insertion_sort(values: &mut [f64]) {
        for i in 1..values.len() {
            let key = values[i];
            let mut j = i;
            while j > 0 && values[j - 1] > key {
                values[j] = values[j - 1];
                j -= 1;
            }
            values[j] = key;
        }
    }
}

impl ScalarFilter for MedianFilter {
    fn filter(&mut self, value: f64) -> f64 {
        MedianFilter::filter(self, value)
    }

    fn reset(&mut self) {
        MedianFilter::reset(self);
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Median
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_returns_sample() {
        let mut filter = MedianFilter::new(5);
        let result = filter.filter(7.0);
        assert!((result - 7.0).abs() < 1e-12);
        assert!(filter.is_initialized());
    }

    #[test]
    fn test_even_window_widened_to_odd() {
        let filter = MedianFilter::new(4);
        assert_eq!(filter.get_window_size(), 5);

        let filter = MedianFilter::new(5);
        assert_eq!(filter.get_window_size(), 5);

        let filter = MedianFilter::new(0);
        assert_eq!(filter.get_window_size(), 1);
    }

    #[test]
    fn test_rejects_impulsive_spike() {
        let mut filter = MedianFilter::new(3);
        filter.filter(10.0); // window: [10, 10, 10]
        let result = filter.filter(1000.0); // window: [10, 1000, 10]
        assert!((result - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_median_of_mixed_window() {
        let mut filter = MedianFilter::new(3);
        filter.filter(1.0); // [1, 1, 1]
        filter.filter(5.0); // [1, 5, 1]
        let result = filter.filter(3.0); // [1, 5, 3] -> 3
        assert!((result - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_restores_first_call_behavior() {
        let mut filter = MedianFilter::new(3);
        filter.filter(4.0);
        filter.filter(8.0);

        filter.reset();

        assert!(!filter.is_initialized());
        let result = filter.filter(99.0);
        assert!((result - 99.0).abs() < 1e-12);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let mut filter: Box<dyn ScalarFilter> = Box::new(MedianFilter::default());
        assert_eq!(filter.filter_type(), FilterType::Median);
        let result = filter.filter(2.0);
        assert!((result - 2.0).abs() < 1e-12);
    }
}
