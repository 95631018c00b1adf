//! Component-wise low-pass smoothing for three-axis sensors

use nalgebra::Vector3;

use crate::filters::LowPassFilter;

/// Low-pass filter over a `Vector3` signal, smoothing each axis
/// independently with a shared alpha.
///
/// The per-axis behavior is exactly [`LowPassFilter`]: the first vector
/// seeds all three axes, and `set_alpha` clamps to [0.0, 1.0].
#[derive(Debug, Clone)]
pub struct AxisLowPass {
    x: LowPassFilter,
    y: LowPassFilter,
    z: LowPassFilter,
}

impl Default for AxisLowPass {
    fn default() -> Self {
        Self::with_alpha(0.1)
    }
}

impl AxisLowPass {
    /// Create a filter with the default smoothing factor (0.1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with a custom smoothing factor, clamped to [0.0, 1.0]
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            x: LowPassFilter::with_alpha(alpha),
            y: LowPassFilter::with_alpha(alpha),
            z: LowPassFilter::with_alpha(alpha),
        }
    }

    /// Advance all three axes with a new sample vector and return the
    /// smoothed vector
    pub fn filter(&mut self, sample: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self.x.filter(sample.x),
            self.y.filter(sample.y),
            self.z.filter(sample.z),
        )
    }

    /// Set the shared smoothing factor on all axes, clamped to [0.0, 1.0]
    pub fn set_alpha(&mut self, alpha: f64) {
        self.x.set_alpha(alpha);
        self.y.set_alpha(alpha);
        self.z.set_alpha(alpha);
    }

    /// Get the shared smoothing factor
    pub fn get_alpha(&self) -> f64 {
        self.x.get_alpha()
    }

    /// Get the last smoothed vector (zeros before the first sample)
    pub fn get_output(&self) -> Vector3<f64> {
        Vector3::new(
            self.x.get_output(),
            self.y.get_output(),
            self.z.get_output(),
        )
    }

    /// Check whether the filter has seen its first sample
    pub fn is_initialized(&self) -> bool {
        self.x.is_initialized()
    }

    /// Clear all three axes, keeping alpha
    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
        self.z.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_seeds_all_axes() {
        let mut filter = AxisLowPass::with_alpha(0.2);
        let sample = Vector3::new(1.0, -2.0, 9.81);
        let result = filter.filter(&sample);
        assert!((result - sample).norm() < 1e-12);
        assert!(filter.is_initialized());
    }

    #[test]
    fn test_axes_smooth_independently() {
        let mut filter = AxisLowPass::with_alpha(0.5);
        filter.filter(&Vector3::new(0.0, 10.0, 100.0));

        let result = filter.filter(&Vector3::new(2.0, 20.0, 0.0));
        assert!((result.x - 1.0).abs() < 1e-12);
        assert!((result.y - 15.0).abs() < 1e-12);
        assert!((result.z - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_clears_all_axes() {
        let mut filter = AxisLowPass::with_alpha(0.3);
        filter.filter(&Vector3::new(1.0, 2.0, 3.0));

        filter.reset();

        assert!(!filter.is_initialized());
        assert!(filter.get_output().norm() < 1e-12);
        assert!((filter.get_alpha() - 0.3).abs() < 1e-12);
    }
}
