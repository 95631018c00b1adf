//! Complementary filter for angle estimation

/// Fuses an absolute but noisy angle measurement (e.g. accelerometer) with
/// a relative but drifting rate measurement (e.g. gyroscope):
/// `angle = alpha * (angle + gyro_rate * dt) + (1 - alpha) * new_angle`.
///
/// Alpha near 1 trusts the gyro integration more (smoother, slower to
/// correct drift); alpha near 0 trusts the absolute measurement more
/// (noisier, no drift). Default alpha is 0.98.
///
/// The caller supplies `dt` in seconds; no validation is performed, and a
/// wrong or negative `dt` silently skews the integration.
#[derive(Debug, Clone)]
pub struct ComplementaryFilter {
    alpha: f64,
    last_angle: f64,
    initialized: bool,
}

impl Default for ComplementaryFilter {
    fn default() -> Self {
        Self::with_alpha(0.98)
    }
}

impl ComplementaryFilter {
    /// Create a filter with the default blend weight (0.98)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with a custom blend weight, clamped to [0.0, 1.0]
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            last_angle: 0.0,
            initialized: false,
        }
    }

    /// Advance the filter with an absolute angle measurement, an angular
    /// rate and the elapsed time in seconds; returns the fused angle.
    ///
    /// The first call seeds the internal angle with `new_angle` and
    /// returns it unchanged.
    pub fn filter(&mut self, new_angle: f64, gyro_rate: f64, dt: f64) -> f64 {
        if !self.initialized {
            self.last_angle = new_angle;
            self.initialized = true;
            return self.last_angle;
        }

        let gyro_angle = gyro_rate * dt;
        self.last_angle =
            self.alpha * (self.last_angle + gyro_angle) + (1.0 - self.alpha) * new_angle;
        self.last_angle
    }

    /// Set the blend weight, clamped to [0.0, 1.0]
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Get the configured blend weight
    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the current fused angle (0.0 before the first sample)
    pub fn get_angle(&self) -> f64 {
        self.last_angle
    }

    /// Check whether the filter has seen its first sample
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Clear the fused angle, keeping alpha
    pub fn reset(&mut self) {
        self.last_angle = 0.0;
        self.initialized = false;
    }
}
