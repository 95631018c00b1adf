//! Accelerometer/gyro tilt estimation

use nalgebra::Vector3;

use crate::filters::ComplementaryFilter;

/// Fused pitch and roll estimate, in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltAngles {
    pub pitch: f64,
    pub roll: f64,
}

/// Pitch/roll estimator fusing accelerometer tilt with gyro rates.
///
/// The accelerometer gives an absolute but noisy tilt reference (gravity
/// direction); the gyro gives clean short-term rates that drift when
/// integrated. One [`ComplementaryFilter`] per axis blends the two.
///
/// Conventions: accelerometer in any consistent unit with +z up at rest,
/// gyro rates in rad/s about the x (roll) and y (pitch) axes, angles out
/// in radians.
#[derive(Debug, Clone)]
pub struct TiltEstimator {
    pitch: ComplementaryFilter,
    roll: ComplementaryFilter,
}

impl Default for TiltEstimator {
    fn default() -> Self {
        Self::with_alpha(0.98)
    }
}

impl TiltEstimator {
    /// Create an estimator with the default blend weight (0.98)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator with a custom blend weight, clamped to [0.0, 1.0]
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            pitch: ComplementaryFilter::with_alpha(alpha),
            roll: ComplementaryFilter::with_alpha(alpha),
        }
    }

    /// Advance the estimator with an accelerometer vector, a gyro rate
    /// vector and the elapsed time in seconds; returns the fused angles.
    pub fn update(&mut self, accel: &Vector3<f64>, gyro: &Vector3<f64>, dt: f64) -> TiltAngles {
        let accel_pitch = (-accel.x).atan2((accel.y * accel.y + accel.z * accel.z).sqrt());
        let accel_roll = accel.y.atan2(accel.z);

        TiltAngles {
            pitch: self.pitch.filter(accel_pitch, gyro.y, dt),
            roll: self.roll.filter(accel_roll, gyro.x, dt),
        }
    }

    /// Get the current fused angles without advancing the estimator
    pub fn get_angles(&self) -> TiltAngles {
        TiltAngles {
            pitch: self.pitch.get_angle(),
            roll: self.roll.get_angle(),
        }
    }

    /// Set the blend weight on both axes, clamped to [0.0, 1.0]
    pub fn set_alpha(&mut self, alpha: f64) {
        self.pitch.set_alpha(alpha);
        self.roll.set_alpha(alpha);
    }

    /// Get the configured blend weight
    pub fn get_alpha(&self) -> f64 {
        self.pitch.get_alpha()
    }

    /// Check whether the estimator has seen its first sample
    pub fn is_initialized(&self) -> bool {
        self.pitch.is_initialized()
    }

    /// Clear both angle estimates, keeping alpha
    pub fn reset(&mut self) {
        self.pitch.reset();
        self.roll.reset();
    }
}
