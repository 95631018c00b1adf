//! Three-axis sensor helpers built on the scalar filters
//!
//! Embedded application loops usually feed whole IMU vectors, not single
//! channels. These helpers wrap the scalar filters for `Vector3` inputs:
//! component-wise smoothing and accelerometer/gyro tilt fusion.

pub mod axis;
pub mod tilt;

pub use axis::AxisLowPass;
pub use tilt::{TiltAngles, TiltEstimator};
