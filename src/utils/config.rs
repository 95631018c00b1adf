//! Declarative filter configuration with JSON persistence

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::filters::{
    BandStopFilter, HighPassFilter, KalmanFilter, LowPassFilter, MedianFilter,
    MovingAverageFilter, ScalarFilter,
};

/// Construction parameters for a scalar filter.
///
/// Mirrors each filter's constructor so a filter choice can live in a
/// config file and be built at runtime. Blend weights out of [0, 1] are
/// clamped at construction exactly as the setters clamp them; they are
/// never a configuration error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterParams {
    LowPass {
        alpha: f64,
    },
    HighPass {
        alpha: f64,
    },
    MovingAverage {
        window_size: usize,
    },
    Median {
        window_size: usize,
    },
    Kalman {
        process_noise: f64,
        measurement_noise: f64,
        estimate_error: f64,
    },
    BandStop {
        center_freq_hz: f64,
        bandwidth_hz: f64,
        sample_rate_hz: f64,
    },
}

impl FilterParams {
    /// Construct the configured filter behind the common trait
    pub fn build(&self) -> Box<dyn ScalarFilter> {
        match *self {
            FilterParams::LowPass { alpha } => Box::new(LowPassFilter::with_alpha(alpha)),
            FilterParams::HighPass { alpha } => Box::new(HighPassFilter::with_alpha(alpha)),
            FilterParams::MovingAverage { window_size } => {
                Box::new(MovingAverageFilter::new(window_size))
            }
            FilterParams::Median { window_size } => Box::new(MedianFilter::new(window_size)),
            FilterParams::Kalman {
                process_noise,
                measurement_noise,
                estimate_error,
            } => Box::new(KalmanFilter::with_parameters(
                process_noise,
                measurement_noise,
                estimate_error,
            )),
            FilterParams::BandStop {
                center_freq_hz,
                bandwidth_hz,
                sample_rate_hz,
            } => Box::new(BandStopFilter::new(
                center_freq_hz,
                bandwidth_hz,
                sample_rate_hz,
            )),
        }
    }

    /// Check structural parameters.
    ///
    /// Only parameters with no graceful in-filter handling are rejected;
    /// alpha values are clamped by the filters and pass validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            FilterParams::LowPass { .. } | FilterParams::HighPass { .. } => Ok(()),
            FilterParams::MovingAverage { window_size }
            | FilterParams::Median { window_size } => {
                if window_size == 0 {
                    return Err(ConfigError::InvalidParameter {
                        parameter: "window_size".to_string(),
                        value: window_size.to_string(),
                        reason: "window must hold at least one sample".to_string(),
                    });
                }
                Ok(())
            }
            FilterParams::Kalman {
                process_noise,
                measurement_noise,
                ..
            } => {
                if process_noise < 0.0 {
                    return Err(ConfigError::InvalidParameter {
                        parameter: "process_noise".to_string(),
                        value: process_noise.to_string(),
                        reason: "noise variance cannot be negative".to_string(),
                    });
                }
                if measurement_noise <= 0.0 {
                    return Err(ConfigError::InvalidParameter {
                        parameter: "measurement_noise".to_string(),
                        value: measurement_noise.to_string(),
                        reason: "measurement noise must be positive".to_string(),
                    });
                }
                Ok(())
            }
            FilterParams::BandStop {
                center_freq_hz,
                bandwidth_hz,
                sample_rate_hz,
            } => {
                if sample_rate_hz <= 0.0 {
                    return Err(ConfigError::InvalidParameter {
                        parameter: "sample_rate_hz".to_string(),
                        value: sample_rate_hz.to_string(),
                        reason: "sample rate must be positive".to_string(),
                    });
                }
                if bandwidth_hz <= 0.0 {
                    return Err(ConfigError::InvalidParameter {
                        parameter: "bandwidth_hz".to_string(),
                        value: bandwidth_hz.to_string(),
                        reason: "bandwidth must be positive".to_string(),
                    });
                }
                if center_freq_hz <= 0.0 || center_freq_hz >= sample_rate_hz / 2.0 {
                    return Err(ConfigError::InvalidParameter {
                        parameter: "center_freq_hz".to_string(),
                        value: center_freq_hz.to_string(),
                        reason: "center frequency must lie below the Nyquist rate".to_string(),
                    });
                }
                Ok(())
            }
        }
    }
}

/// Named filter parameter sets, loadable from and savable to a JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterProfiles {
    profiles: HashMap<String, FilterParams>,
}

impl FilterProfiles {
    /// Create an empty profile store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a profile store and load it from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut profiles = Self::new();
        profiles.load_from_file(path)?;
        Ok(profiles)
    }

    /// Add or replace a named profile after validating it
    pub fn insert(&mut self, name: &str, params: FilterParams) -> Result<(), ConfigError> {
        params.validate()?;
        self.profiles.insert(name.to_string(), params);
        Ok(())
    }

    /// Look up a profile by name
    pub fn get(&self, name: &str) -> Option<&FilterParams> {
        self.profiles.get(name)
    }

    /// Remove a profile; returns whether it existed
    pub fn remove(&mut self, name: &str) -> bool {
        self.profiles.remove(name).is_some()
    }

    /// Number of stored profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterate over profile names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Load profiles from a JSON file, replacing the current contents.
    ///
    /// Every entry is validated before anything is applied, so a bad file
    /// leaves the store unchanged.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read profile file '{}': {}", path_str, e),
        })?;

        let loaded: FilterProfiles =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse profile file '{}': {}", path_str, e),
            })?;

        for params in loaded.profiles.values() {
            params.validate()?;
        }

        self.profiles = loaded.profiles;
        Ok(())
    }

    /// Save all profiles to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize profiles: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write profile file '{}': {}", path_str, e),
        })
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => {
                write!(f, "I/O error: {}", message)
            }
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
