//! Biquad band-stop (notch) filter

use std::f64::consts::PI;

use super::{FilterType, ScalarFilter};

/// Second-order IIR notch filter attenuating a band around a center
/// frequency, e.g. mains hum or a motor's vibration band.
///
/// Coefficients are computed once at construction from the center
/// frequency, bandwidth and sample rate, all in Hz. The numerator places
/// its zeros on the unit circle at the center frequency, so the notch has
/// unity gain at DC and a null at the center. The first sample seeds all
/// four delay taps, then the direct-form-I recurrence runs.
#[derive(Debug, Clone)]
pub struct BandStopFilter {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
    initialized: bool,
}

impl BandStopFilter {
    /// Create a notch at `center_freq_hz` with the given bandwidth, for a
    /// signal sampled at `sample_rate_hz`
    pub fn new(center_freq_hz: f64, bandwidth_hz: f64, sample_rate_hz: f64) -> Self {
        let omega0 = 2.0 * PI * center_freq_hz / sample_rate_hz;
        let alpha = omega0.sin()
            * (PI * bandwidth_hz * center_freq_hz / sample_rate_hz / omega0.sin()).sinh();
        let cos_omega0 = omega0.cos();
        let denom = 1.0 + alpha;

        Self {
            b0: 1.0 / denom,
            b1: -2.0 * cos_omega0 / denom,
            b2: 1.0 / denom,
            a1: -2.0 * cos_omega0 / denom,
            a2: (1.0 - alpha) / denom,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
            initialized: false,
        }
    }

    /// Advance the filter with a new sample and return the notched value.
    ///
    /// The first call seeds the delay taps and returns the sample unchanged.
    pub fn filter(&mut self, input: f64) -> f64 {
        if !self.initialized {
            self.x1 = input;
            self.x2 = input;
            self.y1 = input;
            self.y2 = input;
            self.initialized = true;
            return input;
        }

        let output = self.b0 * input + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Check whether the filter has seen its first sample
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Zero the delay taps, keeping the coefficients
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
        self.initialized = false;
    }
}

impl ScalarFilter for BandStopFilter {
    fn filter(&mut self, value: f64) -> f64 {
        BandStopFilter::filter(self, value)
    }

    fn reset(&mut self) {
        BandStopFilter::reset(self);
    }

    fn filter_type(&self) -> FilterType {
        FilterType::BandStop
    }
}
