//! Demo binary: runs a synthetic noisy signal through each scalar filter
//! and prints a JSON summary of how well the clean signal is recovered.

use std::f64::consts::PI;

use sensor_filters::FilterParams;

/// Deterministic pseudo-noise so runs are reproducible
struct NoiseSource {
    state: u64,
}

impl NoiseSource {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Uniform noise in [-1.0, 1.0]
    fn next(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let bits = (self.state >> 11) as f64 / (1u64 << 53) as f64;
        bits * 2.0 - 1.0
    }
}

fn main() {
    let sample_rate = 100.0;
    let samples = 500;

    let candidates = [
        ("low_pass", FilterParams::LowPass { alpha: 0.1 }),
        ("moving_average", FilterParams::MovingAverage { window_size: 8 }),
        ("median", FilterParams::Median { window_size: 5 }),
        (
            "kalman",
            FilterParams::Kalman {
                process_noise: 0.01,
                measurement_noise: 1.0,
                estimate_error: 1.0,
            },
        ),
    ];

    let mut results = Vec::new();
    for (name, params) in &candidates {
        let mut filter = params.build();
        let mut noise = NoiseSource::new(42);

        let mut raw_error = 0.0;
        let mut filtered_error = 0.0;
        let mut estimate = 0.0;
        for n in 0..samples {
            let t = n as f64 / sample_rate;
            let clean = (2.0 * PI * 0.5 * t).sin();
            let noisy = clean + 0.3 * noise.next();
            estimate = filter.filter(noisy);

            raw_error += (noisy - clean) * (noisy - clean);
            filtered_error += (estimate - clean) * (estimate - clean);
        }

        results.push(serde_json::json!({
            "filter": name,
            "final_estimate": estimate,
            "raw_rms_error": (raw_error / samples as f64).sqrt(),
            "filtered_rms_error": (filtered_error / samples as f64).sqrt(),
        }));
    }

    let summary = serde_json::json!({
        "signal": "0.5 Hz sine with uniform noise",
        "samples": samples,
        "sample_rate_hz": sample_rate,
        "results": results,
    });

    println!("{}", serde_json::to_string_pretty(&summary).unwrap());
}
