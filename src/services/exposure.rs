//! Blur-limited exposure time estimation.
//!
//! Uses the NPF-style star-trailing guideline
//! `(35·aperture + 30·pixel_pitch_um) / focal_length_mm` seconds, then rounds
//! the result down onto the standard shutter-speed ladder.

use serde::{Deserialize, Serialize};

/// Standard shutter speeds in seconds, ascending from 1/8000 s to 30 s.
const SHUTTER_LADDER: [f64; 55] = [
    1.0 / 8000.0,
    1.0 / 6400.0,
    1.0 / 5000.0,
    1.0 / 4000.0,
    1.0 / 3200.0,
    1.0 / 2500.0,
    1.0 / 2000.0,
    1.0 / 1600.0,
    1.0 / 1250.0,
    1.0 / 1000.0,
    1.0 / 800.0,
    1.0 / 640.0,
    1.0 / 500.0,
    1.0 / 400.0,
    1.0 / 320.0,
    1.0 / 250.0,
    1.0 / 200.0,
    1.0 / 160.0,
    1.0 / 125.0,
    1.0 / 100.0,
    1.0 / 80.0,
    1.0 / 60.0,
    1.0 / 50.0,
    1.0 / 40.0,
    1.0 / 30.0,
    1.0 / 25.0,
    1.0 / 20.0,
    1.0 / 15.0,
    1.0 / 13.0,
    1.0 / 10.0,
    1.0 / 8.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    0.3,
    0.4,
    0.5,
    0.6,
    0.8,
    1.0,
    1.3,
    1.6,
    2.0,
    2.5,
    3.0,
    4.0,
    5.0,
    6.0,
    8.0,
    10.0,
    13.0,
    15.0,
    20.0,
    25.0,
    30.0,
];

/// Exposure timing for one imaging session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposurePlan {
    /// Longest usable exposure, snapped onto the shutter ladder, seconds.
    pub quantized_exposure_seconds: f64,
    /// Raw blur-limited exposure before quantization, seconds.
    pub raw_exposure_seconds: f64,
    /// Dead time between exposures, seconds.
    pub shoot_interval_seconds: f64,
}

/// Estimate the longest single exposure that avoids star trailing.
pub fn estimate(
    aperture: f64,
    sensor_width_mm: f64,
    pixels_width: u32,
    focal_length_mm: f64,
    shoot_interval_seconds: f64,
) -> ExposurePlan {
    let pixel_pitch_um = (sensor_width_mm / pixels_width as f64) * 1000.0;
    let raw_exposure_seconds = (35.0 * aperture + 30.0 * pixel_pitch_um) / focal_length_mm;

    ExposurePlan {
        quantized_exposure_seconds: round_down_shutter_speed(raw_exposure_seconds),
        raw_exposure_seconds,
        shoot_interval_seconds,
    }
}

/// Round down to the nearest standard shutter speed.
///
/// Values below the shortest rung clamp to 1/8000 s; values above the longest
/// rung clamp to 30 s.
pub fn round_down_shutter_speed(raw_seconds: f64) -> f64 {
    SHUTTER_LADDER
        .iter()
        .rev()
        .copied()
        .find(|&speed| speed <= raw_seconds)
        .unwrap_or(SHUTTER_LADDER[0])
}
