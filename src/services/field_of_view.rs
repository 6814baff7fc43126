//! Field-of-view computation from sensor and lens geometry.

use serde::{Deserialize, Serialize};

use crate::models::CameraGeometry;

/// Angular extent of the sky captured by the sensor, plus per-pixel scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldOfView {
    /// Horizontal extent in arcminutes.
    pub horizontal_arcmin: f64,
    /// Vertical extent in arcminutes.
    pub vertical_arcmin: f64,
    /// Angular width of one pixel in arcseconds.
    pub pixel_width_arcsec: f64,
    /// Angular height of one pixel in arcseconds.
    pub pixel_height_arcsec: f64,
}

/// Compute the camera field of view and per-pixel angular resolution.
///
/// Per axis: pixel pitch = sensor dimension / pixel count, field of view =
/// `2·atan(pitch·pixels / (2·focal))`, per-pixel scale = fov / pixels.
/// Geometry is validated upstream; this is pure arithmetic.
pub fn compute(camera: &CameraGeometry) -> FieldOfView {
    let pixel_width_mm = camera.sensor_width_mm / camera.pixels_width as f64;
    let pixel_height_mm = camera.sensor_height_mm / camera.pixels_height as f64;

    let fov_horizontal_deg = 2.0
        * ((pixel_width_mm * camera.pixels_width as f64) / (2.0 * camera.focal_length_mm))
            .atan()
            .to_degrees();
    let fov_vertical_deg = 2.0
        * ((pixel_height_mm * camera.pixels_height as f64) / (2.0 * camera.focal_length_mm))
            .atan()
            .to_degrees();

    let horizontal_arcmin = fov_horizontal_deg * 60.0;
    let vertical_arcmin = fov_vertical_deg * 60.0;

    FieldOfView {
        horizontal_arcmin,
        vertical_arcmin,
        pixel_width_arcsec: horizontal_arcmin / camera.pixels_width as f64 * 60.0,
        pixel_height_arcsec: vertical_arcmin / camera.pixels_height as f64 * 60.0,
    }
}
