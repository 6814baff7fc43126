//! Public API surface for the planning engine.
//!
//! This file consolidates the request/response types callers exchange with the
//! engine. All types derive Serialize/Deserialize for JSON transport.

pub use crate::services::exposure::ExposurePlan;
pub use crate::services::field_of_view::FieldOfView;
pub use crate::services::frame_rotation::RotatedFrame;
pub use crate::services::session::SessionReport;
pub use crate::services::shot_count::ShotCountOutcome;
pub use crate::services::sky_position::{HorizontalPosition, SkyTrack};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Geographic location (latitude, longitude, elevation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeographicLocation {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
    /// Elevation in meters above sea level (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<f64>,
}

impl GeographicLocation {
    pub fn new(latitude: f64, longitude: f64, elevation_m: Option<f64>) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self {
            latitude,
            longitude,
            elevation_m,
        })
    }
}

/// One session planning request: target, observer, camera and timing inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Catalog identifier of the target, e.g. "M31" or "NGC0224".
    pub object_id: String,
    /// Observer latitude in decimal degrees.
    pub latitude: f64,
    /// Observer longitude in decimal degrees.
    pub longitude: f64,
    /// Observer elevation in meters (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<f64>,
    /// Sensor width in millimeters.
    pub sensor_width_mm: f64,
    /// Sensor height in millimeters.
    pub sensor_height_mm: f64,
    /// Pixel count along the sensor width.
    pub pixels_width: u32,
    /// Pixel count along the sensor height.
    pub pixels_height: u32,
    /// Lens focal length in millimeters.
    pub focal_length_mm: f64,
    /// Aperture f-number.
    pub aperture: f64,
    /// Dead time between exposures in seconds.
    pub shoot_interval_seconds: f64,
    /// Camera mounting angle in degrees (0 landscape, ±90 portrait).
    pub camera_mount_angle_deg: f64,
    /// Candidate observation date (local night starting on this date).
    pub observation_date: NaiveDate,
    /// Minimum altitude the target must reach, degrees. Falls back to the
    /// configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_altitude_deg: Option<f64>,
}
