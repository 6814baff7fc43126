//! Camera and lens geometry.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Sensor, lens and mounting parameters for one imaging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraGeometry {
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
    /// Aperture as an f-number.
    pub aperture: f64,
    /// Rotation of the sensor's long axis relative to the local horizon,
    /// degrees. 0 is landscape, ±90 portrait, anything else a free rotation.
    pub mount_angle_deg: f64,
}

impl CameraGeometry {
    /// Check the strictly-positive preconditions of the optical formulas.
    pub fn validate(&self) -> PlanResult<()> {
        if self.sensor_width_mm <= 0.0 || self.sensor_height_mm <= 0.0 {
            return Err(PlanError::InvalidGeometry(format!(
                "sensor dimensions must be positive, got {} x {} mm",
                self.sensor_width_mm, self.sensor_height_mm
            )));
        }
        if self.pixels_width == 0 || self.pixels_height == 0 {
            return Err(PlanError::InvalidGeometry(format!(
                "pixel counts must be positive, got {} x {}",
                self.pixels_width, self.pixels_height
            )));
        }
        if self.focal_length_mm <= 0.0 {
            return Err(PlanError::InvalidGeometry(format!(
                "focal length must be positive, got {} mm",
                self.focal_length_mm
            )));
        }
        if self.aperture <= 0.0 {
            return Err(PlanError::InvalidGeometry(format!(
                "aperture must be positive, got f/{}",
                self.aperture
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_frame_50mm() -> CameraGeometry {
        CameraGeometry {
            sensor_width_mm: 36.0,
            sensor_height_mm: 24.0,
            pixels_width: 6000,
            pixels_height: 4000,
            focal_length_mm: 50.0,
            aperture: 2.8,
            mount_angle_deg: 0.0,
        }
    }

    #[test]
    fn test_validate_accepts_full_frame() {
        assert!(full_frame_50mm().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_focal_length() {
        let mut camera = full_frame_50mm();
        camera.focal_length_mm = 0.0;
        assert!(matches!(
            camera.validate(),
            Err(PlanError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_pixels() {
        let mut camera = full_frame_50mm();
        camera.pixels_height = 0;
        assert!(matches!(
            camera.validate(),
            Err(PlanError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_sensor() {
        let mut camera = full_frame_50mm();
        camera.sensor_width_mm = -36.0;
        assert!(camera.validate().is_err());
    }
}
