//! Projection of the camera frame onto the sky's altitude/azimuth axes.
//!
//! Landscape (0 degrees) and portrait (±90 degrees) mounts are axis-aligned
//! special cases: the extents pass through or swap. Any other mount angle
//! composes two 2D rotations, one for the camera mount angle and one for the
//! target's position angle, applied successively to the (width, height)
//! vector; the projected magnitudes are returned.

use serde::{Deserialize, Serialize};

use crate::services::field_of_view::FieldOfView;

/// Usable frame extents projected onto the horizontal coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotatedFrame {
    /// Extent along the azimuth axis, arcminutes.
    pub horizontal_arcmin: f64,
    /// Extent along the altitude axis, arcminutes.
    pub vertical_arcmin: f64,
}

/// Rotate the field-of-view rectangle into the target's frame.
pub fn rotate_frame(
    fov: &FieldOfView,
    mount_angle_deg: f64,
    position_angle_deg: f64,
) -> RotatedFrame {
    let (horizontal_arcmin, vertical_arcmin) = if mount_angle_deg == 0.0 {
        (fov.horizontal_arcmin, fov.vertical_arcmin)
    } else if mount_angle_deg == 90.0 || mount_angle_deg == -90.0 {
        (fov.vertical_arcmin, fov.horizontal_arcmin)
    } else {
        rotate_extents(
            fov.horizontal_arcmin,
            fov.vertical_arcmin,
            mount_angle_deg,
            position_angle_deg,
        )
    };

    RotatedFrame {
        horizontal_arcmin,
        vertical_arcmin,
    }
}

/// Apply the mount-angle rotation after the position-angle rotation to the
/// (width, height) vector and return the absolute projected components.
pub(crate) fn rotate_extents(
    width: f64,
    height: f64,
    mount_angle_deg: f64,
    position_angle_deg: f64,
) -> (f64, f64) {
    let mount = mount_angle_deg.to_radians();
    let pa = position_angle_deg.to_radians();

    let (mount_sin, mount_cos) = mount.sin_cos();
    let (pa_sin, pa_cos) = pa.sin_cos();

    // R(position angle) * (w, h)
    let x1 = pa_cos * width - pa_sin * height;
    let y1 = pa_sin * width + pa_cos * height;

    // R(mount angle) * (x1, y1)
    let x2 = mount_cos * x1 - mount_sin * y1;
    let y2 = mount_sin * x1 + mount_cos * y1;

    (x2.abs(), y2.abs())
}
