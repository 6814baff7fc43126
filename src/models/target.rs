//! Celestial target description as supplied by a catalog lookup.

use serde::{Deserialize, Serialize};

/// An extended deep-sky target in equatorial coordinates.
///
/// Angular axis sizes come from the catalog and may be absent; the shot-count
/// simulation requires both and fails with `SizeDataMissing` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialTarget {
    /// Right ascension in degrees, [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
    /// Major axis angular size in arcminutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_axis_arcmin: Option<f64>,
    /// Minor axis angular size in arcminutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_axis_arcmin: Option<f64>,
    /// Position angle of the major axis relative to north, degrees.
    /// Zero when the catalog does not report one.
    #[serde(default)]
    pub position_angle_deg: f64,
    /// Display name, e.g. "NGC0224 (Andromeda Galaxy)".
    pub name: String,
}

impl CelestialTarget {
    /// Both axis sizes, or `None` if either is missing from the catalog.
    pub fn axis_sizes_arcmin(&self) -> Option<(f64, f64)> {
        match (self.major_axis_arcmin, self.minor_axis_arcmin) {
            (Some(major), Some(minor)) => Some((major, minor)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn andromeda() -> CelestialTarget {
        CelestialTarget {
            ra_deg: 10.6847,
            dec_deg: 41.269,
            major_axis_arcmin: Some(199.53),
            minor_axis_arcmin: Some(70.79),
            position_angle_deg: 35.0,
            name: "NGC0224 (Andromeda Galaxy)".to_string(),
        }
    }

    #[test]
    fn test_axis_sizes_present() {
        let (major, minor) = andromeda().axis_sizes_arcmin().unwrap();
        assert!(major > minor);
    }

    #[test]
    fn test_axis_sizes_missing_minor() {
        let mut target = andromeda();
        target.minor_axis_arcmin = None;
        assert!(target.axis_sizes_arcmin().is_none());
    }
}
