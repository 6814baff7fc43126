//! Observation epochs on an explicit time scale.
//!
//! All engine arithmetic happens on a single scale (UTC). The scale travels
//! with the epoch so that a mixed-scale value is caught as a
//! [`PlanError::TimeScaleViolation`](crate::error::PlanError) instead of
//! silently producing positions for the wrong instant.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Julian day of the Unix epoch (1970-01-01 00:00:00 UTC).
const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Offset between Julian Date and Modified Julian Date.
const MJD_OFFSET: f64 = 2_400_000.5;

/// Time scale an epoch is expressed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeScale {
    /// Coordinated Universal Time. The only scale the engine computes on.
    Utc,
    /// International Atomic Time.
    Tai,
    /// Terrestrial Time.
    Tt,
}

impl std::fmt::Display for TimeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeScale::Utc => write!(f, "UTC"),
            TimeScale::Tai => write!(f, "TAI"),
            TimeScale::Tt => write!(f, "TT"),
        }
    }
}

/// An instant on a fixed absolute time scale.
///
/// Adding a duration produces a new epoch on the same scale; the value itself
/// is immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationEpoch {
    datetime: DateTime<Utc>,
    scale: TimeScale,
}

impl ObservationEpoch {
    /// Create an epoch on the UTC scale.
    pub fn utc(datetime: DateTime<Utc>) -> Self {
        Self {
            datetime,
            scale: TimeScale::Utc,
        }
    }

    /// Create an epoch on an arbitrary scale. The engine rejects anything
    /// other than UTC at its entry points.
    pub fn with_scale(datetime: DateTime<Utc>, scale: TimeScale) -> Self {
        Self { datetime, scale }
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.datetime
    }

    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    /// Return a new epoch advanced by the given number of seconds.
    pub fn advance_seconds(&self, seconds: f64) -> Self {
        Self {
            datetime: self.datetime + Duration::milliseconds((seconds * 1000.0).round() as i64),
            scale: self.scale,
        }
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `self` precedes it).
    pub fn seconds_since(&self, earlier: &ObservationEpoch) -> f64 {
        (self.datetime - earlier.datetime).num_milliseconds() as f64 / 1000.0
    }

    /// Julian day number, including the day fraction.
    pub fn julian_day(&self) -> f64 {
        let unix_seconds = self.datetime.timestamp() as f64
            + self.datetime.timestamp_subsec_nanos() as f64 / 1e9;
        JD_UNIX_EPOCH + unix_seconds / 86_400.0
    }

    /// Modified Julian Date (MJD 0 = 1858-11-17 00:00:00 UTC).
    pub fn modified_julian_day(&self) -> f64 {
        self.julian_day() - MJD_OFFSET
    }

    /// Verify this epoch is on the UTC scale.
    pub fn ensure_utc(&self) -> PlanResult<()> {
        if self.scale == TimeScale::Utc {
            Ok(())
        } else {
            Err(PlanError::TimeScaleViolation {
                expected: TimeScale::Utc,
                found: self.scale,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn epoch_2024_01_15_midnight() -> ObservationEpoch {
        ObservationEpoch::utc(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_julian_day_unix_epoch() {
        let epoch = ObservationEpoch::utc(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
        assert!((epoch.julian_day() - 2_440_587.5).abs() < 1e-9);
    }

    #[test]
    fn test_mjd_of_known_date() {
        // 2024-01-15 00:00 UTC is MJD 60324.
        let epoch = epoch_2024_01_15_midnight();
        assert!((epoch.modified_julian_day() - 60324.0).abs() < 1e-6);
    }

    #[test]
    fn test_advance_seconds() {
        let epoch = epoch_2024_01_15_midnight();
        let later = epoch.advance_seconds(90.0);
        assert!((later.seconds_since(&epoch) - 90.0).abs() < 1e-9);
        assert_eq!(later.scale(), TimeScale::Utc);
    }

    #[test]
    fn test_advance_fractional_seconds() {
        let epoch = epoch_2024_01_15_midnight();
        let later = epoch.advance_seconds(2.5);
        assert!((later.seconds_since(&epoch) - 2.5).abs() < 1e-3);
    }

    #[test]
    fn test_ensure_utc_accepts_utc() {
        assert!(epoch_2024_01_15_midnight().ensure_utc().is_ok());
    }

    #[test]
    fn test_ensure_utc_rejects_tai() {
        let epoch = ObservationEpoch::with_scale(
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            TimeScale::Tai,
        );
        assert_eq!(
            epoch.ensure_utc(),
            Err(PlanError::TimeScaleViolation {
                expected: TimeScale::Utc,
                found: TimeScale::Tai,
            })
        );
    }
}
