//! Equatorial to horizontal coordinate transformation.
//!
//! Positions come from the Meeus algorithms in the `astro` crate, driven by
//! Greenwich mean sidereal time derived from the epoch. Local angular
//! velocities are estimated by a one-minute look-ahead finite difference;
//! that linearization is only valid near the sampled epoch and has to be
//! recomputed at every step of the search and simulation loops.

use std::f64::consts::PI;

use astro::angle::limit_to_two_PI;
use astro::coords::{alt_frm_eq, az_frm_eq};
use astro::time::{julian_day, mn_sidr, CalType, Date};
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::api::GeographicLocation;
use crate::error::PlanResult;
use crate::models::ObservationEpoch;

/// Look-ahead interval for the finite-difference rate estimate, seconds.
const RATE_SAMPLE_SECONDS: f64 = 60.0;

/// Instantaneous horizontal coordinates of a target. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalPosition {
    /// Elevation above the horizon, degrees.
    pub altitude_deg: f64,
    /// Compass bearing, degrees clockwise from north.
    pub azimuth_deg: f64,
}

/// A horizontal position together with its epoch and local drift rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyTrack {
    pub position: HorizontalPosition,
    pub epoch: ObservationEpoch,
    /// Altitude rate of change, degrees per minute.
    pub altitude_rate_deg_per_min: f64,
    /// Azimuth rate of change, degrees per minute.
    pub azimuth_rate_deg_per_min: f64,
}

/// Transforms one target's equatorial coordinates into horizontal coordinates
/// for a fixed observer.
#[derive(Debug, Clone)]
pub struct SkyPositionSolver {
    location: GeographicLocation,
    ra_deg: f64,
    dec_deg: f64,
}

impl SkyPositionSolver {
    pub fn new(location: GeographicLocation, ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            location,
            ra_deg,
            dec_deg,
        }
    }

    /// Horizontal position of the target at the given epoch.
    pub fn position_at(&self, epoch: &ObservationEpoch) -> PlanResult<HorizontalPosition> {
        epoch.ensure_utc()?;
        let (altitude_deg, azimuth_deg) = alt_az_deg(
            self.ra_deg,
            self.dec_deg,
            self.location.latitude,
            self.location.longitude,
            &epoch.datetime(),
        );
        Ok(HorizontalPosition {
            altitude_deg,
            azimuth_deg,
        })
    }

    /// Position plus local drift rates from a one-minute look-ahead sample.
    pub fn track_at(&self, epoch: &ObservationEpoch) -> PlanResult<SkyTrack> {
        let position = self.position_at(epoch)?;
        let ahead = epoch.advance_seconds(RATE_SAMPLE_SECONDS);
        let next = self.position_at(&ahead)?;

        let minutes = RATE_SAMPLE_SECONDS / 60.0;
        Ok(SkyTrack {
            position,
            epoch: *epoch,
            altitude_rate_deg_per_min: (next.altitude_deg - position.altitude_deg) / minutes,
            azimuth_rate_deg_per_min: wrap_degrees(next.azimuth_deg - position.azimuth_deg)
                / minutes,
        })
    }
}

/// Normalize an angular difference into [-180, 180] degrees so a target
/// crossing the north meridian does not register a spurious full-circle jump.
pub fn wrap_degrees(delta_deg: f64) -> f64 {
    let wrapped = delta_deg.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Altitude and azimuth (degrees, azimuth clockwise from north) of the given
/// equatorial coordinates for an observer at `lat_deg`/`lon_deg`.
pub(crate) fn alt_az_deg(
    ra_deg: f64,
    dec_deg: f64,
    lat_deg: f64,
    lon_deg: f64,
    time: &DateTime<Utc>,
) -> (f64, f64) {
    let ra = ra_deg.to_radians();
    let dec = dec_deg.to_radians();
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();

    let gmst = greenwich_mean_sidereal_time(time);

    // astro::coords::hr_angl_frm_observer_long() is buggy; the correct
    // relation is trivial.
    let hour_angle = gmst + lon - ra;

    // az_frm_eq measures azimuth from south; shift to clockwise-from-north.
    let meeus_az = az_frm_eq(hour_angle, dec, lat);
    let az = limit_to_two_PI(meeus_az + PI);
    let alt = alt_frm_eq(hour_angle, dec, lat);

    (alt.to_degrees(), az.to_degrees())
}

/// Greenwich mean sidereal time in radians at the given UTC instant.
fn greenwich_mean_sidereal_time(time: &DateTime<Utc>) -> f64 {
    let date = Date {
        year: time.date_naive().year() as i16,
        month: time.date_naive().month() as u8,
        decimal_day: time.date_naive().day() as f64,
        cal_type: CalType::Gregorian,
    };
    let jd = julian_day(&date);

    let utc_hours = time.time().num_seconds_from_midnight() as f64 / 3600.0;
    let gmst_hours = mn_sidr(jd).to_degrees() / 15.0 + utc_hours * 1.00273790935;

    limit_to_two_PI((gmst_hours * 15.0).to_radians())
}
