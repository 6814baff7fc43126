//! Astronomical night window computation.
//!
//! The visibility search is bounded to one observing night: from astronomical
//! dusk (Sun altitude below -18 degrees) on the requested date to the
//! following astronomical dawn. The Sun's geocentric ecliptic position comes
//! from the `astro` crate and is converted to horizontal coordinates with the
//! same transform the target solver uses.

use astro::coords::{asc_frm_ecl, dec_frm_ecl};
use astro::ecliptic::mn_oblq_IAU;
use astro::sun::geocent_ecl_pos;
use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use log::debug;

use crate::api::GeographicLocation;
use crate::config::PlannerConfig;
use crate::error::{PlanError, PlanResult};
use crate::models::ObservationEpoch;
use crate::services::sky_position::alt_az_deg;

/// Scan horizon for the dusk/dawn search, hours past local noon UTC.
const NIGHT_SCAN_HOURS: i64 = 48;

/// One observing night, dusk to dawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightWindow {
    /// Start of astronomical night.
    pub dusk: ObservationEpoch,
    /// End of astronomical night.
    pub dawn: ObservationEpoch,
}

/// Sun altitude in degrees at the given epoch.
pub fn sun_altitude_deg(location: &GeographicLocation, epoch: &ObservationEpoch) -> PlanResult<f64> {
    epoch.ensure_utc()?;
    let jd = epoch.julian_day();
    let (ecl_point, _) = geocent_ecl_pos(jd);
    let oblq = mn_oblq_IAU(jd);
    let sun_ra = asc_frm_ecl(ecl_point.long, ecl_point.lat, oblq);
    let sun_dec = dec_frm_ecl(ecl_point.long, ecl_point.lat, oblq);

    let (altitude_deg, _) = alt_az_deg(
        sun_ra.to_degrees(),
        sun_dec.to_degrees(),
        location.latitude,
        location.longitude,
        &epoch.datetime(),
    );
    Ok(altitude_deg)
}

/// Find the astronomical night starting on the given date.
///
/// Scans forward in one-minute steps from noon UTC on `date`, bounded to 48
/// hours. Dusk is the first sample where the Sun drops below the configured
/// twilight altitude; dawn the first sample after dusk where it rises back
/// above. A location/date with no qualifying dusk (polar day) is reported as
/// `NotVisible` since the observing window never opens.
pub fn night_window(
    location: &GeographicLocation,
    date: NaiveDate,
    config: &PlannerConfig,
) -> PlanResult<NightWindow> {
    let noon = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)) + Duration::hours(12);
    let scan_end = ObservationEpoch::utc(noon + Duration::hours(NIGHT_SCAN_HOURS));
    let step = config.search_step_seconds;
    let threshold = config.twilight_sun_altitude_deg;

    let mut cursor = ObservationEpoch::utc(noon);
    let mut dusk: Option<ObservationEpoch> = None;

    while cursor.datetime() < scan_end.datetime() {
        let altitude = sun_altitude_deg(location, &cursor)?;
        match dusk {
            None => {
                if altitude < threshold {
                    dusk = Some(cursor);
                }
            }
            Some(dusk_epoch) => {
                if altitude >= threshold {
                    debug!(
                        "astronomical night {} -> {}",
                        dusk_epoch.datetime(),
                        cursor.datetime()
                    );
                    return Ok(NightWindow {
                        dusk: dusk_epoch,
                        dawn: cursor,
                    });
                }
            }
        }
        cursor = cursor.advance_seconds(step);
    }

    match dusk {
        // Dusk found but the sun never came back up within the scan; use the
        // scan end as the dawn bound.
        Some(dusk_epoch) => Ok(NightWindow {
            dusk: dusk_epoch,
            dawn: scan_end,
        }),
        None => Err(PlanError::NotVisible(format!(
            "no astronomical night (sun altitude below {} degrees) within {} hours of {}",
            threshold, NIGHT_SCAN_HOURS, date
        ))),
    }
}
