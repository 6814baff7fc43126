//! Shot-count simulation.
//!
//! Starting from the first visible position, the simulator advances in
//! exposure-plus-interval steps, re-estimating the local drift rate at every
//! step, until the frame margins divided by the drift afford at least one
//! full exposure. The loop is not self-terminating by construction (drift can
//! evaluate to zero), so it carries an explicit step cap.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::error::{PlanError, PlanResult};
use crate::models::CelestialTarget;
use crate::services::frame_rotation::RotatedFrame;
use crate::services::sky_position::{wrap_degrees, SkyPositionSolver, SkyTrack};

/// Result of a successful shot-count simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotCountOutcome {
    /// Number of exposures that fit before drift carries the target out of
    /// the usable frame.
    pub shot_count: u32,
    /// Total session duration, `shot_count * (exposure + interval)` seconds.
    pub total_duration_seconds: f64,
}

/// Simulate how many exposures fit before the target drifts out of frame.
pub fn simulate(
    start: &SkyTrack,
    solver: &SkyPositionSolver,
    frame: &RotatedFrame,
    target: &CelestialTarget,
    exposure_seconds: f64,
    interval_seconds: f64,
    min_altitude_deg: f64,
    config: &PlannerConfig,
) -> PlanResult<ShotCountOutcome> {
    start.epoch.ensure_utc()?;

    let (major_arcmin, minor_arcmin) = target
        .axis_sizes_arcmin()
        .ok_or_else(|| PlanError::SizeDataMissing(target.name.clone()))?;

    let altitude_margin = (frame.vertical_arcmin - major_arcmin).abs() / 2.0;
    let azimuth_margin = (frame.horizontal_arcmin - minor_arcmin).abs() / 2.0;
    let step_seconds = exposure_seconds + interval_seconds;

    let mut current_position = start.position;
    let mut current_epoch = start.epoch;

    for _ in 0..config.max_simulation_steps {
        let next_epoch = current_epoch.advance_seconds(step_seconds);
        let next_position = solver.position_at(&next_epoch)?;
        if next_position.altitude_deg < min_altitude_deg {
            return Err(PlanError::NotVisible(format!(
                "target sets below {} degrees at {}",
                min_altitude_deg,
                next_epoch.datetime()
            )));
        }

        // Average drift over the step, degrees per minute.
        let altitude_rate = (next_position.altitude_deg - current_position.altitude_deg).abs()
            * 60.0
            / interval_seconds;
        let azimuth_rate = wrap_degrees(next_position.azimuth_deg - current_position.azimuth_deg)
            .abs()
            * 60.0
            / interval_seconds;

        // A stationary axis imposes no limit; dividing by it is never allowed.
        let altitude_limit = axis_limit(altitude_margin, altitude_rate, config);
        let azimuth_limit = axis_limit(azimuth_margin, azimuth_rate, config);

        let tightest = match (altitude_limit, azimuth_limit) {
            (Some(alt), Some(az)) => alt.min(az),
            (Some(alt), None) => alt,
            (None, Some(az)) => az,
            (None, None) => return Err(PlanError::DegenerateDrift),
        };

        let total_time_available = tightest * interval_seconds;
        let shot_count = (total_time_available / step_seconds).floor().max(0.0) as u32;

        if shot_count > 0 {
            return Ok(ShotCountOutcome {
                shot_count,
                total_duration_seconds: shot_count as f64 * step_seconds,
            });
        }

        debug!(
            "no shots fit at {}; stepping (alt rate {:.4}, az rate {:.4} deg/min)",
            next_epoch.datetime(),
            altitude_rate,
            azimuth_rate
        );
        current_position = next_position;
        current_epoch = next_epoch;
    }

    Err(PlanError::DegenerateDrift)
}

/// Interval steps affordable on one axis, or `None` when drift on that axis
/// is below the stationary epsilon.
fn axis_limit(margin: f64, rate_deg_per_min: f64, config: &PlannerConfig) -> Option<f64> {
    if rate_deg_per_min < config.drift_epsilon_deg_per_min {
        None
    } else {
        Some(margin / rate_deg_per_min)
    }
}
