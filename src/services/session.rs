//! Session planning orchestrator.
//!
//! Chains the pipeline stages over one request: catalog lookup, geometry
//! validation, astronomical night window, visibility search, field-of-view
//! and exposure derivation, frame rotation, shot-count simulation, report
//! assembly. Failures of any stage propagate unchanged.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::api::{GeographicLocation, SessionRequest};
use crate::catalog::DeepSkyCatalog;
use crate::config::PlannerConfig;
use crate::error::{PlanError, PlanResult};
use crate::models::{CameraGeometry, CelestialTarget, ObservationEpoch};
use crate::services::astronomical_night::night_window;
use crate::services::exposure::ExposurePlan;
use crate::services::field_of_view::FieldOfView;
use crate::services::frame_rotation::{rotate_frame, RotatedFrame};
use crate::services::shot_count::ShotCountOutcome;
use crate::services::sky_position::{HorizontalPosition, SkyPositionSolver};
use crate::services::visibility::VisibilityLocator;
use crate::services::{exposure, field_of_view, shot_count};

/// Complete planning result for one session request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Catalog identifier the session was planned for.
    pub object_id: String,
    /// Display name from the catalog.
    pub object_name: String,
    /// Target axis sizes in arcminutes.
    pub size_major_arcmin: f64,
    pub size_minor_arcmin: f64,
    /// Target position angle in degrees.
    pub position_angle_deg: f64,
    /// Camera field of view and pixel scale.
    pub field_of_view: FieldOfView,
    /// Frame extents projected onto the sky axes.
    pub rotated_frame: RotatedFrame,
    /// Exposure timing (quantized, raw, interval).
    pub exposure: ExposurePlan,
    /// Number of exposures that fit.
    pub shot_count: u32,
    /// Total session duration in seconds.
    pub total_duration_seconds: f64,
    /// Total duration decomposed into whole minutes and leftover seconds.
    pub total_minutes: u32,
    pub total_seconds_remainder: f64,
    /// When the target first qualifies.
    pub visibility_start: ObservationEpoch,
    /// Where the target stands at that epoch.
    pub start_position: HorizontalPosition,
    /// Human-readable summary line.
    pub observation_summary: String,
    /// Minimum altitude threshold the plan honored, degrees.
    pub min_altitude_deg: f64,
    /// Echoed camera parameters.
    pub camera: CameraGeometry,
}

/// Plan an imaging session for the given request.
pub fn plan_session(
    request: &SessionRequest,
    catalog: &dyn DeepSkyCatalog,
    config: &PlannerConfig,
) -> PlanResult<SessionReport> {
    let target = catalog
        .lookup(&request.object_id)
        .ok_or_else(|| PlanError::ObjectNotFound(request.object_id.clone()))?;

    let camera = camera_from_request(request);
    camera.validate()?;
    if request.shoot_interval_seconds <= 0.0 {
        return Err(PlanError::InvalidGeometry(format!(
            "shoot interval must be positive, got {} s",
            request.shoot_interval_seconds
        )));
    }
    let location = GeographicLocation::new(
        request.latitude,
        request.longitude,
        request.elevation_m,
    )
    .map_err(PlanError::InvalidGeometry)?;

    let min_altitude_deg = request
        .min_altitude_deg
        .unwrap_or(config.default_min_altitude_deg);

    let window = night_window(&location, request.observation_date, config)?;
    debug!(
        "observing night for {}: {} -> {}",
        request.object_id,
        window.dusk.datetime(),
        window.dawn.datetime()
    );

    let solver = SkyPositionSolver::new(location, target.ra_deg, target.dec_deg);
    let start = VisibilityLocator::new(&solver, min_altitude_deg).locate(
        window.dusk,
        window.dawn,
        config,
    )?;

    let field_of_view = field_of_view::compute(&camera);
    let exposure = exposure::estimate(
        camera.aperture,
        camera.sensor_width_mm,
        camera.pixels_width,
        camera.focal_length_mm,
        request.shoot_interval_seconds,
    );
    let rotated_frame = rotate_frame(
        &field_of_view,
        camera.mount_angle_deg,
        target.position_angle_deg,
    );

    let outcome = shot_count::simulate(
        &start,
        &solver,
        &rotated_frame,
        &target,
        exposure.quantized_exposure_seconds,
        exposure.shoot_interval_seconds,
        min_altitude_deg,
        config,
    )?;

    Ok(assemble_report(
        request,
        &target,
        camera,
        field_of_view,
        rotated_frame,
        exposure,
        outcome,
        start.epoch,
        start.position,
        min_altitude_deg,
    ))
}

fn camera_from_request(request: &SessionRequest) -> CameraGeometry {
    CameraGeometry {
        sensor_width_mm: request.sensor_width_mm,
        sensor_height_mm: request.sensor_height_mm,
        pixels_width: request.pixels_width,
        pixels_height: request.pixels_height,
        focal_length_mm: request.focal_length_mm,
        aperture: request.aperture,
        mount_angle_deg: request.camera_mount_angle_deg,
    }
}

#[allow(clippy::too_many_arguments)]
fn assemble_report(
    request: &SessionRequest,
    target: &CelestialTarget,
    camera: CameraGeometry,
    field_of_view: FieldOfView,
    rotated_frame: RotatedFrame,
    exposure: ExposurePlan,
    outcome: ShotCountOutcome,
    visibility_start: ObservationEpoch,
    start_position: HorizontalPosition,
    min_altitude_deg: f64,
) -> SessionReport {
    let total_minutes = (outcome.total_duration_seconds / 60.0).floor() as u32;
    let total_seconds_remainder = outcome.total_duration_seconds - total_minutes as f64 * 60.0;

    // Sizes are guaranteed present: the simulator fails otherwise.
    let (size_major_arcmin, size_minor_arcmin) =
        target.axis_sizes_arcmin().unwrap_or((0.0, 0.0));

    SessionReport {
        object_id: request.object_id.clone(),
        object_name: target.name.clone(),
        size_major_arcmin,
        size_minor_arcmin,
        position_angle_deg: target.position_angle_deg,
        field_of_view,
        rotated_frame,
        exposure,
        shot_count: outcome.shot_count,
        total_duration_seconds: outcome.total_duration_seconds,
        total_minutes,
        total_seconds_remainder,
        observation_summary: format_observation_summary(target, &start_position, &visibility_start),
        visibility_start,
        start_position,
        min_altitude_deg,
        camera,
    }
}

/// Format the "visible at" summary shown to the user.
fn format_observation_summary(
    target: &CelestialTarget,
    position: &HorizontalPosition,
    epoch: &ObservationEpoch,
) -> String {
    format!(
        "RA: {:.2} Dec: {:.2} | Alt: {:.2} Az: {:.2} | Visible at: {}Z",
        target.ra_deg,
        target.dec_deg,
        position.altitude_deg,
        position.azimuth_deg,
        epoch.datetime().format("%Y-%m-%dT%H:%M")
    )
}
