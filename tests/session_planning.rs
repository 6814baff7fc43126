//! End-to-end session planning against the in-memory catalog.

use astroshot::api::SessionRequest;
use astroshot::catalog::InMemoryCatalog;
use astroshot::config::PlannerConfig;
use astroshot::models::CelestialTarget;
use astroshot::services::plan_session;
use astroshot::PlanError;
use chrono::NaiveDate;

fn seeded_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    catalog.insert(
        "M31",
        CelestialTarget {
            ra_deg: 10.6847,
            dec_deg: 41.269,
            major_axis_arcmin: Some(199.53),
            minor_axis_arcmin: Some(70.79),
            position_angle_deg: 35.0,
            name: "NGC0224 (Andromeda Galaxy)".to_string(),
        },
    );
    catalog.insert(
        "M97",
        CelestialTarget {
            ra_deg: 168.699,
            dec_deg: 55.019,
            major_axis_arcmin: None,
            minor_axis_arcmin: None,
            position_angle_deg: 0.0,
            name: "NGC3587 (Owl Nebula)".to_string(),
        },
    );
    catalog
}

fn madrid_request(object_id: &str) -> SessionRequest {
    SessionRequest {
        object_id: object_id.to_string(),
        latitude: 40.4168,
        longitude: -3.7038,
        elevation_m: Some(667.0),
        sensor_width_mm: 36.0,
        sensor_height_mm: 24.0,
        pixels_width: 6000,
        pixels_height: 4000,
        focal_length_mm: 50.0,
        aperture: 2.8,
        shoot_interval_seconds: 5.0,
        camera_mount_angle_deg: 0.0,
        observation_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        min_altitude_deg: Some(10.0),
    }
}

#[test]
fn test_m31_winter_session_plan() {
    let catalog = seeded_catalog();
    let report = plan_session(&madrid_request("M31"), &catalog, &PlannerConfig::default())
        .expect("M31 is observable from Madrid on a January night");

    assert_eq!(report.object_name, "NGC0224 (Andromeda Galaxy)");
    assert!(report.shot_count > 0);

    // Full-frame sensor at 50 mm
    assert!((report.field_of_view.horizontal_arcmin / 60.0 - 39.6).abs() < 0.05);
    assert!((report.field_of_view.vertical_arcmin / 60.0 - 27.0).abs() < 0.05);

    // f/2.8, 6 um pitch, 50 mm: raw 5.56 s quantizes down to 5 s
    assert!((report.exposure.raw_exposure_seconds - 5.56).abs() < 1e-9);
    assert_eq!(report.exposure.quantized_exposure_seconds, 5.0);
    assert!(report.exposure.quantized_exposure_seconds <= report.exposure.raw_exposure_seconds);

    // Duration invariant and decomposition
    let per_shot = report.exposure.quantized_exposure_seconds + 5.0;
    assert!(
        (report.total_duration_seconds - report.shot_count as f64 * per_shot).abs() < 1e-9
    );
    assert!(
        (report.total_minutes as f64 * 60.0 + report.total_seconds_remainder
            - report.total_duration_seconds)
            .abs()
            < 1e-9
    );

    // Visibility starts during the requested night, above the threshold
    assert!(report.start_position.altitude_deg >= 10.0);
    let start = report.visibility_start.datetime();
    assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert!(report.observation_summary.contains("Visible at: 2024-01-15"));
}

#[test]
fn test_unknown_object_is_not_found() {
    let catalog = seeded_catalog();
    let result = plan_session(
        &madrid_request("NGC9999"),
        &catalog,
        &PlannerConfig::default(),
    );
    assert_eq!(result.unwrap_err(), PlanError::ObjectNotFound("NGC9999".to_string()));
}

#[test]
fn test_missing_size_data_never_yields_partial_result() {
    let catalog = seeded_catalog();
    let result = plan_session(&madrid_request("M97"), &catalog, &PlannerConfig::default());
    assert!(matches!(result, Err(PlanError::SizeDataMissing(name)) if name.contains("Owl")));
}

#[test]
fn test_polar_day_reports_not_visible() {
    let catalog = seeded_catalog();
    let mut request = madrid_request("M31");
    request.latitude = 78.22;
    request.longitude = 15.65;
    request.observation_date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let result = plan_session(&request, &catalog, &PlannerConfig::default());
    assert!(matches!(result, Err(PlanError::NotVisible(_))));
}

#[test]
fn test_invalid_focal_length_is_rejected_before_searching() {
    let catalog = seeded_catalog();
    let mut request = madrid_request("M31");
    request.focal_length_mm = 0.0;
    let result = plan_session(&request, &catalog, &PlannerConfig::default());
    assert!(matches!(result, Err(PlanError::InvalidGeometry(_))));
}

#[test]
fn test_zero_shoot_interval_is_rejected() {
    let catalog = seeded_catalog();
    let mut request = madrid_request("M31");
    request.shoot_interval_seconds = 0.0;
    let result = plan_session(&request, &catalog, &PlannerConfig::default());
    assert!(matches!(result, Err(PlanError::InvalidGeometry(_))));
}

#[test]
fn test_portrait_mount_swaps_frame_axes() {
    let catalog = seeded_catalog();
    let landscape = plan_session(&madrid_request("M31"), &catalog, &PlannerConfig::default())
        .expect("landscape plan");

    let mut request = madrid_request("M31");
    request.camera_mount_angle_deg = 90.0;
    let portrait = plan_session(&request, &catalog, &PlannerConfig::default())
        .expect("portrait plan");

    assert_eq!(
        portrait.rotated_frame.horizontal_arcmin,
        landscape.rotated_frame.vertical_arcmin
    );
    assert_eq!(
        portrait.rotated_frame.vertical_arcmin,
        landscape.rotated_frame.horizontal_arcmin
    );
}

#[test]
fn test_stricter_threshold_delays_or_kills_visibility() {
    let catalog = seeded_catalog();
    let mut request = madrid_request("M31");
    request.min_altitude_deg = Some(89.9);
    let result = plan_session(&request, &catalog, &PlannerConfig::default());
    // M31 culminates near but not at the zenith from Madrid.
    assert!(matches!(result, Err(PlanError::NotVisible(_))));
}
