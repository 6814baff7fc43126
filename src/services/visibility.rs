//! Visibility search: when does the target rise above the minimum altitude?
//!
//! An explicit two-state machine stepping forward in fixed increments from a
//! start epoch. Both a hard end epoch (astronomical dawn) and a step cap bound
//! the search; exhaustion is a typed `NotVisible` failure, never an infinite
//! loop.

use log::debug;

use crate::config::PlannerConfig;
use crate::error::{PlanError, PlanResult};
use crate::models::ObservationEpoch;
use crate::services::sky_position::{SkyPositionSolver, SkyTrack};

/// Search progress.
#[derive(Debug, Clone, Copy)]
enum SearchState {
    Searching,
    Found(SkyTrack),
}

/// Bounded time-stepping search for the first qualifying sky position.
#[derive(Debug)]
pub struct VisibilityLocator<'a> {
    solver: &'a SkyPositionSolver,
    min_altitude_deg: f64,
}

impl<'a> VisibilityLocator<'a> {
    pub fn new(solver: &'a SkyPositionSolver, min_altitude_deg: f64) -> Self {
        Self {
            solver,
            min_altitude_deg,
        }
    }

    /// Find the first epoch in `[start, end)` where the target reaches the
    /// minimum altitude, stepping by `config.search_step_seconds`.
    pub fn locate(
        &self,
        start: ObservationEpoch,
        end: ObservationEpoch,
        config: &PlannerConfig,
    ) -> PlanResult<SkyTrack> {
        start.ensure_utc()?;
        end.ensure_utc()?;

        let mut state = SearchState::Searching;
        let mut cursor = start;
        let mut steps = 0usize;

        loop {
            match state {
                SearchState::Searching => {
                    if cursor.datetime() >= end.datetime() || steps >= config.max_search_steps {
                        debug!(
                            "visibility search exhausted after {} steps at {}",
                            steps,
                            cursor.datetime()
                        );
                        return Err(PlanError::NotVisible(format!(
                            "altitude never reaches {} degrees before astronomical dawn",
                            self.min_altitude_deg
                        )));
                    }

                    let track = self.solver.track_at(&cursor)?;
                    if track.position.altitude_deg >= self.min_altitude_deg {
                        state = SearchState::Found(track);
                    } else {
                        cursor = cursor.advance_seconds(config.search_step_seconds);
                        steps += 1;
                    }
                }
                SearchState::Found(track) => return Ok(track),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GeographicLocation;
    use chrono::{TimeZone, Utc};

    fn greenwich() -> GeographicLocation {
        GeographicLocation::new(51.4769, 0.0, None).unwrap()
    }

    fn night_of_2024_01_15() -> (ObservationEpoch, ObservationEpoch) {
        (
            ObservationEpoch::utc(Utc.with_ymd_and_hms(2024, 1, 15, 18, 30, 0).unwrap()),
            ObservationEpoch::utc(Utc.with_ymd_and_hms(2024, 1, 16, 6, 30, 0).unwrap()),
        )
    }

    #[test]
    fn test_circumpolar_target_found_immediately() {
        // Polaris is always above 50 degrees from Greenwich.
        let solver = SkyPositionSolver::new(greenwich(), 37.954, 89.264);
        let locator = VisibilityLocator::new(&solver, 30.0);
        let (start, end) = night_of_2024_01_15();

        let track = locator.locate(start, end, &PlannerConfig::default()).unwrap();
        assert_eq!(track.epoch, start);
        assert!(track.position.altitude_deg >= 30.0);
    }

    #[test]
    fn test_southern_target_never_visible() {
        let solver = SkyPositionSolver::new(greenwich(), 100.0, -80.0);
        let locator = VisibilityLocator::new(&solver, 5.0);
        let (start, end) = night_of_2024_01_15();

        let result = locator.locate(start, end, &PlannerConfig::default());
        match result {
            Err(PlanError::NotVisible(reason)) => {
                assert!(reason.contains("5 degrees"), "reason: {}", reason);
            }
            other => panic!("expected NotVisible, got {:?}", other),
        }
    }

    #[test]
    fn test_rising_target_found_later_in_the_night() {
        // A target two hours east of the meridian at dusk rises during the
        // night; a high threshold forces the locator to step forward.
        let solver = SkyPositionSolver::new(greenwich(), 120.0, 20.0);
        let locator = VisibilityLocator::new(&solver, 40.0);
        let (start, end) = night_of_2024_01_15();

        let track = locator.locate(start, end, &PlannerConfig::default()).unwrap();
        assert!(track.epoch.datetime() > start.datetime());
        assert!(track.position.altitude_deg >= 40.0);
        // The first qualifying minute, so one step earlier must not qualify.
        let before = track.epoch.advance_seconds(-60.0);
        let earlier = solver.position_at(&before).unwrap();
        assert!(earlier.altitude_deg < 40.0);
    }

    #[test]
    fn test_step_cap_bounds_the_search() {
        let solver = SkyPositionSolver::new(greenwich(), 100.0, -80.0);
        let locator = VisibilityLocator::new(&solver, 5.0);
        let start = ObservationEpoch::utc(Utc.with_ymd_and_hms(2024, 1, 15, 18, 0, 0).unwrap());
        // A far-away end bound: only the step cap terminates the search.
        let end = ObservationEpoch::utc(Utc.with_ymd_and_hms(2034, 1, 15, 18, 0, 0).unwrap());
        let config = PlannerConfig {
            max_search_steps: 10,
            ..PlannerConfig::default()
        };
        assert!(matches!(
            locator.locate(start, end, &config),
            Err(PlanError::NotVisible(_))
        ));
    }
}
