//! Core value objects shared across the planning pipeline.

pub mod camera;
pub mod target;
pub mod time;

pub use camera::CameraGeometry;
pub use target::CelestialTarget;
pub use time::{ObservationEpoch, TimeScale};
