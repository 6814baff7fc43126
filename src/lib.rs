//! # astroshot
//!
//! Astrophotography session planning engine.
//!
//! Given a celestial target, an observer's location, a camera/lens
//! configuration and a candidate observation date, the engine determines when
//! the target becomes observable above a minimum elevation, the camera's
//! angular field of view and per-pixel resolution, the longest single
//! exposure that avoids star trailing, and how many such exposures fit before
//! apparent sky motion carries the target outside the usable frame.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: request/response types exchanged with callers
//! - [`models`]: core value objects (targets, camera geometry, epochs)
//! - [`catalog`]: injected read-only catalog and camera-directory lookups
//! - [`services`]: the pipeline stages and the `plan_session` orchestrator
//! - [`config`]: tuning knobs for the search and simulation loops
//!
//! The engine is single-threaded and purely synchronous: every stage is a
//! deterministic function of its inputs, and independent sessions may be
//! planned concurrently without coordination as long as the injected lookups
//! are safe for concurrent reads.
//!
//! ## Example
//!
//! ```no_run
//! use astroshot::api::SessionRequest;
//! use astroshot::catalog::InMemoryCatalog;
//! use astroshot::config::PlannerConfig;
//! use astroshot::services::plan_session;
//!
//! # fn run(request: SessionRequest, catalog: InMemoryCatalog) -> anyhow::Result<()> {
//! let report = plan_session(&request, &catalog, &PlannerConfig::default())?;
//! println!(
//!     "{}: {} x {:.0}s ({} min session)",
//!     report.object_name,
//!     report.shot_count,
//!     report.exposure.quantized_exposure_seconds,
//!     report.total_minutes,
//! );
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{PlanError, PlanResult};
