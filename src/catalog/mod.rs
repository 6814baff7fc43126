//! Injected lookups the engine consumes.
//!
//! The engine never holds global mutable catalog state: callers construct a
//! read-only repository and pass it in, owning its lifecycle. Implementations
//! must be safe for concurrent reads; the engine itself adds no coordination.

#[cfg(feature = "local-catalog")]
pub mod local;

#[cfg(feature = "local-catalog")]
pub use local::{InMemoryCameraDirectory, InMemoryCatalog};

use serde::{Deserialize, Serialize};

use crate::models::CelestialTarget;

/// Deep-sky object catalog.
pub trait DeepSkyCatalog: Send + Sync {
    /// Resolve one object identifier to its catalog entry.
    fn lookup(&self, object_id: &str) -> Option<CelestialTarget>;

    /// Identifiers matching a partial name, for autocomplete.
    fn search(&self, query: &str) -> Vec<String>;
}

/// One camera model's spec sheet, used to prefill camera geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    pub brand: String,
    pub model: String,
    pub sensor_width_mm: f64,
    pub sensor_height_mm: f64,
    pub pixels_width: u32,
    pub pixels_height: u32,
    /// Release year, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

/// Camera spec-sheet directory.
pub trait CameraDirectory: Send + Sync {
    /// Specs whose brand or model matches the query.
    fn search(&self, query: &str) -> Vec<CameraSpec>;
}
