//! Error types for the session planning engine.
//!
//! Every stage of the pipeline returns either a value or one of these kinds.
//! No stage recovers from another stage's failure: errors propagate unchanged
//! to the caller, which owns user-facing presentation.

use crate::models::time::TimeScale;

/// Result type for planning operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Error taxonomy for the planning pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Catalog lookup returned nothing for the given identifier.
    #[error("object '{0}' not found in catalog")]
    ObjectNotFound(String),

    /// Target exists but lacks the angular size data required for the
    /// frame-margin computation.
    #[error("size data is missing for '{0}'")]
    SizeDataMissing(String),

    /// Target never crossed the minimum-altitude threshold within the bounded
    /// search window.
    #[error("target is not visible: {0}")]
    NotVisible(String),

    /// An epoch was supplied or derived on an inconsistent time scale.
    /// Fatal precondition failure, never retried.
    #[error("epoch is on the {found} time scale, expected {expected}")]
    TimeScaleViolation {
        expected: TimeScale,
        found: TimeScale,
    },

    /// Both axis drift rates evaluated to zero; shot-count convergence is
    /// ill-defined.
    #[error("drift rate is zero on both axes; shot count does not converge")]
    DegenerateDrift,

    /// Non-positive focal length, sensor dimension, pixel count or other
    /// invalid camera/request parameter.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}
