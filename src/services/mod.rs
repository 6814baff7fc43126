//! Planning pipeline stages.
//!
//! Each stage is a pure function over immutable inputs; the orchestrator in
//! [`session`] wires them together in data-flow order.

pub mod astronomical_night;
pub mod exposure;
pub mod field_of_view;
pub mod frame_rotation;
pub mod session;
pub mod shot_count;
pub mod sky_position;
pub mod visibility;

pub use session::plan_session;
