//! Perception: turning per-frame visibility checks into stable detection.
//!
//! - [`vision`] answers "which candidate can I see right now?" for a view cone
//! - [`integrator`] accumulates those answers over time with asymmetric
//!   hysteresis and reports edge-triggered detection events

pub mod integrator;
pub mod vision;

pub use integrator::{PerceptionEvent, PerceptionIntegrator, TrackedTarget};
pub use vision::{
    Candidate, Obstruction, Sighting, TargetId, Unobstructed, ViewCone, VisibilityQuery,
    nearest_visible,
};
