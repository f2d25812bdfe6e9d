//! Patrol routes and their step-wise traversal.

pub mod walker;
pub mod waypoint;

pub use walker::{PatrolWalker, WalkerPhase, WalkerStep};
pub use waypoint::{PatrolMode, PatrolRoute, Waypoint, WaypointTrigger};
