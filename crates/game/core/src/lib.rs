//! Deterministic guard AI domain types shared by the runtime and tools.
//!
//! `stealth-core` holds everything about a guard that is pure data or pure
//! math: configuration, planar geometry, the perception integrator and view
//! cone query, patrol routes and their step-wise walker, the kinematic body
//! and the search scan pattern. Nothing here decides *what* to do; the
//! runtime's behavior tree does that by calling into these types.
pub mod config;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod patrol;
pub mod perception;
pub mod search;
pub mod state;

pub use config::GuardConfig;
pub use error::{ConfigError, RouteError};
pub use geometry::{
    Vec2, angle_between, delta_angle, heading_to, move_towards_angle, normalize_degrees,
};
pub use motion::{Body, MotionIntent, MoveLimits};
pub use patrol::{
    PatrolMode, PatrolRoute, PatrolWalker, WalkerPhase, WalkerStep, Waypoint, WaypointTrigger,
};
pub use perception::{
    Candidate, Obstruction, PerceptionEvent, PerceptionIntegrator, Sighting, TargetId,
    TrackedTarget, Unobstructed, ViewCone, VisibilityQuery, nearest_visible,
};
pub use search::{ScanPattern, SearchScan};
pub use state::GuardState;
