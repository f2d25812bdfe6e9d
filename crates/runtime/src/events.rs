//! Notifications produced by a guard for the embedding host.
//!
//! Events accumulate in the controller's outbox while it ticks and are
//! collected with [`GuardController::drain_events`](crate::GuardController::drain_events).
//! Hosts route them to audio, dialogue, animation and game-flow systems.

use serde::{Deserialize, Serialize};
use stealth_core::{GuardState, TargetId, Vec2};

/// Something a host may want to react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuardEvent {
    /// The guard's state machine moved.
    StateChanged {
        previous: GuardState,
        current: GuardState,
    },

    /// Detection progress reached 1.
    TargetDetected { target: TargetId },

    /// Detection progress decayed back to 0 after a full detection.
    TargetLost { target: Option<TargetId> },

    /// The guard entered the terminal alert state. Emitted once.
    AlertRaised {
        /// Where the target was last seen, or the guard's own position if
        /// it never saw one.
        position: Vec2,
    },

    /// The patrol walker arrived at waypoint `index`.
    WaypointReached { index: usize },

    /// A waypoint asked the animation layer to set a named flag.
    AnimationTrigger { name: String, value: bool },
}

impl GuardEvent {
    /// Short name of the variant, matching the serialized `kind` tag.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StateChanged { .. } => "state_changed",
            Self::TargetDetected { .. } => "target_detected",
            Self::TargetLost { .. } => "target_lost",
            Self::AlertRaised { .. } => "alert_raised",
            Self::WaypointReached { .. } => "waypoint_reached",
            Self::AnimationTrigger { .. } => "animation_trigger",
        }
    }
}
