//! Kinematic body and motion intents.
//!
//! Locomotion and animation playback live outside the core. The core moves a
//! simple kinematic [`Body`] with bounded linear and angular speed and
//! publishes a [`MotionIntent`] describing where it wants to go and face.

use crate::geometry::{Vec2, heading_to, move_towards_angle};

/// Pose of a guard on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    pub position: Vec2,
    /// Degrees, counter-clockwise from +X.
    pub heading: f32,
}

/// Per-step limits for [`Body::step_towards`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveLimits {
    /// Units per second.
    pub speed: f32,
    /// Degrees per second.
    pub turn_rate: f32,
    /// Stop closing in once within this distance.
    pub stop_distance: f32,
}

impl Body {
    pub const fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Turns toward `heading` by at most `turn_rate * dt` degrees.
    pub fn turn_towards(&mut self, heading: f32, turn_rate: f32, dt: f32) {
        self.heading = move_towards_angle(self.heading, heading, turn_rate * dt);
    }

    /// Moves toward `target` for one step.
    ///
    /// The body turns toward the target at the bounded turn rate and moves at
    /// most `speed * dt` without overshooting. Inside `stop_distance` it stays
    /// put but keeps facing the target. Returns `true` once within
    /// `stop_distance`.
    pub fn step_towards(&mut self, target: Vec2, limits: MoveLimits, dt: f32) -> bool {
        let distance = self.position.distance(target);
        if distance > f32::EPSILON {
            self.turn_towards(heading_to(self.position, target), limits.turn_rate, dt);
        }
        if distance <= limits.stop_distance {
            return true;
        }

        let remaining = distance - limits.stop_distance;
        let travel = (limits.speed * dt).min(remaining);
        if let Some(direction) = (target - self.position).normalized() {
            self.position += direction * travel;
        }
        travel >= remaining
    }
}

/// What the guard wants from the locomotion collaborator this tick.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionIntent {
    pub target_position: Option<Vec2>,
    pub target_heading: Option<f32>,
}

impl MotionIntent {
    pub const IDLE: Self = Self {
        target_position: None,
        target_heading: None,
    };

    pub const fn move_to(position: Vec2) -> Self {
        Self {
            target_position: Some(position),
            target_heading: None,
        }
    }

    pub const fn face(heading: f32) -> Self {
        Self {
            target_position: None,
            target_heading: Some(heading),
        }
    }

    #[must_use]
    pub const fn facing(mut self, heading: f32) -> Self {
        self.target_heading = Some(heading);
        self
    }
}
