//! Waypoints and patrol routes supplied by level data.

use crate::error::RouteError;
use crate::geometry::Vec2;

/// One stop on a patrol route.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub position: Vec2,
    /// Seconds to hold after arriving.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wait_delay: f32,
    /// Sweep the view around while holding here.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_observation: bool,
    /// Animation trigger fired on arrival. Empty means none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub trigger_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub trigger_value: bool,
}

impl Waypoint {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_wait(mut self, wait_delay: f32) -> Self {
        self.wait_delay = wait_delay;
        self
    }

    #[must_use]
    pub fn observation(mut self) -> Self {
        self.is_observation = true;
        self
    }

    #[must_use]
    pub fn with_trigger(mut self, name: impl Into<String>, value: bool) -> Self {
        self.trigger_name = name.into();
        self.trigger_value = value;
        self
    }

    /// The arrival trigger, if one is configured.
    pub fn trigger(&self) -> Option<WaypointTrigger> {
        if self.trigger_name.is_empty() {
            None
        } else {
            Some(WaypointTrigger {
                name: self.trigger_name.clone(),
                value: self.trigger_value,
            })
        }
    }
}

/// Animation trigger requested when a waypoint is reached.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointTrigger {
    pub name: String,
    pub value: bool,
}

/// How the walker continues after the last waypoint.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PatrolMode {
    /// Wrap around to the first waypoint.
    #[default]
    Loop,
    /// Walk back along the route.
    PingPong,
}

/// Ordered waypoints a guard walks. Read-only to the decision core.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolRoute {
    pub waypoints: Vec<Waypoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: PatrolMode,
}

impl PatrolRoute {
    /// Builds a looping route, validating every waypoint.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, RouteError> {
        let route = Self {
            waypoints,
            mode: PatrolMode::Loop,
        };
        route.validate()?;
        Ok(route)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: PatrolMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), RouteError> {
        if self.waypoints.is_empty() {
            return Err(RouteError::Empty);
        }
        for (index, waypoint) in self.waypoints.iter().enumerate() {
            if !waypoint.position.is_finite() {
                return Err(RouteError::NonFinitePosition { index });
            }
            if !(waypoint.wait_delay.is_finite() && waypoint.wait_delay >= 0.0) {
                return Err(RouteError::InvalidWaitDelay {
                    index,
                    delay: waypoint.wait_delay,
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Index after `index`, given the direction of travel.
    ///
    /// Returns the next index and whether travel is now forward.
    pub fn next_index(&self, index: usize, forward: bool) -> (usize, bool) {
        let len = self.waypoints.len();
        if len <= 1 {
            return (0, true);
        }
        match self.mode {
            PatrolMode::Loop => ((index + 1) % len, true),
            PatrolMode::PingPong => match (forward, index) {
                (true, i) if i + 1 < len => (i + 1, true),
                (true, i) => (i - 1, false),
                (false, 0) => (1, true),
                (false, i) => (i - 1, false),
            },
        }
    }
}
