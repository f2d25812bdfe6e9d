use crate::error::{ConfigError, require_non_negative, require_positive};

/// Tunable parameters for one guard.
///
/// Angles are in degrees, times in seconds, distances in world units and
/// speeds in units (or degrees) per second.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuardConfig {
    /// Maximum distance at which a target can be seen.
    pub view_distance: f32,
    /// Half of the field-of-view cone.
    pub view_half_angle: f32,
    /// Seconds of continuous visibility needed to go from 0 to full detection.
    pub time_to_detect: f32,
    /// Seconds without visibility needed to decay from full detection to 0.
    pub time_to_lose: f32,
    /// Total sweep of the search scan (peak to peak).
    pub scan_angle: f32,
    /// Angular speed of the search scan.
    pub scan_speed: f32,
    /// How long the guard scans after losing its target.
    pub search_duration: f32,
    pub patrol_speed: f32,
    pub chase_speed: f32,
    /// Maximum body turn rate.
    pub turn_rate: f32,
    /// Pursuit stops closing in once within this distance of the target.
    pub stop_distance: f32,
    /// A waypoint counts as reached within this distance.
    pub arrive_distance: f32,
}

impl GuardConfig {
    pub const DEFAULT_VIEW_DISTANCE: f32 = 10.0;
    pub const DEFAULT_VIEW_HALF_ANGLE: f32 = 45.0;
    pub const DEFAULT_TIME_TO_DETECT: f32 = 2.0;
    pub const DEFAULT_TIME_TO_LOSE: f32 = 3.0;
    pub const DEFAULT_SCAN_ANGLE: f32 = 120.0;
    pub const DEFAULT_SCAN_SPEED: f32 = 90.0;
    pub const DEFAULT_SEARCH_DURATION: f32 = 4.0;
    pub const DEFAULT_PATROL_SPEED: f32 = 1.5;
    pub const DEFAULT_CHASE_SPEED: f32 = 3.5;
    pub const DEFAULT_TURN_RATE: f32 = 240.0;
    pub const DEFAULT_STOP_DISTANCE: f32 = 1.2;
    pub const DEFAULT_ARRIVE_DISTANCE: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            view_distance: Self::DEFAULT_VIEW_DISTANCE,
            view_half_angle: Self::DEFAULT_VIEW_HALF_ANGLE,
            time_to_detect: Self::DEFAULT_TIME_TO_DETECT,
            time_to_lose: Self::DEFAULT_TIME_TO_LOSE,
            scan_angle: Self::DEFAULT_SCAN_ANGLE,
            scan_speed: Self::DEFAULT_SCAN_SPEED,
            search_duration: Self::DEFAULT_SEARCH_DURATION,
            patrol_speed: Self::DEFAULT_PATROL_SPEED,
            chase_speed: Self::DEFAULT_CHASE_SPEED,
            turn_rate: Self::DEFAULT_TURN_RATE,
            stop_distance: Self::DEFAULT_STOP_DISTANCE,
            arrive_distance: Self::DEFAULT_ARRIVE_DISTANCE,
        }
    }

    /// Sets the asymmetric detection timings.
    #[must_use]
    pub fn with_detection(mut self, time_to_detect: f32, time_to_lose: f32) -> Self {
        self.time_to_detect = time_to_detect;
        self.time_to_lose = time_to_lose;
        self
    }

    /// Sets the search scan sweep, speed and duration.
    #[must_use]
    pub fn with_scan(mut self, scan_angle: f32, scan_speed: f32, search_duration: f32) -> Self {
        self.scan_angle = scan_angle;
        self.scan_speed = scan_speed;
        self.search_duration = search_duration;
        self
    }

    /// Sets the view cone.
    #[must_use]
    pub fn with_view(mut self, view_distance: f32, view_half_angle: f32) -> Self {
        self.view_distance = view_distance;
        self.view_half_angle = view_half_angle;
        self
    }

    /// Checks every field, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("view_distance", self.view_distance)?;
        if !(self.view_half_angle > 0.0 && self.view_half_angle <= 180.0) {
            return Err(ConfigError::HalfAngleOutOfRange(self.view_half_angle));
        }
        require_positive("time_to_detect", self.time_to_detect)?;
        require_positive("time_to_lose", self.time_to_lose)?;
        require_positive("scan_angle", self.scan_angle)?;
        require_positive("scan_speed", self.scan_speed)?;
        require_non_negative("search_duration", self.search_duration)?;
        require_positive("patrol_speed", self.patrol_speed)?;
        require_positive("chase_speed", self.chase_speed)?;
        require_positive("turn_rate", self.turn_rate)?;
        require_non_negative("stop_distance", self.stop_distance)?;
        require_non_negative("arrive_distance", self.arrive_distance)?;
        Ok(())
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GuardConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_detection_time() {
        let config = GuardConfig::default().with_detection(0.0, 1.0);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotPositive {
                field: "time_to_detect",
                value: 0.0
            }
        );
        assert_eq!(err.error_code(), "config.not_positive");
    }

    #[test]
    fn rejects_half_angle_out_of_range() {
        let config = GuardConfig::default().with_view(5.0, 200.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::HalfAngleOutOfRange(200.0))
        );
    }

    #[test]
    fn rejects_nan() {
        let config = GuardConfig {
            stop_distance: f32::NAN,
            ..GuardConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
