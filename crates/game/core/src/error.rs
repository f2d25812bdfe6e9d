//! Validation errors for guard configuration and patrol routes.
//!
//! The decision core never fails while ticking. Everything that can be
//! wrong is checked once, before a controller is activated, and reported
//! through the types in this module.

/// Rejected [`GuardConfig`](crate::GuardConfig) field.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A duration, speed or distance that must be strictly positive.
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    /// A field that may be zero but not negative.
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// The view cone half-angle must lie in `(0, 180]` degrees.
    #[error("view half-angle must be within (0, 180] degrees, got {0}")]
    HalfAngleOutOfRange(f32),
}

impl ConfigError {
    /// Static identifier for this error variant, useful in logs and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotPositive { .. } => "config.not_positive",
            Self::Negative { .. } => "config.negative",
            Self::HalfAngleOutOfRange(_) => "config.half_angle",
        }
    }
}

/// Rejected [`PatrolRoute`](crate::PatrolRoute).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RouteError {
    #[error("patrol route has no waypoints")]
    Empty,

    #[error("waypoint {index} has invalid wait delay {delay}")]
    InvalidWaitDelay { index: usize, delay: f32 },

    #[error("waypoint {index} has a non-finite position")]
    NonFinitePosition { index: usize },
}

impl RouteError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "route.empty",
            Self::InvalidWaitDelay { .. } => "route.wait_delay",
            Self::NonFinitePosition { .. } => "route.position",
        }
    }
}

pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
