//! Error types surfaced when constructing a guard controller.
//!
//! Ticking never fails. Everything that can be wrong with a guard is
//! rejected up front by [`GuardController::new`](crate::GuardController::new).
use thiserror::Error;

use stealth_core::{ConfigError, RouteError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("invalid guard configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid patrol route: {0}")]
    Route(#[from] RouteError),

    #[error("guard body has a non-finite pose")]
    InvalidBody,
}

impl RuntimeError {
    /// Static identifier for this error, useful in logs and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.error_code(),
            Self::Route(err) => err.error_code(),
            Self::InvalidBody => "runtime.body",
        }
    }
}
