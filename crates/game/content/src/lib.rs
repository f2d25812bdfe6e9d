//! Data-driven guard content and loaders.
//!
//! This crate reads level data that configures guards:
//! - Guard tuning (perception timings, speeds, scan) via TOML
//! - Patrol routes (waypoints, triggers, traversal mode) via RON
//!
//! Content is handed to the runtime when a guard controller is constructed
//! and is never mutated by the decision core.
//!
//! All loaders use stealth-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RouteLoader};
