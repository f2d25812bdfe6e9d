//! Guard decision and motion controller.
//!
//! - [`context`] holds the per-guard blackboard
//! - [`nodes`] provides the condition and action leaves
//! - [`tree`] assembles the four-branch guard tree
//! - [`controller`] drives perception and the tree once per tick

pub mod context;
pub mod controller;
pub mod nodes;
pub mod tree;

pub use context::GuardContext;
pub use controller::{GuardController, TickReport};
pub use tree::build_guard_tree;
