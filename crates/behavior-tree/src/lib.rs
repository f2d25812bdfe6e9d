//! Lightweight resumable behavior tree library for frame-driven agents.
//!
//! This library provides a minimal behavior tree implementation for agents
//! that are ticked once per control-loop step:
//!
//! - **Running state**: Multi-frame work yields and resumes on the next tick
//! - **Resumable composites**: Selectors and sequences keep a cursor on the
//!   child that returned `Running`
//! - **Explicit reset**: [`Behavior::reset`] cascades and clears all cursors
//!   and timers without rebuilding the tree
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`]
//! - Leaf nodes: [`Action`], [`Condition`], [`Wait`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, FrameTime};
pub use builder::BehaviorTree;
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use leaf::{Action, Condition, Wait};
pub use status::Status;
