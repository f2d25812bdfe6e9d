//! Runtime for stealth guards.
//!
//! This crate wires the behavior tree framework and the `stealth-core`
//! domain types into a ready-to-tick guard. Hosts embed a
//! [`GuardController`] per guard, call [`GuardController::tick`] once per
//! frame with a visibility source, and read back a [`TickReport`] and any
//! [`GuardEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`guard`] hosts the blackboard, leaves, tree assembly and controller
//! - [`events`] defines the notifications hosts react to
//! - [`error`] reports rejected configuration and routes
pub mod error;
pub mod events;
pub mod guard;

pub use error::{Result, RuntimeError};
pub use events::GuardEvent;
pub use guard::{GuardContext, GuardController, TickReport, build_guard_tree};
