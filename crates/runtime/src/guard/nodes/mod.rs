//! Leaf decision functions for the guard tree.
//!
//! Conditions only read the [`GuardContext`](crate::guard::GuardContext);
//! actions mutate it and report how the tick went. Both are plain functions
//! wrapped into `Condition` and `Action` leaves by [`crate::guard::tree`].

pub mod actions;
pub mod conditions;

pub use actions::{enter_alert, patrol, pursue, scan};
pub use conditions::{is_detected, is_searching, is_target_visible};
