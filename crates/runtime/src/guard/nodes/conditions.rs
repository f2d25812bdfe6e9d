//! Condition nodes for the guard tree.
//!
//! Conditions check the blackboard and never change it. A condition that
//! needs a sighting defaults to `false` when there is none.

use stealth_core::GuardState;

use crate::guard::GuardContext;

/// Perception has latched full detection.
pub fn is_detected(ctx: &GuardContext) -> bool {
    ctx.perception.is_detected()
}

/// This tick's visibility query found a target.
pub fn is_target_visible(ctx: &GuardContext) -> bool {
    ctx.sighting.is_some()
}

/// The patrol branch has handed control to the search scan.
pub fn is_searching(ctx: &GuardContext) -> bool {
    ctx.state == GuardState::Searching
}
