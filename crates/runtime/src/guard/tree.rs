//! Guard tree assembly.
//!
//! The guard runs one selector over four branches in fixed priority order:
//!
//! 1. [`alert_when_detected`]
//! 2. [`pursue_when_visible`]
//! 3. [`scan_while_searching`]
//! 4. [`patrol_fallback`]
//!
//! Branches follow the `action_when_condition()` naming convention. The
//! patrol branch fails to hand control to the search branch after a target
//! is lost, which leaves one tick where no branch acts.

use behavior_tree::BehaviorTree;
use behavior_tree::builder::{action, condition, selector, sequence};

use crate::guard::GuardContext;
use crate::guard::nodes::{
    enter_alert, is_detected, is_searching, is_target_visible, patrol, pursue, scan,
};

/// Go to the terminal alert once detection is latched.
pub fn alert_when_detected() -> BehaviorTree<GuardContext> {
    sequence(vec![
        condition("is_detected", is_detected),
        action("enter_alert", enter_alert),
    ])
}

/// Chase while the target is in sight.
pub fn pursue_when_visible() -> BehaviorTree<GuardContext> {
    sequence(vec![
        condition("is_target_visible", is_target_visible),
        action("pursue", pursue),
    ])
}

/// Sweep the view after the patrol branch handed off.
pub fn scan_while_searching() -> BehaviorTree<GuardContext> {
    sequence(vec![
        condition("is_searching", is_searching),
        action("scan", scan),
    ])
}

/// Walk the route, or hand off to search when a target was just lost.
pub fn patrol_fallback() -> BehaviorTree<GuardContext> {
    action("patrol", patrol)
}

/// Builds the complete guard tree.
pub fn build_guard_tree() -> BehaviorTree<GuardContext> {
    selector(vec![
        alert_when_detected(),
        pursue_when_visible(),
        scan_while_searching(),
        patrol_fallback(),
    ])
}
