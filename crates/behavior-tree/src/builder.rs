//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{Action, Behavior, Condition, FrameTime, Inverter, Selector, Sequence, Status, Wait};

/// Type alias for a boxed behavior tree node.
pub type BehaviorTree<C> = Box<dyn Behavior<C>>;

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<BehaviorTree<C>>) -> BehaviorTree<C> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<BehaviorTree<C>>) -> BehaviorTree<C> {
    Box::new(Selector::new(children))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: BehaviorTree<C>) -> BehaviorTree<C> {
    Box::new(Inverter::new(child))
}

/// Creates an action leaf.
#[inline]
pub fn action<C: 'static, F>(label: &'static str, decide: F) -> BehaviorTree<C>
where
    F: Fn(&mut C) -> Status + Send + Sync + 'static,
{
    Box::new(Action::new(label, decide))
}

/// Creates a condition leaf.
#[inline]
pub fn condition<C: 'static, F>(label: &'static str, predicate: F) -> BehaviorTree<C>
where
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Box::new(Condition::new(label, predicate))
}

/// Creates a wait leaf of `seconds` duration.
#[inline]
pub fn wait<C: FrameTime + 'static>(seconds: f32) -> BehaviorTree<C> {
    Box::new(Wait::new(seconds))
}
