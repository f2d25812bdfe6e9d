//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, allowing nodes to read and mutate the owning agent's
//! blackboard without holding references to it.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes read
    ///   agent state from it and write their intents back into it.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior must be resumed next tick
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Clears any in-flight progress held by this node and its children.
    ///
    /// Must be idempotent. Stateless leaves keep the default no-op.
    fn reset(&mut self) {}
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Contexts that expose the duration of the current frame.
///
/// Time-based nodes such as [`crate::Wait`] require it.
pub trait FrameTime {
    /// Seconds elapsed since the previous tick.
    fn delta_seconds(&self) -> f32;
}
