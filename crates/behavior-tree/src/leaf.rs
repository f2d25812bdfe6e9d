//! Leaf behavior nodes.
//!
//! Leaves do the actual work of a tree. [`Action`] and [`Condition`] wrap
//! function values supplied when the tree is built, so every side effect
//! lives in the context rather than in the node. [`Wait`] is the one leaf
//! that owns state: its timer.

use core::fmt;

use crate::{Behavior, FrameTime, Status};

type DecisionFn<C> = Box<dyn Fn(&mut C) -> Status + Send + Sync>;
type PredicateFn<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;

/// Runs a decision function and returns its status verbatim.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Behavior, Status};
///
/// let mut count_up = Action::new("count_up", |n: &mut u32| {
///     *n += 1;
///     Status::Success
/// });
///
/// let mut n = 0;
/// assert_eq!(count_up.tick(&mut n), Status::Success);
/// assert_eq!(n, 1);
/// ```
pub struct Action<C> {
    label: &'static str,
    decide: DecisionFn<C>,
}

impl<C> Action<C> {
    /// Creates an action from a label (used in debug output) and a decision function.
    pub fn new<F>(label: &'static str, decide: F) -> Self
    where
        F: Fn(&mut C) -> Status + Send + Sync + 'static,
    {
        Self {
            label,
            decide: Box::new(decide),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<C> Behavior<C> for Action<C> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (self.decide)(ctx)
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Action").field(&self.label).finish()
    }
}

/// Evaluates a predicate against the context.
///
/// Returns `Success` when the predicate holds and `Failure` otherwise.
/// A condition never returns `Running`.
pub struct Condition<C> {
    label: &'static str,
    predicate: PredicateFn<C>,
}

impl<C> Condition<C> {
    /// Creates a condition from a label and a predicate.
    pub fn new<F>(label: &'static str, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self {
            label,
            predicate: Box::new(predicate),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<C> Behavior<C> for Condition<C> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        if (self.predicate)(ctx) {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl<C> fmt::Debug for Condition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Condition").field(&self.label).finish()
    }
}

/// Returns `Running` until `duration` seconds of frame time have elapsed.
///
/// # Semantics
///
/// - The first tick after construction or [`reset`](Behavior::reset) starts
///   the timer at zero
/// - Every tick, including the first, adds the context's frame time
/// - Returns `Running` while elapsed `< duration` and `Success` once
///   elapsed `>= duration`
///
/// Once complete the wait keeps returning `Success` until it is reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Wait {
    duration: f32,
    elapsed: f32,
    started: bool,
}

impl Wait {
    /// Creates a wait of `duration` seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            started: false,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Seconds accumulated in the current interval.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Clears the started flag and elapsed time; the next tick starts over.
    pub fn reset(&mut self) {
        self.started = false;
        self.elapsed = 0.0;
    }
}

impl<C: FrameTime> Behavior<C> for Wait {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if !self.started {
            self.started = true;
            self.elapsed = 0.0;
        }
        self.elapsed += ctx.delta_seconds();

        if self.elapsed >= self.duration {
            Status::Success
        } else {
            Status::Running
        }
    }

    fn reset(&mut self) {
        Wait::reset(self);
    }
}
