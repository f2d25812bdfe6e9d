//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both composites remember which child returned `Running` and resume there
//! on the next tick. Earlier siblings are not re-evaluated until the
//! composite reaches a terminal status or is [`reset`](Behavior::reset).

use crate::{Behavior, Status};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from the cursor, left to right:
/// - If a child returns `Failure`, the sequence **stops immediately**, rewinds
///   its cursor and returns `Failure`
/// - If a child returns `Running`, the sequence keeps its cursor on that
///   child and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence rewinds and returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    cursor: usize,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self {
            children,
            cursor: 0,
        }
    }

    /// Index of the child that will be evaluated first on the next tick.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of children owned by this sequence.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; construction rejects empty child lists.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while self.cursor < self.children.len() {
            match self.children[self.cursor].tick(ctx) {
                Status::Success => self.cursor += 1, // Move to next child
                Status::Failure => {
                    self.cursor = 0;
                    return Status::Failure; // Short-circuit
                }
                Status::Running => return Status::Running, // Resume here next tick
            }
        }
        // All children succeeded
        self.cursor = 0;
        Status::Success
    }

    fn reset(&mut self) {
        self.cursor = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from the cursor, left to right:
/// - If a child returns `Success`, the selector **stops immediately**, rewinds
///   its cursor and returns `Success`
/// - If a child returns `Running`, the selector keeps its cursor on that
///   child and returns `Running`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector rewinds and returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    cursor: usize,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self {
            children,
            cursor: 0,
        }
    }

    /// Index of the child that will be evaluated first on the next tick.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of children owned by this selector.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; construction rejects empty child lists.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while self.cursor < self.children.len() {
            match self.children[self.cursor].tick(ctx) {
                Status::Success => {
                    self.cursor = 0;
                    return Status::Success; // Short-circuit
                }
                Status::Failure => self.cursor += 1, // Try next child
                Status::Running => return Status::Running,
            }
        }
        // All children failed
        self.cursor = 0;
        Status::Failure
    }

    fn reset(&mut self) {
        self.cursor = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FrameTime, Wait};

    struct TestContext {
        value: i32,
        visits: Vec<&'static str>,
        dt: f32,
    }

    impl TestContext {
        fn new() -> Self {
            Self {
                value: 0,
                visits: Vec::new(),
                dt: 0.0,
            }
        }
    }

    impl FrameTime for TestContext {
        fn delta_seconds(&self) -> f32 {
            self.dt
        }
    }

    /// Records its label and returns a fixed status.
    struct Fixed(&'static str, Status);
    impl Behavior<TestContext> for Fixed {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.visits.push(self.0);
            self.1
        }
    }

    /// Returns `Running` for the first `n` ticks, then `Success`.
    struct RunFor {
        label: &'static str,
        remaining: u32,
        initial: u32,
    }
    impl RunFor {
        fn new(label: &'static str, n: u32) -> Self {
            Self {
                label,
                remaining: n,
                initial: n,
            }
        }
    }
    impl Behavior<TestContext> for RunFor {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.visits.push(self.label);
            if self.remaining == 0 {
                Status::Success
            } else {
                self.remaining -= 1;
                Status::Running
            }
        }

        fn reset(&mut self) {
            self.remaining = self.initial;
        }
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            Status::Success
        }
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(vec![Box::new(Increment), Box::new(Increment)]);

        let mut ctx = TestContext::new();
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(Fixed("fail", Status::Failure)),
            Box::new(Increment), // Should not execute
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1); // Only first increment executed
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn selector_advances_through_failures_in_one_call() {
        let mut sel = Selector::new(vec![
            Box::new(Fixed("a", Status::Failure)),
            Box::new(Fixed("b", Status::Failure)),
            Box::new(Fixed("c", Status::Success)),
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.visits, vec!["a", "b", "c"]);
        assert_eq!(sel.cursor(), 0);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new(vec![
            Box::new(Fixed("a", Status::Failure)),
            Box::new(Fixed("b", Status::Failure)),
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
        assert_eq!(sel.cursor(), 0);
    }

    #[test]
    fn terminal_calls_visit_each_child_at_most_once() {
        let mut sel = Selector::new(vec![
            Box::new(Fixed("a", Status::Failure)),
            Box::new(Fixed("b", Status::Failure)),
            Box::new(Fixed("c", Status::Failure)),
            Box::new(Fixed("d", Status::Failure)),
        ]);
        let mut seq = Sequence::new(vec![
            Box::new(Fixed("e", Status::Success)),
            Box::new(Fixed("f", Status::Success)),
            Box::new(Fixed("g", Status::Success)),
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.visits.len(), 4);
        assert_eq!(sel.cursor(), 0);

        ctx.visits.clear();
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.visits.len(), 3);
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn selector_resumes_at_running_child() {
        let mut sel = Selector::new(vec![
            Box::new(Fixed("first", Status::Failure)),
            Box::new(RunFor::new("busy", 2)),
            Box::new(Fixed("last", Status::Success)),
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(sel.cursor(), 1);
        assert_eq!(ctx.visits, vec!["first", "busy"]);

        ctx.visits.clear();
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.visits, vec!["busy"]); // "first" is not re-run

        ctx.visits.clear();
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.visits, vec!["busy"]);
        assert_eq!(sel.cursor(), 0);
    }

    #[test]
    fn sequence_resumes_at_running_child() {
        let mut seq = Sequence::new(vec![
            Box::new(Fixed("gate", Status::Success)),
            Box::new(RunFor::new("busy", 1)),
            Box::new(Fixed("tail", Status::Success)),
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.cursor(), 1);

        ctx.visits.clear();
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.visits, vec!["busy", "tail"]);
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn sequence_with_wait_runs_until_elapsed() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(Wait::new(1.0)),
            Box::new(Increment),
        ]);

        let mut ctx = TestContext::new();
        ctx.dt = 0.4;

        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.cursor(), 1);
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.cursor(), 1);
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(seq.cursor(), 0);
        // The leading Increment ran once, the trailing one once.
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn reset_rewinds_cursor_and_children() {
        let mut sel = Selector::new(vec![
            Box::new(Fixed("first", Status::Failure)),
            Box::new(RunFor::new("busy", 1)),
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(sel.cursor(), 1);

        sel.reset();
        sel.reset(); // idempotent
        assert_eq!(sel.cursor(), 0);

        ctx.visits.clear();
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.visits, vec!["first", "busy"]);
    }

    #[test]
    fn reset_matches_fresh_tree() {
        fn build() -> Sequence<TestContext> {
            Sequence::new(vec![
                Box::new(Fixed("gate", Status::Success)),
                Box::new(Wait::new(1.0)),
                Box::new(RunFor::new("busy", 1)),
            ])
        }

        let mut ctx = TestContext::new();
        ctx.dt = 0.6;

        let mut used = build();
        assert_eq!(used.tick(&mut ctx), Status::Running);
        assert_eq!(used.tick(&mut ctx), Status::Running);
        used.reset();

        let mut fresh = build();
        let mut used_trace = Vec::new();
        let mut fresh_trace = Vec::new();
        for _ in 0..5 {
            used_trace.push((used.tick(&mut ctx), used.cursor()));
            fresh_trace.push((fresh.tick(&mut ctx), fresh.cursor()));
        }
        assert_eq!(used_trace, fresh_trace);
    }

    #[test]
    #[should_panic(expected = "Selector must have at least one child")]
    fn empty_selector_is_rejected() {
        let _ = Selector::<TestContext>::new(Vec::new());
    }
}
