//! Guard controller: perception refresh plus one tree tick per step.

use behavior_tree::{Behavior, BehaviorTree, Status};
use stealth_core::{
    Body, GuardConfig, GuardState, MotionIntent, PatrolRoute, PerceptionEvent, Vec2,
    VisibilityQuery,
};

use crate::error::{Result, RuntimeError};
use crate::events::GuardEvent;
use crate::guard::GuardContext;
use crate::guard::tree::build_guard_tree;

/// Outcome of one [`GuardController::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    /// Root status of the guard tree.
    pub status: Status,
    pub state: GuardState,
    /// Detection progress in `[0, 1]`.
    pub progress: f32,
    pub detected: bool,
    pub intent: MotionIntent,
}

/// Owns one guard's tree and blackboard and advances them together.
///
/// The tree is built once in [`GuardController::new`] and never rebuilt.
/// Each [`tick`](Self::tick) runs the visibility query, feeds the perception
/// integrator, then ticks the tree once.
///
/// # Example
///
/// ```
/// use stealth_core::{Body, GuardConfig, PatrolRoute, Vec2, ViewCone, VisibilityQuery, Sighting, Waypoint};
/// use stealth_runtime::GuardController;
///
/// struct EmptyRoom;
///
/// impl VisibilityQuery for EmptyRoom {
///     fn nearest_visible(&self, _cone: &ViewCone) -> Option<Sighting> {
///         None
///     }
/// }
///
/// let route = PatrolRoute::new(vec![Waypoint::new(Vec2::new(4.0, 0.0))]).unwrap();
/// let mut guard = GuardController::new(GuardConfig::default(), route, Body::default()).unwrap();
///
/// let report = guard.tick(0.1, &EmptyRoom);
/// assert!(report.status.is_success());
/// assert!(!report.detected);
/// ```
pub struct GuardController {
    tree: BehaviorTree<GuardContext>,
    ctx: GuardContext,
}

impl GuardController {
    /// Validates inputs and builds the guard tree.
    pub fn new(config: GuardConfig, route: PatrolRoute, body: Body) -> Result<Self> {
        config.validate()?;
        route.validate()?;
        if !body.position.is_finite() || !body.heading.is_finite() {
            return Err(RuntimeError::InvalidBody);
        }

        tracing::debug!(
            "Guard controller created with {} waypoints ({} mode)",
            route.len(),
            route.mode
        );
        Ok(Self {
            tree: build_guard_tree(),
            ctx: GuardContext::new(config, route, body),
        })
    }

    /// Advances the guard by `dt` seconds.
    ///
    /// Negative or non-finite `dt` is treated as zero.
    pub fn tick(&mut self, dt: f32, world: &dyn VisibilityQuery) -> TickReport {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.ctx.dt = dt;

        let cone = self.ctx.view_cone();
        self.ctx.sighting = world.nearest_visible(&cone);
        match self.ctx.perception.update(self.ctx.sighting.as_ref(), dt) {
            Some(PerceptionEvent::FullyDetected { target }) => {
                tracing::debug!("Target {:?} fully detected", target);
                self.ctx.emit(GuardEvent::TargetDetected { target });
            }
            Some(PerceptionEvent::Lost { target }) => {
                tracing::debug!("Target {:?} lost", target);
                self.ctx.emit(GuardEvent::TargetLost { target });
            }
            None => {}
        }

        self.ctx.intent = MotionIntent::IDLE;
        let status = self.tree.tick(&mut self.ctx);

        tracing::trace!(
            "Guard tick: status={:?} state={} progress={:.3}",
            status,
            self.ctx.state,
            self.ctx.perception.progress()
        );
        TickReport {
            status,
            state: self.ctx.state,
            progress: self.ctx.perception.progress(),
            detected: self.ctx.perception.is_detected(),
            intent: self.ctx.intent,
        }
    }

    /// Takes every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GuardEvent> {
        self.ctx.drain_events()
    }

    /// Returns the guard to a fresh Patrol state in place.
    ///
    /// Clears tree cursors and timers, perception, latches and the search
    /// scan, and settles the walker. The body keeps its pose and the walker
    /// keeps its waypoint index. Emits a state change if not already
    /// patrolling.
    pub fn reset(&mut self) {
        self.tree.reset();

        let ctx = &mut self.ctx;
        ctx.perception.reset();
        ctx.sighting = None;
        ctx.was_detecting = false;
        ctx.alert_raised = false;
        ctx.scan.clear();
        ctx.stop_patrol();
        ctx.last_known_position = None;
        ctx.intent = MotionIntent::IDLE;
        ctx.set_state(GuardState::Patrol);
        tracing::debug!("Guard reset");
    }

    /// Asks the patrol walker to stop at its next step boundary.
    pub fn cancel_motion(&mut self) {
        self.ctx.walker.request_cancel();
    }

    pub fn state(&self) -> GuardState {
        self.ctx.state
    }

    pub fn progress(&self) -> f32 {
        self.ctx.perception.progress()
    }

    pub fn is_detected(&self) -> bool {
        self.ctx.perception.is_detected()
    }

    pub fn body(&self) -> &Body {
        &self.ctx.body
    }

    pub fn intent(&self) -> MotionIntent {
        self.ctx.intent
    }

    pub fn last_known_position(&self) -> Option<Vec2> {
        self.ctx.last_known_position
    }

    pub fn config(&self) -> &GuardConfig {
        &self.ctx.config
    }

    /// Read access to the full blackboard, for tools and tests.
    pub fn context(&self) -> &GuardContext {
        &self.ctx
    }
}

impl std::fmt::Debug for GuardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuardController")
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stealth_core::{ConfigError, RouteError, Sighting, TargetId, ViewCone, Waypoint};

    struct Nothing;

    impl VisibilityQuery for Nothing {
        fn nearest_visible(&self, _cone: &ViewCone) -> Option<Sighting> {
            None
        }
    }

    fn route() -> PatrolRoute {
        PatrolRoute::new(vec![Waypoint::new(Vec2::new(3.0, 0.0))]).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = GuardConfig::default().with_detection(0.0, 3.0);
        let err = GuardController::new(config, route(), Body::default()).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Config(ConfigError::NotPositive { .. })
        ));
    }

    #[test]
    fn rejects_empty_route() {
        let err = GuardController::new(GuardConfig::default(), PatrolRoute::default(), Body::default())
            .unwrap_err();
        assert_eq!(err, RuntimeError::Route(RouteError::Empty));
        assert_eq!(err.error_code(), "route.empty");
    }

    #[test]
    fn rejects_non_finite_body() {
        let body = Body::new(Vec2::new(f32::NAN, 0.0), 0.0);
        let err = GuardController::new(GuardConfig::default(), route(), body).unwrap_err();
        assert_eq!(err, RuntimeError::InvalidBody);
    }

    #[test]
    fn bad_dt_is_clamped() {
        let mut guard = GuardController::new(GuardConfig::default(), route(), Body::default()).unwrap();

        guard.tick(-1.0, &Nothing);
        guard.tick(f32::NAN, &Nothing);
        assert_eq!(guard.body().position, Vec2::ZERO);
        assert_eq!(guard.progress(), 0.0);
    }

    #[test]
    fn cancel_motion_stops_at_next_step() {
        let mut guard = GuardController::new(GuardConfig::default(), route(), Body::default()).unwrap();
        guard.tick(0.5, &Nothing);
        let stopped_at = guard.body().position;
        assert!(stopped_at.x > 0.0);

        guard.cancel_motion();
        guard.tick(0.5, &Nothing);
        assert_eq!(guard.body().position, stopped_at);
        assert!(guard.context().walker.is_idle());
        assert_eq!(guard.intent(), MotionIntent::IDLE);
    }

    #[test]
    fn detection_edge_is_reported() {
        struct Always;
        impl VisibilityQuery for Always {
            fn nearest_visible(&self, cone: &ViewCone) -> Option<Sighting> {
                Some(Sighting {
                    target: TargetId(3),
                    position: cone.origin + Vec2::new(20.0, 0.0),
                    distance: 20.0,
                })
            }
        }

        let config = GuardConfig::default().with_detection(1.0, 1.0);
        let mut guard = GuardController::new(config, route(), Body::default()).unwrap();
        guard.tick(0.5, &Always);
        guard.tick(0.5, &Always);

        let detected: Vec<_> = guard
            .drain_events()
            .into_iter()
            .filter(|event| matches!(event, GuardEvent::TargetDetected { .. }))
            .collect();
        assert_eq!(detected, vec![GuardEvent::TargetDetected { target: TargetId(3) }]);
        assert!(guard.is_detected());
    }
}
