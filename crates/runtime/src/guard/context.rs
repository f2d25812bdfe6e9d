//! Guard blackboard shared by every node of the guard tree.
//!
//! The [`GuardContext`] owns all mutable per-guard state: the body being
//! moved, the patrol walker, the perception integrator, the state machine
//! value and its transient latches, and the outbox of [`GuardEvent`]s.
//! Tree nodes are stateless function values; anything that must survive
//! between ticks lives here.

use behavior_tree::FrameTime;
use stealth_core::{
    Body, GuardConfig, GuardState, MotionIntent, MoveLimits, PatrolRoute, PatrolWalker,
    PerceptionIntegrator, ScanPattern, SearchScan, Sighting, Vec2, ViewCone,
};

use crate::events::GuardEvent;

/// Per-guard blackboard.
///
/// # Latches
///
/// - `was_detecting` is set when pursuit first engages and cleared when the
///   search scan finishes. The patrol leaf reads it to hand control to the
///   search branch.
/// - `patrol_engaged` is set when patrol traversal resumes and cleared
///   whenever traversal is stopped, so the resume runs once per entry.
/// - `alert_raised` makes the alert entry action run exactly once.
#[derive(Debug)]
pub struct GuardContext {
    /// Seconds elapsed for the current tick.
    pub dt: f32,
    pub config: GuardConfig,
    pub route: PatrolRoute,
    pub body: Body,
    pub walker: PatrolWalker,
    pub perception: PerceptionIntegrator,
    /// Result of this tick's visibility query.
    pub sighting: Option<Sighting>,
    pub state: GuardState,
    pub was_detecting: bool,
    pub patrol_engaged: bool,
    pub alert_raised: bool,
    pub scan: SearchScan,
    pub scan_pattern: ScanPattern,
    pub last_known_position: Option<Vec2>,
    /// Published for the locomotion collaborator; rewritten every tick.
    pub intent: MotionIntent,
    events: Vec<GuardEvent>,
}

impl GuardContext {
    /// Creates a context in the Patrol state. Inputs are assumed validated.
    pub fn new(config: GuardConfig, route: PatrolRoute, body: Body) -> Self {
        let perception = PerceptionIntegrator::from_config(&config);
        let scan_pattern = ScanPattern::from_config(&config);
        Self {
            dt: 0.0,
            config,
            route,
            body,
            walker: PatrolWalker::new(),
            perception,
            sighting: None,
            state: GuardState::Patrol,
            was_detecting: false,
            patrol_engaged: false,
            alert_raised: false,
            scan: SearchScan::new(),
            scan_pattern,
            last_known_position: None,
            intent: MotionIntent::IDLE,
            events: Vec::new(),
        }
    }

    /// Moves the state machine, emitting a change event if the state differs.
    pub fn set_state(&mut self, next: GuardState) {
        if self.state == next {
            return;
        }
        let previous = self.state;
        self.state = next;
        tracing::info!("Guard state {} -> {}", previous, next);
        self.emit(GuardEvent::StateChanged {
            previous,
            current: next,
        });
    }

    pub fn emit(&mut self, event: GuardEvent) {
        self.events.push(event);
    }

    /// Takes every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GuardEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[GuardEvent] {
        &self.events
    }

    /// Stops patrol traversal immediately and clears the patrol latch.
    pub fn stop_patrol(&mut self) {
        self.walker.halt();
        self.patrol_engaged = false;
    }

    /// The guard's current field of view.
    pub fn view_cone(&self) -> ViewCone {
        ViewCone::new(
            self.body.position,
            self.body.heading,
            self.config.view_distance,
            self.config.view_half_angle,
        )
    }

    pub fn patrol_limits(&self) -> MoveLimits {
        MoveLimits {
            speed: self.config.patrol_speed,
            turn_rate: self.config.turn_rate,
            stop_distance: self.config.arrive_distance,
        }
    }

    pub fn chase_limits(&self) -> MoveLimits {
        MoveLimits {
            speed: self.config.chase_speed,
            turn_rate: self.config.turn_rate,
            stop_distance: self.config.stop_distance,
        }
    }
}

impl FrameTime for GuardContext {
    fn delta_seconds(&self) -> f32 {
        self.dt
    }
}
