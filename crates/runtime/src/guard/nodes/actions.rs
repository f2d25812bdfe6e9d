//! Action nodes for the guard tree.
//!
//! Each action performs its state machine entry work the first time it is
//! reached, then does its per-tick work and writes the tick's
//! [`MotionIntent`]. The returned status is what the owning branch needs:
//!
//! | Action | Returns |
//! |---|---|
//! | [`enter_alert`] | always `Running` |
//! | [`pursue`] | `Success` each tick it issues a pursuit step, `Failure` without a sighting |
//! | [`scan`] | `Running` until the search duration elapses, then `Success` |
//! | [`patrol`] | `Failure` to hand off to the search branch, otherwise `Success` |

use behavior_tree::Status;
use stealth_core::{GuardState, MotionIntent, WalkerPhase, WalkerStep, heading_to};

use crate::events::GuardEvent;
use crate::guard::GuardContext;

/// Terminal alert. Never completes.
///
/// The first tick stops patrol, moves to [`GuardState::Alert`] and emits
/// [`GuardEvent::AlertRaised`]. Later ticks only keep facing the target.
pub fn enter_alert(ctx: &mut GuardContext) -> Status {
    if let Some(target) = ctx.perception.target() {
        ctx.last_known_position = Some(target.last_seen);
    }

    if !ctx.alert_raised {
        ctx.alert_raised = true;
        ctx.stop_patrol();
        ctx.set_state(GuardState::Alert);

        let position = ctx.last_known_position.unwrap_or(ctx.body.position);
        tracing::info!("Guard raised alert at ({:.2}, {:.2})", position.x, position.y);
        ctx.emit(GuardEvent::AlertRaised { position });
    }

    ctx.intent = match ctx.last_known_position {
        Some(position) => MotionIntent::face(heading_to(ctx.body.position, position)),
        None => MotionIntent::IDLE,
    };
    Status::Running
}

/// Chases the visible target for one tick.
///
/// On first entry latches `was_detecting`, stops patrol and moves to
/// [`GuardState::Detecting`]. Returns `Success` per handled tick; there is
/// no notion of pursuit being finished.
pub fn pursue(ctx: &mut GuardContext) -> Status {
    let Some(sighting) = ctx.sighting else {
        return Status::Failure;
    };

    if ctx.state != GuardState::Detecting {
        ctx.was_detecting = true;
        ctx.stop_patrol();
        ctx.set_state(GuardState::Detecting);
    }

    let target = sighting.position;
    ctx.last_known_position = Some(target);
    let limits = ctx.chase_limits();
    let reached = ctx.body.step_towards(target, limits, ctx.dt);
    ctx.intent = MotionIntent::move_to(target).facing(heading_to(ctx.body.position, target));

    tracing::trace!(
        "Pursuing {:?} at distance {:.2} (reached: {})",
        sighting.target,
        sighting.distance,
        reached
    );
    Status::Success
}

/// Sweeps the heading around where the target was lost.
///
/// The first tick snapshots the heading and restarts the scan timer. Every
/// tick advances the timer and turns toward the ping-pong heading. Once the
/// timer reaches the search duration the detection latch is cleared and the
/// guard returns to [`GuardState::Patrol`].
pub fn scan(ctx: &mut GuardContext) -> Status {
    if !ctx.scan.is_started() {
        ctx.scan.begin(ctx.body.heading);
        tracing::debug!("Search scan started around heading {:.1}", ctx.body.heading);
    }

    let heading = ctx.scan.advance(&ctx.scan_pattern, ctx.dt);
    ctx.body.turn_towards(heading, ctx.config.turn_rate, ctx.dt);
    ctx.intent = MotionIntent::face(heading);

    if ctx.scan.elapsed() < ctx.config.search_duration {
        return Status::Running;
    }

    tracing::debug!("Search scan finished after {:.2}s", ctx.scan.elapsed());
    ctx.was_detecting = false;
    ctx.scan.clear();
    ctx.set_state(GuardState::Patrol);
    Status::Success
}

/// Walks the patrol route for one tick.
///
/// While `was_detecting` is latched this clears the patrol latch, moves to
/// [`GuardState::Searching`] and fails, so the search branch picks up on the
/// next tick. Otherwise the first tick after the latch was cleared resumes
/// the walker, and every tick steps it.
pub fn patrol(ctx: &mut GuardContext) -> Status {
    if ctx.was_detecting {
        ctx.patrol_engaged = false;
        ctx.set_state(GuardState::Searching);
        tracing::debug!("Target lost, handing off to search");
        return Status::Failure;
    }

    if !ctx.patrol_engaged {
        ctx.patrol_engaged = true;
        ctx.walker.resume();
        ctx.set_state(GuardState::Patrol);
        tracing::debug!("Patrol resumed toward waypoint {}", ctx.walker.index());
    }

    let limits = ctx.patrol_limits();
    let step = ctx.walker.step(
        &ctx.route,
        &mut ctx.body,
        limits,
        &ctx.scan_pattern,
        ctx.dt,
    );

    match step {
        WalkerStep::Arrived { index, trigger } => {
            tracing::debug!("Reached waypoint {}", index);
            ctx.emit(GuardEvent::WaypointReached { index });
            if let Some(trigger) = trigger {
                ctx.emit(GuardEvent::AnimationTrigger {
                    name: trigger.name,
                    value: trigger.value,
                });
            }
        }
        WalkerStep::Cancelled => tracing::debug!("Patrol motion cancelled"),
        WalkerStep::Idle | WalkerStep::Moving | WalkerStep::Holding => {}
    }

    ctx.intent = match ctx.walker.phase() {
        WalkerPhase::Moving { index } => match ctx.route.get(index) {
            Some(waypoint) => MotionIntent::move_to(waypoint.position)
                .facing(heading_to(ctx.body.position, waypoint.position)),
            None => MotionIntent::IDLE,
        },
        WalkerPhase::Holding { .. } => MotionIntent::face(ctx.body.heading),
        WalkerPhase::Idle => MotionIntent::IDLE,
    };
    Status::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use stealth_core::{Body, GuardConfig, PatrolRoute, Sighting, TargetId, Vec2, Waypoint};

    fn context() -> GuardContext {
        let route = PatrolRoute::new(vec![
            Waypoint::new(Vec2::new(1.0, 0.0)).with_trigger("stretch", true),
            Waypoint::new(Vec2::new(5.0, 0.0)),
        ])
        .unwrap();
        let mut ctx = GuardContext::new(GuardConfig::default(), route, Body::default());
        ctx.dt = 0.5;
        ctx
    }

    fn sighting_at(position: Vec2) -> Option<Sighting> {
        Some(Sighting {
            target: TargetId(7),
            position,
            distance: position.length(),
        })
    }

    #[test]
    fn patrol_resumes_once_and_emits_waypoint_events() {
        let mut ctx = context();

        assert_eq!(patrol(&mut ctx), Status::Success);
        assert!(ctx.patrol_engaged);
        assert_eq!(ctx.intent.target_position, Some(Vec2::new(1.0, 0.0)));

        // 1.5 u/s: the first waypoint is 1.0 away, so the second tick arrives.
        assert_eq!(patrol(&mut ctx), Status::Success);
        assert_eq!(
            ctx.drain_events(),
            vec![
                GuardEvent::WaypointReached { index: 0 },
                GuardEvent::AnimationTrigger {
                    name: "stretch".into(),
                    value: true,
                },
            ]
        );
        assert_eq!(ctx.walker.phase(), WalkerPhase::Moving { index: 1 });
    }

    #[test]
    fn patrol_hands_off_while_detecting() {
        let mut ctx = context();
        ctx.state = GuardState::Detecting;
        ctx.was_detecting = true;
        ctx.patrol_engaged = true;

        assert_eq!(patrol(&mut ctx), Status::Failure);
        assert_eq!(ctx.state, GuardState::Searching);
        assert!(!ctx.patrol_engaged);
    }

    #[test]
    fn pursue_without_sighting_fails() {
        let mut ctx = context();
        assert_eq!(pursue(&mut ctx), Status::Failure);
        assert_eq!(ctx.state, GuardState::Patrol);
    }

    #[test]
    fn pursue_latches_and_chases() {
        let mut ctx = context();
        ctx.walker.resume();
        ctx.patrol_engaged = true;
        ctx.sighting = sighting_at(Vec2::new(8.0, 0.0));

        assert_eq!(pursue(&mut ctx), Status::Success);
        assert!(ctx.was_detecting);
        assert!(ctx.walker.is_idle());
        assert_eq!(ctx.state, GuardState::Detecting);
        assert_eq!(ctx.last_known_position, Some(Vec2::new(8.0, 0.0)));
        // chase speed 3.5 u/s for 0.5 s
        assert!((ctx.body.position.x - 1.75).abs() < 1e-4);

        ctx.drain_events();
        assert_eq!(pursue(&mut ctx), Status::Success);
        assert!(ctx.drain_events().is_empty());
    }

    #[test]
    fn scan_runs_for_search_duration() {
        let mut ctx = context();
        ctx.config.search_duration = 1.0;
        ctx.state = GuardState::Searching;
        ctx.was_detecting = true;

        assert_eq!(scan(&mut ctx), Status::Running);
        assert!(ctx.scan.is_started());
        assert!(ctx.intent.target_heading.is_some());

        assert_eq!(scan(&mut ctx), Status::Success);
        assert!(!ctx.was_detecting);
        assert!(!ctx.scan.is_started());
        assert_eq!(ctx.state, GuardState::Patrol);
    }

    #[test]
    fn alert_fires_once_and_keeps_running() {
        let mut ctx = context();
        ctx.last_known_position = Some(Vec2::new(2.0, 2.0));

        assert_eq!(enter_alert(&mut ctx), Status::Running);
        assert_eq!(enter_alert(&mut ctx), Status::Running);

        let alerts: Vec<_> = ctx
            .drain_events()
            .into_iter()
            .filter(|event| matches!(event, GuardEvent::AlertRaised { .. }))
            .collect();
        assert_eq!(
            alerts,
            vec![GuardEvent::AlertRaised {
                position: Vec2::new(2.0, 2.0)
            }]
        );
        assert_eq!(ctx.state, GuardState::Alert);
    }
}
