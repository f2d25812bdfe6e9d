//! Step-function patrol traversal.
//!
//! The walker is advanced once per tick by [`PatrolWalker::step`]. It never
//! suspends mid-step: cancellation is a flag checked at the start of each
//! step, and honouring it always leaves the walker [`WalkerPhase::Idle`] with
//! the flag cleared and the body where the last completed step put it.

use crate::motion::{Body, MoveLimits};
use crate::search::ScanPattern;

use super::waypoint::{PatrolRoute, WaypointTrigger};

/// Where the walker is in its route.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WalkerPhase {
    /// Not traversing. Resumes toward `PatrolWalker::index` on `resume`.
    Idle,
    /// Walking toward waypoint `index`.
    Moving { index: usize },
    /// Arrived at waypoint `index`, holding for its wait delay.
    Holding {
        index: usize,
        held: f32,
        /// Heading on arrival; observation sweeps are centred on it.
        arrival_heading: f32,
    },
}

/// Outcome of one [`PatrolWalker::step`].
#[derive(Clone, Debug, PartialEq)]
pub enum WalkerStep {
    /// The walker is idle and did nothing.
    Idle,
    /// Still walking toward the current waypoint.
    Moving,
    /// Reached waypoint `index` on this step.
    Arrived {
        index: usize,
        trigger: Option<WaypointTrigger>,
    },
    /// Holding at a waypoint.
    Holding,
    /// A pending cancellation was honoured; the walker is now idle.
    Cancelled,
}

/// Walks a [`PatrolRoute`] one step per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct PatrolWalker {
    phase: WalkerPhase,
    index: usize,
    forward: bool,
    cancel_requested: bool,
}

impl Default for PatrolWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl PatrolWalker {
    pub fn new() -> Self {
        Self {
            phase: WalkerPhase::Idle,
            index: 0,
            forward: true,
            cancel_requested: false,
        }
    }

    pub fn phase(&self) -> WalkerPhase {
        self.phase
    }

    /// Index of the waypoint being walked to (or held at).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, WalkerPhase::Idle)
    }

    pub fn is_cancel_requested(&self) -> bool {
        self.cancel_requested
    }

    /// Starts walking toward the current waypoint if idle.
    pub fn resume(&mut self) {
        self.cancel_requested = false;
        if self.is_idle() {
            self.phase = WalkerPhase::Moving { index: self.index };
        }
    }

    /// Asks the walker to stop at the next step boundary.
    pub fn request_cancel(&mut self) {
        if !self.is_idle() {
            self.cancel_requested = true;
        }
    }

    /// Stops immediately.
    ///
    /// A hold in progress is abandoned; the next `resume` walks to the same
    /// waypoint again.
    pub fn halt(&mut self) {
        self.phase = WalkerPhase::Idle;
        self.cancel_requested = false;
    }

    /// Advances traversal by one tick.
    ///
    /// `limits.stop_distance` is the arrival radius. `scan` drives the view
    /// sweep at observation waypoints.
    pub fn step(
        &mut self,
        route: &PatrolRoute,
        body: &mut Body,
        limits: MoveLimits,
        scan: &ScanPattern,
        dt: f32,
    ) -> WalkerStep {
        if self.cancel_requested {
            self.halt();
            return WalkerStep::Cancelled;
        }

        match self.phase {
            WalkerPhase::Idle => WalkerStep::Idle,
            WalkerPhase::Moving { index } => {
                let Some(waypoint) = route.get(index) else {
                    // Route shrank underneath us; start over.
                    self.index = 0;
                    self.phase = WalkerPhase::Moving { index: 0 };
                    return WalkerStep::Moving;
                };

                if !body.step_towards(waypoint.position, limits, dt) {
                    return WalkerStep::Moving;
                }

                self.phase = WalkerPhase::Holding {
                    index,
                    held: 0.0,
                    arrival_heading: body.heading,
                };
                if waypoint.wait_delay <= 0.0 {
                    self.advance(route);
                }
                WalkerStep::Arrived {
                    index,
                    trigger: waypoint.trigger(),
                }
            }
            WalkerPhase::Holding {
                index,
                held,
                arrival_heading,
            } => {
                let held = held + dt;
                let (wait_delay, is_observation) = route
                    .get(index)
                    .map(|waypoint| (waypoint.wait_delay, waypoint.is_observation))
                    .unwrap_or((0.0, false));

                if is_observation {
                    body.turn_towards(
                        arrival_heading + scan.offset_at(held),
                        limits.turn_rate,
                        dt,
                    );
                }

                if !(held >= wait_delay && self.advance(route)) {
                    self.phase = WalkerPhase::Holding {
                        index,
                        held,
                        arrival_heading,
                    };
                }
                WalkerStep::Holding
            }
        }
    }

    /// Moves on to the next waypoint. Returns `false` when the route has
    /// nowhere else to go, leaving the phase untouched.
    fn advance(&mut self, route: &PatrolRoute) -> bool {
        let (next, forward) = route.next_index(self.index, self.forward);
        if next == self.index {
            return false;
        }
        self.index = next;
        self.forward = forward;
        self.phase = WalkerPhase::Moving { index: next };
        true
    }
}
