//! Search scan: a deterministic ping-pong sweep of the guard's heading.

use crate::GuardConfig;
use crate::geometry::normalize_degrees;

/// Ping-pong heading sweep of `angle` degrees peak to peak at `speed`
/// degrees per second.
///
/// The offset is a pure function of elapsed time: one cycle lasts
/// `angle / speed * 2` seconds, ramping from `-angle/2` to `+angle/2` over the
/// first half and back over the second half.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanPattern {
    pub angle: f32,
    pub speed: f32,
}

impl ScanPattern {
    pub const fn new(angle: f32, speed: f32) -> Self {
        Self { angle, speed }
    }

    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(config.scan_angle, config.scan_speed)
    }

    /// Seconds for one full sweep out and back.
    pub fn cycle_time(&self) -> f32 {
        self.angle / self.speed * 2.0
    }

    /// Heading offset in degrees at `elapsed` seconds into the scan.
    pub fn offset_at(&self, elapsed: f32) -> f32 {
        if !(self.angle > 0.0 && self.speed > 0.0) || !elapsed.is_finite() {
            return 0.0;
        }

        let cycle = self.cycle_time();
        let half_cycle = cycle / 2.0;
        let half_angle = self.angle / 2.0;
        let t = elapsed.max(0.0).rem_euclid(cycle);

        if t <= half_cycle {
            -half_angle + self.angle * (t / half_cycle)
        } else {
            half_angle - self.angle * ((t - half_cycle) / half_cycle)
        }
    }
}

/// Progress of one search scan.
///
/// `begin` snapshots the heading the sweep is centred on and restarts the
/// timer; `advance` moves the timer and returns the heading to face.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchScan {
    started: bool,
    elapsed: f32,
    center: f32,
}

impl SearchScan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, heading: f32) {
        self.started = true;
        self.elapsed = 0.0;
        self.center = heading;
    }

    /// Adds `dt` to the timer and returns the heading for this tick.
    pub fn advance(&mut self, pattern: &ScanPattern, dt: f32) -> f32 {
        self.elapsed += dt;
        normalize_degrees(self.center + pattern.offset_at(self.elapsed))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Heading captured when the scan began.
    pub fn center(&self) -> f32 {
        self.center
    }
}
