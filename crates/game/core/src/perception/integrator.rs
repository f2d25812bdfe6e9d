//! Time-hysteresis detection integrator.
//!
//! Visibility flickers from frame to frame. The integrator smooths it into a
//! `progress` value in `[0, 1]` that rises while the target is visible and
//! decays while it is not, at independent rates. The latched `detected`
//! flag only flips when progress touches a bound, so a single occluded
//! frame never toggles detection.

use crate::GuardConfig;
use crate::geometry::Vec2;

use super::vision::{Sighting, TargetId};

/// Progress within this distance of a bound is snapped onto it.
const SNAP_EPSILON: f32 = 1e-5;

/// The target currently being accumulated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedTarget {
    pub id: TargetId,
    /// Position from the most recent sighting.
    pub last_seen: Vec2,
}

/// Edge-triggered detection events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerceptionEvent {
    /// Progress reached 1 while not yet detected.
    FullyDetected { target: TargetId },
    /// Progress decayed to 0 while detected.
    Lost { target: Option<TargetId> },
}

/// Accumulates visibility into a bounded, hysteretic detection value.
#[derive(Clone, Debug, PartialEq)]
pub struct PerceptionIntegrator {
    time_to_detect: f32,
    time_to_lose: f32,
    progress: f32,
    detected: bool,
    target: Option<TrackedTarget>,
}

impl PerceptionIntegrator {
    /// Creates an integrator that needs `time_to_detect` seconds of visibility
    /// to reach full detection and `time_to_lose` seconds without it to decay.
    pub fn new(time_to_detect: f32, time_to_lose: f32) -> Self {
        Self {
            time_to_detect,
            time_to_lose,
            progress: 0.0,
            detected: false,
            target: None,
        }
    }

    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(config.time_to_detect, config.time_to_lose)
    }

    /// Feeds one tick of visibility.
    ///
    /// Returns an event only on the tick a threshold is first crossed.
    pub fn update(&mut self, sighting: Option<&Sighting>, dt: f32) -> Option<PerceptionEvent> {
        match sighting {
            Some(sighting) => {
                self.target = Some(TrackedTarget {
                    id: sighting.target,
                    last_seen: sighting.position,
                });
                self.progress = snap((self.progress + dt / self.time_to_detect).min(1.0));

                if self.progress >= 1.0 && !self.detected {
                    self.detected = true;
                    return Some(PerceptionEvent::FullyDetected {
                        target: sighting.target,
                    });
                }
                None
            }
            None => {
                self.progress = snap((self.progress - dt / self.time_to_lose).max(0.0));
                if self.progress > 0.0 {
                    return None;
                }

                let target = self.target.take().map(|tracked| tracked.id);
                if self.detected {
                    self.detected = false;
                    return Some(PerceptionEvent::Lost { target });
                }
                None
            }
        }
    }

    /// Clears progress, latch and target without emitting events.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.detected = false;
        self.target = None;
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_detected(&self) -> bool {
        self.detected
    }

    /// The tracked target. Only meaningful while `progress > 0`.
    pub fn target(&self) -> Option<&TrackedTarget> {
        self.target.as_ref()
    }

    pub fn time_to_detect(&self) -> f32 {
        self.time_to_detect
    }

    pub fn time_to_lose(&self) -> f32 {
        self.time_to_lose
    }
}

fn snap(progress: f32) -> f32 {
    if progress < SNAP_EPSILON {
        0.0
    } else if progress > 1.0 - SNAP_EPSILON {
        1.0
    } else {
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(id: u32) -> Sighting {
        Sighting {
            target: TargetId(id),
            position: Vec2::new(4.0, 0.0),
            distance: 4.0,
        }
    }

    #[test]
    fn rises_in_even_steps_and_fires_once() {
        let mut perception = PerceptionIntegrator::new(2.0, 3.0);
        let sighting = seen(7);

        let mut progress = Vec::new();
        let mut events = Vec::new();
        for tick in 1..=6 {
            if let Some(event) = perception.update(Some(&sighting), 0.5) {
                events.push((tick, event));
            }
            progress.push(perception.progress());
        }

        assert_eq!(&progress[..4], &[0.25, 0.5, 0.75, 1.0]);
        assert_eq!(&progress[4..], &[1.0, 1.0]);
        assert_eq!(
            events,
            vec![(
                4,
                PerceptionEvent::FullyDetected {
                    target: TargetId(7)
                }
            )]
        );
        assert!(perception.is_detected());
    }

    #[test]
    fn decays_to_exactly_zero_and_fires_lost_once() {
        let mut perception = PerceptionIntegrator::new(2.0, 3.0);
        for _ in 0..4 {
            perception.update(Some(&seen(1)), 0.5);
        }
        assert!(perception.is_detected());

        let mut events = Vec::new();
        for tick in 1..=8 {
            if let Some(event) = perception.update(None, 0.5) {
                events.push((tick, event));
            }
            assert!((0.0..=1.0).contains(&perception.progress()));
        }

        assert_eq!(perception.progress(), 0.0);
        assert_eq!(
            events,
            vec![(
                6,
                PerceptionEvent::Lost {
                    target: Some(TargetId(1))
                }
            )]
        );
        assert!(!perception.is_detected());
        assert!(perception.target().is_none());
    }

    #[test]
    fn single_frame_flicker_keeps_detection() {
        let mut perception = PerceptionIntegrator::new(0.5, 3.0);
        perception.update(Some(&seen(1)), 0.5);
        assert!(perception.is_detected());

        assert_eq!(perception.update(None, 0.1), None);
        assert!(perception.is_detected());
        assert!(perception.progress() > 0.9);

        // Regaining full progress while still latched does not re-fire.
        assert_eq!(perception.update(Some(&seen(1)), 0.5), None);
    }

    #[test]
    fn partial_progress_decays_silently() {
        let mut perception = PerceptionIntegrator::new(2.0, 1.0);
        perception.update(Some(&seen(3)), 0.5);
        assert_eq!(perception.target().map(|t| t.id), Some(TargetId(3)));

        assert_eq!(perception.update(None, 1.0), None);
        assert_eq!(perception.progress(), 0.0);
        assert!(perception.target().is_none());
    }

    #[test]
    fn reset_clears_without_events() {
        let mut perception = PerceptionIntegrator::new(0.5, 0.5);
        perception.update(Some(&seen(1)), 0.5);
        perception.reset();

        assert_eq!(perception, PerceptionIntegrator::new(0.5, 0.5));
        assert_eq!(perception.update(None, 0.5), None);
    }
}
