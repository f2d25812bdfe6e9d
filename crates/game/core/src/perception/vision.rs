//! View-cone visibility query.
//!
//! The environment owns targets and occluders; the core only needs the
//! nearest target that is in range, inside the field of view and not
//! blocked. [`nearest_visible`] implements that filter over a candidate
//! list so hosts only supply positions and an [`Obstruction`] test.

use crate::geometry::{Vec2, angle_between};

/// Stable handle for something a guard can see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetId(pub u32);

/// A guard's field of view for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewCone {
    pub origin: Vec2,
    /// Unit forward direction.
    pub forward: Vec2,
    pub distance: f32,
    /// Degrees either side of `forward`.
    pub half_angle: f32,
}

impl ViewCone {
    pub fn new(origin: Vec2, heading: f32, distance: f32, half_angle: f32) -> Self {
        Self {
            origin,
            forward: Vec2::from_heading(heading),
            distance,
            half_angle,
        }
    }

    /// Range and angle test, ignoring occlusion.
    pub fn contains(&self, point: Vec2) -> bool {
        let offset = point - self.origin;
        let distance = offset.length();
        if distance > self.distance {
            return false;
        }
        // Standing on the guard counts as seen.
        distance <= f32::EPSILON || angle_between(self.forward, offset) <= self.half_angle
    }
}

/// A target the environment offers for the visibility test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub id: TargetId,
    pub position: Vec2,
}

impl Candidate {
    pub const fn new(id: TargetId, position: Vec2) -> Self {
        Self { id, position }
    }
}

/// The result of a successful visibility query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting {
    pub target: TargetId,
    pub position: Vec2,
    pub distance: f32,
}

/// Line-of-sight test supplied by the environment.
pub trait Obstruction {
    /// Returns `true` when something blocks the segment `from → to`.
    fn is_blocked(&self, from: Vec2, to: Vec2) -> bool;
}

impl<F> Obstruction for F
where
    F: Fn(Vec2, Vec2) -> bool,
{
    fn is_blocked(&self, from: Vec2, to: Vec2) -> bool {
        self(from, to)
    }
}

/// An open world with no occluders.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unobstructed;

impl Obstruction for Unobstructed {
    fn is_blocked(&self, _from: Vec2, _to: Vec2) -> bool {
        false
    }
}

/// Source of per-tick visibility answers consumed by the guard controller.
pub trait VisibilityQuery {
    /// Nearest valid target inside `cone`, or `None`.
    fn nearest_visible(&self, cone: &ViewCone) -> Option<Sighting>;
}

/// Returns the nearest candidate inside `cone` that `obstruction` does not block.
///
/// Ties keep the earlier candidate.
pub fn nearest_visible<O>(cone: &ViewCone, candidates: &[Candidate], obstruction: &O) -> Option<Sighting>
where
    O: Obstruction + ?Sized,
{
    candidates
        .iter()
        .filter(|candidate| cone.contains(candidate.position))
        .filter(|candidate| !obstruction.is_blocked(cone.origin, candidate.position))
        .map(|candidate| Sighting {
            target: candidate.id,
            position: candidate.position,
            distance: cone.origin.distance(candidate.position),
        })
        .fold(None, |best: Option<Sighting>, sighting| match best {
            Some(best) if best.distance <= sighting.distance => Some(best),
            _ => Some(sighting),
        })
}
