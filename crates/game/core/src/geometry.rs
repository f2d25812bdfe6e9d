//! Planar geometry and heading helpers.
//!
//! The world is top-down: positions are [`Vec2`] in world units and headings
//! are degrees measured counter-clockwise from +X. All heading outputs are
//! normalized to `(-180, 180]`.

use core::ops::{Add, AddAssign, Mul, Sub};

/// A point or direction on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `heading` degrees.
    pub fn from_heading(heading: f32) -> Self {
        let (sin, cos) = heading.to_radians().sin_cos();
        Self { x: cos, y: sin }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the unit vector in the same direction, or `None` for a
    /// zero-length vector.
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len <= f32::EPSILON {
            None
        } else {
            Some(Self::new(self.x / len, self.y / len))
        }
    }

    /// Heading of this vector in degrees. Zero vectors report `0`.
    pub fn heading(self) -> f32 {
        if self.x == 0.0 && self.y == 0.0 {
            0.0
        } else {
            self.y.atan2(self.x).to_degrees()
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Wraps an angle in degrees into `(-180, 180]`.
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in degrees.
pub fn delta_angle(from: f32, to: f32) -> f32 {
    normalize_degrees(to - from)
}

/// Rotates `current` toward `target` by at most `max_delta` degrees along
/// the shortest arc.
pub fn move_towards_angle(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = delta_angle(current, target);
    if delta.abs() <= max_delta {
        normalize_degrees(target)
    } else {
        normalize_degrees(current + max_delta.copysign(delta))
    }
}

/// Unsigned angle between two directions in degrees, in `[0, 180]`.
///
/// Returns `0` when either vector has zero length.
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    match (a.normalized(), b.normalized()) {
        (Some(a), Some(b)) => a.dot(b).clamp(-1.0, 1.0).acos().to_degrees(),
        _ => 0.0,
    }
}

/// Heading that faces `to` from `from`.
pub fn heading_to(from: Vec2, to: Vec2) -> f32 {
    (to - from).heading()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn normalize_wraps_into_half_open_range() {
        assert!(close(normalize_degrees(190.0), -170.0));
        assert!(close(normalize_degrees(-190.0), 170.0));
        assert!(close(normalize_degrees(180.0), 180.0));
        assert!(close(normalize_degrees(-180.0), 180.0));
        assert!(close(normalize_degrees(720.0), 0.0));
    }

    #[test]
    fn delta_angle_takes_shortest_arc() {
        assert!(close(delta_angle(170.0, -170.0), 20.0));
        assert!(close(delta_angle(-170.0, 170.0), -20.0));
        assert!(close(delta_angle(10.0, 40.0), 30.0));
    }

    #[test]
    fn move_towards_angle_is_rate_limited() {
        assert!(close(move_towards_angle(0.0, 90.0, 30.0), 30.0));
        assert!(close(move_towards_angle(0.0, -90.0, 30.0), -30.0));
        assert!(close(move_towards_angle(0.0, 20.0, 30.0), 20.0));
        assert!(close(move_towards_angle(170.0, -170.0, 15.0), -175.0));
    }

    #[test]
    fn headings_and_angles() {
        assert!(close(Vec2::new(0.0, 1.0).heading(), 90.0));
        assert!(close(heading_to(Vec2::ZERO, Vec2::new(-1.0, 0.0)), 180.0));
        assert!(close(
            angle_between(Vec2::from_heading(0.0), Vec2::new(1.0, 1.0)),
            45.0
        ));
        assert_eq!(angle_between(Vec2::ZERO, Vec2::new(1.0, 0.0)), 0.0);
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vec2::new(3.0, 4.0);
        assert!(close(a.length(), 5.0));
        assert!(close(Vec2::ZERO.distance(a), 5.0));
        assert_eq!(a - Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert!(Vec2::ZERO.normalized().is_none());
    }
}
