//! Scripted test arena: walls that block sight and one wandering intruder.

use stealth_core::{
    Candidate, Obstruction, Sighting, TargetId, Vec2, ViewCone, VisibilityQuery, nearest_visible,
};

/// A wall segment that blocks line of sight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub start: Vec2,
    pub end: Vec2,
}

impl Wall {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Proper intersection of the sight line `from -> to` with this wall.
    pub fn blocks(&self, from: Vec2, to: Vec2) -> bool {
        let d1 = cross(self.start, self.end, from);
        let d2 = cross(self.start, self.end, to);
        let d3 = cross(from, to, self.start);
        let d4 = cross(from, to, self.end);
        d1 * d2 < 0.0 && d3 * d4 < 0.0
    }
}

fn cross(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    let ab = b - a;
    let ap = p - a;
    ab.x * ap.y - ab.y * ap.x
}

/// An intruder walking a closed loop at constant speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Intruder {
    pub id: TargetId,
    path: Vec<Vec2>,
    speed: f32,
    leg: usize,
    position: Vec2,
}

impl Intruder {
    /// Starts at the first point of `path`. An empty path stands at the origin.
    pub fn new(id: TargetId, path: Vec<Vec2>, speed: f32) -> Self {
        let position = path.first().copied().unwrap_or(Vec2::ZERO);
        Self {
            id,
            path,
            speed,
            leg: 0,
            position,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn advance(&mut self, dt: f32) {
        let len = self.path.len();
        if len < 2 {
            return;
        }
        let perimeter: f32 = (0..len)
            .map(|i| self.path[i].distance(self.path[(i + 1) % len]))
            .sum();
        if perimeter <= f32::EPSILON {
            return;
        }

        // Whole laps end where they started.
        let mut budget = (self.speed * dt).max(0.0) % perimeter;
        for _ in 0..=len {
            if budget <= 0.0 {
                return;
            }
            let next = (self.leg + 1) % len;
            let target = self.path[next];
            let remaining = self.position.distance(target);
            if remaining > budget {
                if let Some(direction) = (target - self.position).normalized() {
                    self.position += direction * budget;
                }
                return;
            }
            budget -= remaining;
            self.position = target;
            self.leg = next;
        }
    }
}

/// Walls plus intruders, queried once per guard tick.
#[derive(Clone, Debug, Default)]
pub struct Arena {
    pub walls: Vec<Wall>,
    pub intruders: Vec<Intruder>,
}

impl Arena {
    /// A square courtyard with a central pillar and one intruder sneaking
    /// around it.
    pub fn courtyard() -> Self {
        let pillar = [
            Vec2::new(3.0, 2.0),
            Vec2::new(5.0, 2.0),
            Vec2::new(5.0, 4.0),
            Vec2::new(3.0, 4.0),
        ];
        let walls = (0..pillar.len())
            .map(|i| Wall::new(pillar[i], pillar[(i + 1) % pillar.len()]))
            .collect();

        let intruder = Intruder::new(
            TargetId(1),
            vec![
                Vec2::new(12.0, 9.0),
                Vec2::new(4.0, 9.0),
                Vec2::new(4.0, 5.0),
                Vec2::new(12.0, 5.0),
            ],
            1.0,
        );

        Self {
            walls,
            intruders: vec![intruder],
        }
    }

    pub fn advance(&mut self, dt: f32) {
        for intruder in &mut self.intruders {
            intruder.advance(dt);
        }
    }

    fn candidates(&self) -> Vec<Candidate> {
        self.intruders
            .iter()
            .map(|intruder| Candidate::new(intruder.id, intruder.position()))
            .collect()
    }
}

impl Obstruction for Arena {
    fn is_blocked(&self, from: Vec2, to: Vec2) -> bool {
        self.walls.iter().any(|wall| wall.blocks(from, to))
    }
}

impl VisibilityQuery for Arena {
    fn nearest_visible(&self, cone: &ViewCone) -> Option<Sighting> {
        nearest_visible(cone, &self.candidates(), self)
    }
}
