//! Collision detection
//!
//! Shape predicates (circle and axis-aligned rectangle) plus the three
//! brute-force passes the tick runs every frame. The passes only report
//! indices; the caller marks entities and compacts afterwards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Bullet, Enemy};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Overlap test. Rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Two circles overlap or touch
#[inline]
pub fn circles_overlap(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    center_a.distance(center_b) <= radius_a + radius_b
}

/// Circle overlaps or touches a rectangle
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let half = Vec2::new(rect.width / 2.0, rect.height / 2.0);
    let delta = (center - rect.center()).abs();

    if delta.x > half.x + radius || delta.y > half.y + radius {
        return false;
    }
    if delta.x <= half.x || delta.y <= half.y {
        return true;
    }

    // Only the corner region is left
    let corner = delta - half;
    corner.length_squared() <= radius * radius
}

/// Number of bullets currently touching the player
pub fn bullet_player_hits(
    player_pos: Vec2,
    player_radius: f32,
    bullets: &[Bullet],
    bullet_radius: f32,
) -> usize {
    bullets
        .iter()
        .filter(|b| circles_overlap(player_pos, player_radius, b.pos, bullet_radius))
        .count()
}

/// Indices of non-dead enemies whose square touches the player
pub fn enemy_player_hits(
    player_pos: Vec2,
    player_radius: f32,
    enemies: &[Enemy],
    enemy_size: f32,
) -> Vec<usize> {
    enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.is_dead())
        .filter(|(_, e)| circle_rect_overlap(player_pos, player_radius, &e.rect(enemy_size)))
        .map(|(i, _)| i)
        .collect()
}

/// Every overlapping pair `(i, j)` with `i < j`
pub fn enemy_enemy_pairs(enemies: &[Enemy], enemy_size: f32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in enemies.iter().enumerate() {
        let rect_a = a.rect(enemy_size);
        for (j, b) in enemies.iter().enumerate().skip(i + 1) {
            if rect_a.intersects(&b.rect(enemy_size)) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
