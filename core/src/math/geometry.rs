use serde::{Deserialize, Serialize};

/// Point or displacement on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Vec2) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// A degenerate segment (`a == b`) falls back to the point distance.
pub fn point_to_line_distance(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    let normal_length = a.distance(b);
    if normal_length == 0.0 {
        return a.distance(p);
    }
    ((p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)).abs() / normal_length
}
