use crate::math::Vec2;
use crate::prelude::RadarConfig;
use rand::{rngs::StdRng, Rng};

/// Moving circular body tracked by the radar.
#[derive(Debug, Clone)]
pub struct Target {
    pub position: Vec2,
    pub radius: f32,
    pub velocity: Vec2,
}

impl Target {
    pub fn new(position: Vec2, radius: f32, velocity: Vec2) -> Self {
        Self {
            position,
            radius,
            velocity,
        }
    }

    /// Spawns a target at a uniformly random surface position with small
    /// random velocity components in either direction.
    pub fn spawn(config: &RadarConfig, rng: &mut StdRng) -> Self {
        let size = config.surface_size();
        let position = Vec2::new(rng.gen_range(0.0..size), rng.gen_range(0.0..size));
        let velocity = Vec2::new(
            rng.gen_range(-config.spawn_speed..config.spawn_speed),
            rng.gen_range(-config.spawn_speed..config.spawn_speed),
        );
        Self::new(position, config.target_radius, velocity)
    }

    /// Advances one frame: position += velocity, reflecting off the surface
    /// edges. Crossing a wall clamps the position to the wall and forces the
    /// perpendicular velocity component back toward the interior.
    pub fn advance(&mut self, surface: f32) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;

        if self.position.x > surface - self.radius {
            self.position.x = surface - self.radius;
            self.velocity.x = -self.velocity.x.abs();
        } else if self.position.x < self.radius {
            self.position.x = self.radius;
            self.velocity.x = self.velocity.x.abs();
        }
        if self.position.y > surface - self.radius {
            self.position.y = surface - self.radius;
            self.velocity.y = -self.velocity.y.abs();
        } else if self.position.y < self.radius {
            self.position.y = self.radius;
            self.velocity.y = self.velocity.y.abs();
        }
    }
}
