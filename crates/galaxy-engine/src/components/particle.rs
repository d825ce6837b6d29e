//! Burst particles emitted when a task is completed.

use glam::Vec2;

use crate::api::config::GalaxyConfig;
use crate::components::color::Color;
use crate::core::rng::Rng;
use crate::renderer::draw::DrawList;

/// A single fading spark.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Starts at 1.0; the particle dies once this reaches zero.
    pub alpha: f32,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: Color) -> Self {
        Self {
            pos,
            vel,
            alpha: 1.0,
            color,
        }
    }

    /// Spark flying out of `center` in a random direction.
    pub fn spawn(center: Vec2, config: &GalaxyConfig, rng: &mut Rng) -> Self {
        let angle = rng.next_f32() * std::f32::consts::TAU;
        let speed = rng.range(config.particle_speed_min, config.particle_speed_max);
        let color = rng.pick(&config.particle_colors).copied().unwrap_or(Color::WHITE);
        Self::new(center, Vec2::from_angle(angle) * speed, color)
    }

    /// Advance particle motion and fade. Returns false when expired.
    pub fn step(&mut self, fade: f32) -> bool {
        self.pos += self.vel;
        self.alpha -= fade;
        self.alpha > 0.0
    }

    pub fn draw(&self, list: &mut DrawList, radius: f32) {
        list.circle(self.pos, radius, self.color, self.alpha.max(0.0));
    }
}
