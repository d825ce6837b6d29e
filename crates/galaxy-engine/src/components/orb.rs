use glam::Vec2;

use crate::api::config::GalaxyConfig;
use crate::components::color::Color;
use crate::core::rng::Rng;
use crate::core::theme::Theme;
use crate::renderer::draw::{DrawCommand, DrawList};

/// Drifting disc standing in for one incomplete task.
#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Pulsation angle in radians. Has no effect on motion.
    pub phase: f32,
}

impl Orb {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            phase: 0.0,
        }
    }

    /// Random orb somewhere inside the viewport.
    pub fn spawn(viewport: Vec2, config: &GalaxyConfig, rng: &mut Rng) -> Self {
        let pos = Vec2::new(rng.next_f32() * viewport.x, rng.next_f32() * viewport.y);
        let vel = Vec2::new(
            (rng.next_f32() - 0.5) * config.orb_speed,
            (rng.next_f32() - 0.5) * config.orb_speed,
        );
        let radius = config.orb_base_radius + rng.next_f32() * config.orb_radius_jitter;
        let color = rng.pick(&config.orb_colors).copied().unwrap_or(Color::WHITE);
        Self {
            phase: rng.next_f32() * std::f32::consts::TAU,
            ..Self::new(pos, vel, radius, color)
        }
    }

    /// Advance one tick: drift, bounce off the viewport edges, then get
    /// pushed away from the pointer.
    pub fn step(&mut self, pointer: Vec2, viewport: Vec2, config: &GalaxyConfig) {
        self.pos += self.vel;
        self.phase += config.orb_phase_step;

        // Velocity reflection only; the orb may sit outside for a frame.
        if self.pos.x < 0.0 || self.pos.x > viewport.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > viewport.y {
            self.vel.y = -self.vel.y;
        }

        let away = self.pos - pointer;
        let dist = away.length();
        if dist > 0.0 && dist < config.repel_radius {
            let force = (config.repel_radius - dist) / config.repel_radius;
            self.pos += away / dist * force * config.repel_force;
        }
    }

    pub fn alpha(&self, theme: &Theme, pulse: f32) -> f32 {
        theme.orb_alpha + self.phase.sin() * pulse
    }

    pub fn draw(&self, list: &mut DrawList, theme: &Theme, config: &GalaxyConfig) {
        list.push(DrawCommand::Circle {
            center: self.pos,
            radius: self.radius,
            color: self.color,
            alpha: self.alpha(theme, config.orb_pulse),
            glow: config.orb_glow,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::{DARK, LIGHT};

    const VIEW: Vec2 = Vec2::new(800.0, 600.0);
    const NO_POINTER: Vec2 = Vec2::new(-1000.0, -1000.0);

    fn still_orb(pos: Vec2) -> Orb {
        Orb::new(pos, Vec2::ZERO, 15.0, Color::WHITE)
    }

    #[test]
    fn spawn_respects_config_ranges() {
        let config = GalaxyConfig::default();
        let mut rng = Rng::new(11);
        for _ in 0..200 {
            let orb = Orb::spawn(VIEW, &config, &mut rng);
            assert!(orb.pos.x >= 0.0 && orb.pos.x <= VIEW.x);
            assert!(orb.pos.y >= 0.0 && orb.pos.y <= VIEW.y);
            assert!(orb.vel.x.abs() <= 0.25 && orb.vel.y.abs() <= 0.25);
            assert!(orb.radius >= 15.0 && orb.radius <= 20.0);
            assert!(config.orb_colors.contains(&orb.color));
        }
    }

    #[test]
    fn drifts_by_velocity() {
        let config = GalaxyConfig::default();
        let mut orb = Orb::new(Vec2::new(100.0, 100.0), Vec2::new(0.2, -0.1), 15.0, Color::WHITE);
        orb.step(NO_POINTER, VIEW, &config);
        assert!((orb.pos - Vec2::new(100.2, 99.9)).length() < 1e-4);
        assert!((orb.phase - 0.02).abs() < 1e-6);
    }

    #[test]
    fn bounces_off_right_edge() {
        let config = GalaxyConfig::default();
        let mut orb = Orb::new(Vec2::new(VIEW.x, 300.0), Vec2::new(0.25, 0.1), 15.0, Color::WHITE);
        orb.step(NO_POINTER, VIEW, &config);
        assert_eq!(orb.vel.x, -0.25);
        assert_eq!(orb.vel.y, 0.1);
    }

    #[test]
    fn bounces_off_top_edge() {
        let config = GalaxyConfig::default();
        let mut orb = Orb::new(Vec2::new(400.0, 0.05), Vec2::new(0.1, -0.2), 15.0, Color::WHITE);
        orb.step(NO_POINTER, VIEW, &config);
        assert_eq!(orb.vel.y, 0.2);
        assert_eq!(orb.vel.x, 0.1);
        // Position is not clamped.
        assert!(orb.pos.y < 0.0);
    }

    #[test]
    fn no_repulsion_outside_radius() {
        let config = GalaxyConfig::default();
        let start = Vec2::new(400.0, 300.0);
        let mut orb = still_orb(start);
        orb.step(start + Vec2::new(150.5, 0.0), VIEW, &config);
        assert_eq!(orb.pos, start);
    }

    #[test]
    fn repelled_away_from_pointer_inside_radius() {
        let config = GalaxyConfig::default();
        let start = Vec2::new(400.0, 300.0);
        let mut orb = still_orb(start);
        // Pointer 75 px to the left: half-strength push to the right.
        orb.step(start - Vec2::new(75.0, 0.0), VIEW, &config);
        assert!((orb.pos.x - 401.0).abs() < 1e-4, "x was {}", orb.pos.x);
        assert_eq!(orb.pos.y, 300.0);
    }

    #[test]
    fn pointer_exactly_on_orb_is_skipped() {
        let config = GalaxyConfig::default();
        let start = Vec2::new(400.0, 300.0);
        let mut orb = still_orb(start);
        orb.step(start, VIEW, &config);
        assert_eq!(orb.pos, start);
        assert!(orb.pos.is_finite());
    }

    #[test]
    fn alpha_follows_theme_and_phase() {
        let mut orb = still_orb(Vec2::ZERO);
        assert!((orb.alpha(&DARK, 0.1) - 0.6).abs() < 1e-6);
        assert!((orb.alpha(&LIGHT, 0.1) - 0.8).abs() < 1e-6);
        orb.phase = std::f32::consts::FRAC_PI_2;
        assert!((orb.alpha(&DARK, 0.1) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn draw_emits_glowing_circle() {
        let config = GalaxyConfig::default();
        let orb = still_orb(Vec2::new(5.0, 6.0));
        let mut list = DrawList::new();
        orb.draw(&mut list, &DARK, &config);
        assert_eq!(
            list.commands(),
            &[DrawCommand::Circle {
                center: Vec2::new(5.0, 6.0),
                radius: 15.0,
                color: Color::WHITE,
                alpha: 0.6,
                glow: 15.0,
            }]
        );
    }
}
