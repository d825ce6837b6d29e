use glam::Vec2;

use crate::api::config::GalaxyConfig;
use crate::core::rng::Rng;
use crate::core::theme::Theme;
use crate::renderer::draw::DrawList;

/// Why a star exists. Decorative stars survive every `sync`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarKind {
    /// Background decoration seeded at initialization.
    Decorative,
    /// A completed task.
    Achievement,
}

/// Static twinkling point.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    /// Phase offset so neighbouring stars do not twinkle in unison.
    pub twinkle_offset: f32,
    pub kind: StarKind,
}

impl Star {
    pub fn spawn(pos: Vec2, kind: StarKind, config: &GalaxyConfig, rng: &mut Rng) -> Self {
        Self {
            pos,
            size: config.star_size_min + rng.next_f32() * config.star_size_jitter,
            twinkle_offset: rng.next_f32() * config.twinkle_offset_max,
            kind,
        }
    }

    /// Opacity at wall-clock time `now_ms`, never negative.
    pub fn alpha(&self, theme: &Theme, now_ms: f64, config: &GalaxyConfig) -> f32 {
        let angle = now_ms * config.twinkle_rate as f64 + self.twinkle_offset as f64;
        (theme.star_alpha + angle.sin() as f32 * config.twinkle_amplitude).max(0.0)
    }

    pub fn draw(&self, list: &mut DrawList, theme: &Theme, now_ms: f64, config: &GalaxyConfig) {
        list.circle(self.pos, self.size, theme.star_color, self.alpha(theme, now_ms, config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::{DARK, LIGHT};
    use crate::renderer::draw::DrawCommand;

    fn fixed_star() -> Star {
        Star {
            pos: Vec2::new(10.0, 20.0),
            size: 2.0,
            twinkle_offset: 0.0,
            kind: StarKind::Achievement,
        }
    }

    #[test]
    fn spawn_sizes_in_range() {
        let config = GalaxyConfig::default();
        let mut rng = Rng::new(5);
        for _ in 0..200 {
            let s = Star::spawn(Vec2::ZERO, StarKind::Decorative, &config, &mut rng);
            assert!(s.size >= 1.0 && s.size <= 3.0);
            assert!(s.twinkle_offset >= 0.0 && s.twinkle_offset <= 100.0);
        }
    }

    #[test]
    fn twinkle_oscillates_around_theme_alpha() {
        let config = GalaxyConfig::default();
        let star = fixed_star();
        assert!((star.alpha(&DARK, 0.0, &config) - 0.5).abs() < 1e-6);

        // sin peaks at quarter period: pi/2 / 0.003 ms.
        let peak_ms = std::f64::consts::FRAC_PI_2 / 0.003;
        assert!((star.alpha(&DARK, peak_ms, &config) - 0.7).abs() < 1e-3);
    }

    #[test]
    fn alpha_is_clamped_at_zero() {
        let config = GalaxyConfig {
            twinkle_amplitude: 1.0,
            ..GalaxyConfig::default()
        };
        let star = fixed_star();
        let trough_ms = 3.0 * std::f64::consts::FRAC_PI_2 / 0.003;
        assert_eq!(star.alpha(&LIGHT, trough_ms, &config), 0.0);
    }

    #[test]
    fn draw_uses_current_theme_color() {
        let config = GalaxyConfig::default();
        let star = fixed_star();
        let mut list = DrawList::new();
        star.draw(&mut list, &DARK, 0.0, &config);
        star.draw(&mut list, &LIGHT, 0.0, &config);
        let colors: Vec<_> = list
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Circle { color, .. } => *color,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(colors, vec![DARK.star_color, LIGHT.star_color]);
    }
}
