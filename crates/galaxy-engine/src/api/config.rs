use serde::{Deserialize, Serialize};

use crate::components::color::Color;

/// Every tunable constant of the galaxy, provided once at construction.
///
/// Hosts usually take [`GalaxyConfig::default`]; a JSON document may
/// override any subset of fields via [`GalaxyConfig::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Palette orbs draw their color from.
    pub orb_colors: Vec<Color>,
    /// Palette burst particles draw their color from.
    pub particle_colors: Vec<Color>,

    /// Smallest orb radius.
    pub orb_base_radius: f32,
    /// Random extra radius added to `orb_base_radius`.
    pub orb_radius_jitter: f32,
    /// Span of each initial velocity component, centered on zero.
    pub orb_speed: f32,
    /// Phase advance per tick (pulsation only).
    pub orb_phase_step: f32,
    /// Alpha swing of the orb pulse.
    pub orb_pulse: f32,
    /// Glow blur radius drawn around each orb.
    pub orb_glow: f32,

    /// Background stars seeded by `Galaxy::initialize`.
    pub decorative_stars: usize,
    pub star_size_min: f32,
    pub star_size_jitter: f32,
    /// Upper bound of the random twinkle phase offset.
    pub twinkle_offset_max: f32,
    /// Twinkle angular rate per wall-clock millisecond.
    pub twinkle_rate: f32,
    pub twinkle_amplitude: f32,
    /// Keep at most this many achievement stars, dropping the oldest.
    /// `None` keeps every star for the life of the session.
    pub max_achievement_stars: Option<usize>,

    /// Particles emitted per completion burst.
    pub burst_size: usize,
    pub particle_speed_min: f32,
    pub particle_speed_max: f32,
    /// Alpha lost per tick.
    pub particle_fade: f32,
    pub particle_radius: f32,

    /// Pointer influence radius.
    pub repel_radius: f32,
    /// Maximum displacement per tick at the pointer itself.
    pub repel_force: f32,

    /// Simulation tick length in seconds (default: 1/60).
    pub tick_seconds: f32,
    /// Cap on ticks simulated for one refresh.
    pub max_ticks_per_frame: u32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            orb_colors: vec![
                Color::hex(0x22d3ee),
                Color::hex(0x818cf8),
                Color::hex(0xf472b6),
                Color::hex(0x34d399),
            ],
            particle_colors: vec![
                Color::hex(0xfbbf24),
                Color::hex(0xf59e0b),
                Color::WHITE,
            ],
            orb_base_radius: 15.0,
            orb_radius_jitter: 5.0,
            orb_speed: 0.5,
            orb_phase_step: 0.02,
            orb_pulse: 0.1,
            orb_glow: 15.0,
            decorative_stars: 50,
            star_size_min: 1.0,
            star_size_jitter: 2.0,
            twinkle_offset_max: 100.0,
            twinkle_rate: 0.003,
            twinkle_amplitude: 0.2,
            max_achievement_stars: None,
            burst_size: 12,
            particle_speed_min: 2.0,
            particle_speed_max: 5.0,
            particle_fade: 0.02,
            particle_radius: 2.0,
            repel_radius: 150.0,
            repel_force: 2.0,
            tick_seconds: 1.0 / 60.0,
            max_ticks_per_frame: 4,
        }
    }
}

impl GalaxyConfig {
    /// Parse a configuration from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
