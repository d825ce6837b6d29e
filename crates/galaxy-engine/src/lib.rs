pub mod api;
pub mod core;
pub mod components;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::GalaxyConfig;
pub use api::galaxy::{Galaxy, Lifecycle, POINTER_OFFSCREEN};
pub use api::types::{parse_tasks, TaskRecord};
pub use components::color::{Color, ColorParseError};
pub use components::orb::Orb;
pub use components::particle::Particle;
pub use components::star::{Star, StarKind};
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use crate::core::theme::{GradientStops, Theme, ThemeName};
pub use crate::core::time::FrameClock;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::draw::{DrawCommand, DrawList};
pub use renderer::traits::Renderer;
