use glam::Vec2;

use crate::components::color::Color;

/// One primitive the engine asks a backend to paint.
/// Commands are replayed in order; later commands paint over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Erase the whole surface.
    Clear { width: f32, height: f32 },
    /// Fill the surface with a top-to-bottom linear gradient.
    VerticalGradient {
        width: f32,
        height: f32,
        top: Color,
        bottom: Color,
    },
    /// Filled disc. `glow` is a blur radius in the same color (0 = none).
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: f32,
        glow: f32,
    },
}

/// Per-frame command buffer, reused across frames to avoid reallocating.
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            color,
            alpha,
            glow: 0.0,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
