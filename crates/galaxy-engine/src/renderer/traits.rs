//! Renderer trait for host backends.
//!
//! The engine never touches a drawing surface. Each frame it fills a
//! [`DrawList`]; a backend (the browser Canvas 2D backend in `galaxy-web`,
//! or a test double) replays it.

use super::draw::DrawList;

/// Contract for anything that can paint a galaxy frame.
pub trait Renderer {
    /// Backend-specific failure (e.g. a rejected canvas call).
    type Error;

    /// Backend identifier (e.g., "canvas2d").
    fn backend(&self) -> &'static str;

    /// Paint one complete frame.
    fn render(&mut self, frame: &DrawList) -> Result<(), Self::Error>;

    /// Resize the backing surface, in device pixels.
    fn resize(&mut self, width: u32, height: u32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw::DrawCommand;

    /// Counts circles and remembers the last surface size.
    #[derive(Default)]
    struct CountingRenderer {
        circles: usize,
        size: (u32, u32),
    }

    impl Renderer for CountingRenderer {
        type Error = std::convert::Infallible;

        fn backend(&self) -> &'static str {
            "counting"
        }

        fn render(&mut self, frame: &DrawList) -> Result<(), Self::Error> {
            self.circles += frame
                .commands()
                .iter()
                .filter(|c| matches!(c, DrawCommand::Circle { .. }))
                .count();
            Ok(())
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.size = (width, height);
        }
    }

    #[test]
    fn backend_replays_frame() {
        let mut list = DrawList::new();
        list.push(DrawCommand::Clear { width: 1.0, height: 1.0 });
        list.circle(glam::Vec2::ZERO, 1.0, crate::Color::WHITE, 1.0);

        let mut renderer = CountingRenderer::default();
        renderer.render(&list).unwrap();
        renderer.resize(640, 480);
        assert_eq!(renderer.circles, 1);
        assert_eq!(renderer.size, (640, 480));
        assert_eq!(renderer.backend(), "counting");
    }
}
