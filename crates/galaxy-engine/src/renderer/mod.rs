pub mod draw;
pub mod traits;

pub use draw::{DrawCommand, DrawList};
pub use traits::Renderer;
