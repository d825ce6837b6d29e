pub mod rng;
pub mod scene;
pub mod theme;
pub mod time;
