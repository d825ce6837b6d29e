pub mod color;
pub mod orb;
pub mod particle;
pub mod star;
