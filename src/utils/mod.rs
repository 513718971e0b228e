// src/utils/mod.rs
pub mod geometry;
pub mod util;

pub use geometry::Vector2D;
