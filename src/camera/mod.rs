// src/camera/mod.rs
pub mod camera2d;

pub use camera2d::Camera2D;
