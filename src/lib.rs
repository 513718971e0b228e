// src/lib.rs
//! 2D vector math and cone-of-vision visibility checks.
//!
//! ```
//! use sightline::{CameraConfig, Vector2D};
//!
//! let camera = CameraConfig::new()
//!     .with_field_of_view(std::f64::consts::FRAC_PI_2)
//!     .with_view_distance(100.0)
//!     .build();
//! assert!(camera.can_see_target(&Vector2D::new(0.0, 50.0)));
//! assert!(!camera.can_see_target(&Vector2D::new(50.0, 50.0)));
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod utils;

pub use camera::Camera2D;
pub use config::CameraConfig;
pub use error::VisionError;
pub use utils::Vector2D;
