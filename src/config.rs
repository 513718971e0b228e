// src/config.rs
//! Crate-wide constants and the camera configuration record.
//!
//! `CameraConfig` enumerates every construction option of a
//! [`Camera2D`](crate::camera::Camera2D) together with its default. It can be
//! built in code through the `with_*` methods or deserialized from JSON, in
//! which case any missing field keeps its default.

use serde::{Deserialize, Serialize};

use crate::camera::Camera2D;
use crate::error::{Result, VisionError};
use crate::utils::Vector2D;

pub const PI: f64 = std::f64::consts::PI;

/// Largest per-component difference still treated as equal by
/// [`Vector2D::equals`].
pub const VECTOR_TOLERANCE: f64 = 0.0001;

/// Full cone width in radians (180 degrees).
pub const DEFAULT_FIELD_OF_VIEW: f64 = PI;

/// Effectively unlimited range.
pub const DEFAULT_VIEW_DISTANCE: f64 = f64::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vector2D,
    /// Need not be unit length; the camera normalizes it.
    pub orientation: Vector2D,
    /// Radians. The sign is dropped when the camera is built.
    pub field_of_view: f64,
    /// The sign is dropped when the camera is built.
    pub view_distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vector2D::zero(),
            orientation: Vector2D::up(),
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            view_distance: DEFAULT_VIEW_DISTANCE,
        }
    }
}

impl CameraConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Vector2D) -> Self {
        self.position = position;
        self
    }

    pub fn with_orientation(mut self, orientation: Vector2D) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_field_of_view(mut self, radians: f64) -> Self {
        self.field_of_view = radians;
        self
    }

    pub fn with_view_distance(mut self, distance: f64) -> Self {
        self.view_distance = distance;
        self
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// ```
    /// use sightline::config::CameraConfig;
    ///
    /// let config = CameraConfig::from_json(r#"{ "view_distance": 100.0 }"#).unwrap();
    /// assert_eq!(config.view_distance, 100.0);
    /// assert_eq!(config.field_of_view, std::f64::consts::PI);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CameraConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects NaN and infinite values, which the visibility math does not
    /// define. Negative angles and distances are accepted.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("position.x", self.position.x),
            ("position.y", self.position.y),
            ("orientation.x", self.orientation.x),
            ("orientation.y", self.orientation.y),
            ("field_of_view", self.field_of_view),
            ("view_distance", self.view_distance),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(VisionError::NonFinite { field, value });
            }
        }
        Ok(())
    }

    pub fn build(self) -> Camera2D {
        Camera2D::from_config(self)
    }
}

impl From<&Camera2D> for CameraConfig {
    fn from(camera: &Camera2D) -> Self {
        Self {
            position: camera.position(),
            orientation: camera.orientation(),
            field_of_view: camera.field_of_view(),
            view_distance: camera.view_distance(),
        }
    }
}
