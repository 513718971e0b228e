//! src/camera/camera2d.rs

use log::{trace, warn};
use rayon::prelude::*;

use crate::config::CameraConfig;
use crate::error::Result;
use crate::utils::util::clamp_cosine;
use crate::utils::Vector2D;

/// A point camera with a cone of vision.
///
/// The camera sees a target when the target is no farther than
/// `view_distance` and lies strictly inside the cone of total width
/// `field_of_view` centered on `orientation`. Occlusion is not considered.
///
/// `orientation` is kept at unit length (or zero, see
/// [`Camera2D::set_orientation`]); `field_of_view` and `view_distance` are
/// kept non-negative by taking the absolute value of whatever is assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    position: Vector2D,
    orientation: Vector2D,
    field_of_view: f64,
    view_distance: f64,
}

impl Default for Camera2D {
    fn default() -> Self {
        Camera2D::from_config(CameraConfig::default())
    }
}

impl Camera2D {
    /// Camera at the origin facing +y with a 180 degree cone and unlimited range.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: CameraConfig) -> Self {
        let mut camera = Camera2D {
            position: config.position,
            orientation: Vector2D::up(),
            field_of_view: 0.0,
            view_distance: 0.0,
        };
        camera.set_orientation(config.orientation);
        camera.set_field_of_view(config.field_of_view);
        camera.set_view_distance(config.view_distance);
        camera
    }

    /// Parses and validates a JSON [`CameraConfig`], then builds the camera.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Camera2D::from_config(CameraConfig::from_json(json)?))
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn orientation(&self) -> Vector2D {
        self.orientation
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn half_field_of_view(&self) -> f64 {
        self.field_of_view / 2.0
    }

    pub fn view_distance(&self) -> f64 {
        self.view_distance
    }

    pub fn set_position(&mut self, position: Vector2D) {
        self.position = position;
    }

    /// Stores the normalized form of `orientation`.
    ///
    /// A zero vector cannot be normalized and is stored as the zero vector.
    /// Every target then reads as 90 degrees off-axis, so the camera sees all
    /// in-range targets when the field of view exceeds π and none otherwise.
    /// Use [`Camera2D::try_set_orientation`] when the input is untrusted.
    pub fn set_orientation(&mut self, orientation: Vector2D) {
        if orientation.is_zero() {
            warn!("Camera orientation set to the zero vector; visibility checks will degrade.");
        }
        self.orientation = orientation.normalized();
    }

    /// Like [`Camera2D::set_orientation`], but leaves the camera untouched and
    /// returns [`VisionError::ZeroVector`](crate::error::VisionError::ZeroVector) for a zero-length input.
    pub fn try_set_orientation(&mut self, orientation: Vector2D) -> Result<()> {
        self.orientation = orientation.try_normalized()?;
        Ok(())
    }

    /// Faces the camera along `(cos radians, sin radians)`.
    pub fn set_orientation_from_angle(&mut self, radians: f64) {
        self.orientation = Vector2D::new(radians.cos(), radians.sin());
    }

    /// Sets the total cone width in radians. Negative input is stored as its
    /// absolute value.
    pub fn set_field_of_view(&mut self, radians: f64) {
        if radians < 0.0 {
            warn!("Negative field of view {} corrected to {}.", radians, radians.abs());
        }
        self.field_of_view = radians.abs();
    }

    /// Negative input is stored as its absolute value.
    pub fn set_view_distance(&mut self, distance: f64) {
        if distance < 0.0 {
            warn!("Negative view distance {} corrected to {}.", distance, distance.abs());
        }
        self.view_distance = distance.abs();
    }

    /// Offset from the camera to `target` and its length, or `None` when the
    /// two coincide per [`Vector2D::equals`].
    fn sight_line(&self, target: &Vector2D) -> Option<(Vector2D, f64)> {
        if target.equals(&self.position) {
            return None;
        }
        let to_target = target.subtract(self.position);
        Some((to_target, to_target.magnitude()))
    }

    /// Angle between the facing direction and a non-zero offset of the given length.
    fn angle_along(&self, to_target: &Vector2D, distance: f64) -> f64 {
        // orientation is unit length, so only the target distance divides.
        let cosine = self.orientation.dot_product(to_target) / distance;
        clamp_cosine(cosine).acos()
    }

    /// Unsigned angle in `[0, π]` between the facing direction and the
    /// direction to `target`, or `None` when `target` coincides with the
    /// camera position (per [`Vector2D::equals`]).
    pub fn angle_to_target(&self, target: &Vector2D) -> Option<f64> {
        self.sight_line(target)
            .map(|(to_target, distance)| self.angle_along(&to_target, distance))
    }

    /// Determines whether `target` is within sight of the camera.
    ///
    /// Range is inclusive (`distance <= view_distance`); the cone edge is
    /// exclusive (`angle < field_of_view / 2`). A camera never sees its own
    /// position.
    pub fn can_see_target(&self, target: &Vector2D) -> bool {
        let Some((to_target, distance)) = self.sight_line(target) else {
            trace!("Target {} coincides with camera; not visible.", target);
            return false;
        };

        if distance > self.view_distance {
            trace!(
                "Target {} out of range ({} > {}).",
                target,
                distance,
                self.view_distance
            );
            return false;
        }

        let visible = self.angle_along(&to_target, distance) < self.half_field_of_view();
        trace!("Target {} visible: {}.", target, visible);
        visible
    }

    /// Returns the visible targets, in input order. Targets are checked in
    /// parallel.
    pub fn visible_targets(&self, targets: &[Vector2D]) -> Vec<Vector2D> {
        targets
            .par_iter()
            .filter(|target| self.can_see_target(target))
            .copied()
            .collect()
    }

    pub fn count_visible(&self, targets: &[Vector2D]) -> usize {
        targets
            .par_iter()
            .filter(|target| self.can_see_target(target))
            .count()
    }
}
