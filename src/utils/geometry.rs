// src/utils/geometry.rs

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::config::VECTOR_TOLERANCE;
use crate::error::{Result, VisionError};
use crate::utils::util::{clamp_cosine, within_tolerance};

/// A two dimensional vector of `f64` components.
///
/// Every operation returns a new value; only `set_x` and `set_y` mutate.
/// Results for NaN or infinite components are undefined.
///
/// `PartialEq` is exact. Use [`Vector2D::equals`] for the tolerant comparison
/// used by the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Unit vector pointing along +y, the default camera facing.
    pub fn up() -> Self {
        Self::new(0.0, 1.0)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn dot_product(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length. Uses `hypot`, so finite components never overflow
    /// to infinity or underflow to zero on the way.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// True only for an exact zero magnitude.
    pub fn is_zero(&self) -> bool {
        self.magnitude() == 0.0
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// A zero-length vector has no direction, so the zero vector is returned
    /// instead of dividing by zero. Callers that need a guaranteed unit vector
    /// should use [`Vector2D::try_normalized`].
    pub fn normalized(&self) -> Vector2D {
        let length = self.magnitude();
        if length == 0.0 {
            return Vector2D::zero();
        }
        Vector2D::new(self.x / length, self.y / length)
    }

    /// Like [`Vector2D::normalized`], but reports the zero-vector case.
    pub fn try_normalized(&self) -> Result<Vector2D> {
        if self.is_zero() {
            return Err(VisionError::ZeroVector);
        }
        Ok(self.normalized())
    }

    /// Approximate equality: each axis must differ by less than
    /// [`VECTOR_TOLERANCE`]. This is a per-component test, not a Euclidean
    /// distance test.
    pub fn equals(&self, other: &Vector2D) -> bool {
        within_tolerance(self.x, other.x, VECTOR_TOLERANCE)
            && within_tolerance(self.y, other.y, VECTOR_TOLERANCE)
    }

    pub fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise `self - other`.
    pub fn subtract(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    pub fn scaled(&self, factor: f64) -> Vector2D {
        Vector2D::new(self.x * factor, self.y * factor)
    }

    pub fn distance_to(&self, other: &Vector2D) -> f64 {
        other.subtract(*self).magnitude()
    }

    /// Unsigned angle in radians, in `[0, π]`, between `self` and `other`.
    /// Returns 0 if either vector has zero length.
    pub fn angle_to(&self, other: &Vector2D) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        // Compare directions only; the raw dot product of long vectors overflows.
        let cosine = self.normalized().dot_product(&other.normalized());
        clamp_cosine(cosine).acos()
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        self.scaled(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}
