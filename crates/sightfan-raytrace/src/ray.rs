//! Ray representation.

use sightfan_math::{Dir3, Point3, Tolerance, Vec3};

/// A ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// Returns `None` if `direction` is too short to normalize.
    pub fn new(origin: Point3, direction: Vec3) -> Option<Self> {
        let direction = Dir3::try_new(direction, Tolerance::DEFAULT.linear)?;
        Some(Self { origin, direction })
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }
}

/// Nearest intersection reported by a [`crate::Raycast`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance travelled along the ray to the hit point.
    pub distance: f64,
    /// 3D intersection point.
    pub point: Point3,
    /// Surface normal at the intersection (unit length, pointing outward).
    pub normal: Vec3,
}

impl RayHit {
    /// Create a new ray hit.
    pub fn new(distance: f64, point: Point3, normal: Vec3) -> Self {
        Self {
            distance,
            point,
            normal,
        }
    }
}
