//! Ray-collider intersection algorithms.
//!
//! Each collider shape has a dedicated closed-form intersector that returns
//! the nearest crossing at or beyond a minimum ray parameter, together with
//! the outward surface normal at that point.

mod cuboid;
mod plane;
mod sphere;

pub use cuboid::intersect_cuboid;
pub use plane::intersect_plane;
pub use sphere::intersect_sphere;

use sightfan_math::Vec3;

/// Result of a ray-collider intersection.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    /// Parameter along the (unit-direction) ray.
    pub t: f64,
    /// Outward unit normal at the hit point.
    pub normal: Vec3,
}
