//! Ray-plane intersection (closed-form).

use sightfan_math::{Dir3, Point3};

use super::SurfaceHit;
use crate::Ray;

/// Intersect a ray with an infinite plane through `origin` with `normal`.
///
/// Returns `None` if the ray is parallel to the plane or the crossing lies
/// before `t_min`. The reported normal is the plane normal as given.
pub fn intersect_plane(ray: &Ray, origin: &Point3, normal: &Dir3, t_min: f64) -> Option<SurfaceHit> {
    let n = normal.as_ref();
    let denom = ray.direction.as_ref().dot(n);

    // Ray is parallel to plane
    if denom.abs() < 1e-12 {
        return None;
    }

    let t = (origin - ray.origin).dot(n) / denom;
    if t < t_min {
        return None;
    }

    Some(SurfaceHit { t, normal: *n })
}
