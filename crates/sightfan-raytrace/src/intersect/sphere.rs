//! Ray-sphere intersection (quadratic equation).

use sightfan_math::Point3;

use super::SurfaceHit;
use crate::Ray;

/// Intersect a ray with a sphere.
///
/// Returns the nearest crossing with `t >= t_min`: the entry point when the
/// origin is outside, the exit point when it is inside. The normal always
/// points away from the center.
pub fn intersect_sphere(ray: &Ray, center: &Point3, radius: f64, t_min: f64) -> Option<SurfaceHit> {
    let oc = ray.origin - center;
    let d = ray.direction.as_ref();

    // Unit direction, so a == 1
    let b = oc.dot(d);
    let c = oc.dot(&oc) - radius * radius;

    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t = [-b - sqrt_disc, -b + sqrt_disc]
        .into_iter()
        .find(|&t| t >= t_min)?;

    let point = ray.at(t);
    let normal = (point - center) / radius;
    Some(SurfaceHit { t, normal })
}
