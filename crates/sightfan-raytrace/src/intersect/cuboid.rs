//! Ray-box intersection (slab method with face normals).

use sightfan_math::{Aabb3, Vec3};

use super::SurfaceHit;
use crate::Ray;

/// Intersect a ray with an axis-aligned box.
///
/// Returns the nearest crossing with `t >= t_min`: the entry face when the
/// origin is outside, the exit face when it is inside. The normal is the
/// outward normal of the face crossed.
pub fn intersect_cuboid(ray: &Ray, aabb: &Aabb3, t_min: f64) -> Option<SurfaceHit> {
    let o = ray.origin;
    let d = ray.direction.as_ref();

    let mut t_enter = f64::NEG_INFINITY;
    let mut t_exit = f64::INFINITY;
    let mut enter_axis = 0;
    let mut exit_axis = 0;

    for axis in 0..3 {
        if d[axis].abs() < 1e-12 {
            // Parallel to this slab: must already be between the faces
            if o[axis] < aabb.min[axis] || o[axis] > aabb.max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d[axis];
        let mut t0 = (aabb.min[axis] - o[axis]) * inv;
        let mut t1 = (aabb.max[axis] - o[axis]) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_enter {
            t_enter = t0;
            enter_axis = axis;
        }
        if t1 < t_exit {
            t_exit = t1;
            exit_axis = axis;
        }
    }

    if t_enter > t_exit {
        return None;
    }

    let (t, axis, sign) = if t_enter >= t_min {
        (t_enter, enter_axis, -d[enter_axis].signum())
    } else if t_exit >= t_min {
        (t_exit, exit_axis, d[exit_axis].signum())
    } else {
        return None;
    };

    let mut normal = Vec3::zeros();
    normal[axis] = sign;
    Some(SurfaceHit { t, normal })
}
