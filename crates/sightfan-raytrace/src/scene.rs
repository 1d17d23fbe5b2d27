//! A minimal collider scene answering nearest-hit queries.
//!
//! Colliders are tested one after another; the scene is meant for tests,
//! tools and small levels, not as a replacement for a physics engine's
//! broad phase.

use sightfan_math::{Aabb3, Dir3, Point3, Vec3};

use crate::intersect::{intersect_cuboid, intersect_plane, intersect_sphere, SurfaceHit};
use crate::{Ray, RayHit, Raycast};

/// Default minimum hit distance.
///
/// A ray restarted on a surface would otherwise re-hit that surface at
/// `t == 0` and never advance.
pub const DEFAULT_MIN_DISTANCE: f64 = 1e-6;

/// A solid shape a ray can hit.
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    /// Infinite plane.
    Plane {
        /// Any point on the plane.
        origin: Point3,
        /// Outward normal.
        normal: Dir3,
    },
    /// Sphere.
    Sphere {
        /// Center point.
        center: Point3,
        /// Radius.
        radius: f64,
    },
    /// Axis-aligned box.
    Cuboid(Aabb3),
}

impl Collider {
    /// Plane through `origin`; `normal` is normalized.
    pub fn plane(origin: Point3, normal: Vec3) -> Self {
        Self::Plane {
            origin,
            normal: Dir3::new_normalize(normal),
        }
    }

    /// Sphere at `center`.
    pub fn sphere(center: Point3, radius: f64) -> Self {
        Self::Sphere { center, radius }
    }

    /// Axis-aligned box spanning `min..max`.
    pub fn cuboid(min: Point3, max: Point3) -> Self {
        Self::Cuboid(Aabb3::new(min, max))
    }

    /// Intersect this collider, ignoring crossings before `t_min`.
    pub fn intersect(&self, ray: &Ray, t_min: f64) -> Option<SurfaceHit> {
        match self {
            Collider::Plane { origin, normal } => intersect_plane(ray, origin, normal, t_min),
            Collider::Sphere { center, radius } => intersect_sphere(ray, center, *radius, t_min),
            Collider::Cuboid(aabb) => intersect_cuboid(ray, aabb, t_min),
        }
    }
}

/// A collection of colliders.
#[derive(Debug, Clone)]
pub struct Scene {
    colliders: Vec<Collider>,
    min_distance: f64,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }

    /// Set the minimum distance below which hits are ignored.
    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance.max(0.0);
        self
    }

    /// Add a collider.
    pub fn add(&mut self, collider: Collider) -> &mut Self {
        self.colliders.push(collider);
        self
    }

    /// Number of colliders.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// True if the scene has no colliders.
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Trace a ray and return only the closest hit within `max_distance`.
    pub fn trace_closest(&self, ray: &Ray, max_distance: f64) -> Option<RayHit> {
        let mut closest: Option<SurfaceHit> = None;
        let mut closest_t = max_distance;

        for collider in &self.colliders {
            if let Some(hit) = collider.intersect(ray, self.min_distance) {
                if hit.t <= closest_t {
                    closest_t = hit.t;
                    closest = Some(hit);
                }
            }
        }

        closest.map(|hit| RayHit::new(hit.t, ray.at(hit.t), hit.normal))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Collider> for Scene {
    fn from_iter<I: IntoIterator<Item = Collider>>(iter: I) -> Self {
        Self {
            colliders: iter.into_iter().collect(),
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl Raycast for Scene {
    fn raycast(&self, origin: &Point3, direction: &Vec3, max_distance: f64) -> Option<RayHit> {
        let ray = Ray::new(*origin, *direction)?;
        self.trace_closest(&ray, max_distance)
    }
}
