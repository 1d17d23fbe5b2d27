#![warn(missing_docs)]

//! Ray casting for the sightfan visibility kernel.
//!
//! The fan sampler only needs one primitive from the host scene: the
//! nearest hit along a ray within a maximum distance. This crate defines
//! that seam as the [`Raycast`] trait and ships a small reference scene
//! built from closed-form colliders, useful for tests and for hosts that
//! have no physics engine of their own.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and unit direction
//! - [`RayHit`] - Nearest intersection: point, distance and outward normal
//! - [`Raycast`] - The collaborator interface consumed by the fan sampler
//! - [`intersect`] - Ray-collider intersection algorithms
//! - [`Scene`] - Linear-scan collection of [`Collider`]s
//!
//! # Example
//!
//! ```
//! use sightfan_math::{Point3, Vec3};
//! use sightfan_raytrace::{Collider, Raycast, Scene};
//!
//! let mut scene = Scene::new();
//! scene.add(Collider::plane(Point3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)));
//!
//! let hit = scene
//!     .raycast(&Point3::origin(), &Vec3::x(), 10.0)
//!     .expect("wall is in range");
//! assert!((hit.distance - 5.0).abs() < 1e-12);
//! ```

mod ray;
mod scene;
pub mod intersect;

pub use ray::{Ray, RayHit};
pub use scene::{Collider, Scene};

use sightfan_math::{Point3, Vec3};

/// Nearest-hit ray query against a scene.
///
/// Implementations must return the closest intersection along `direction`
/// from `origin` with `0 <= distance <= max_distance`, and the surface
/// normal at that point, unit length and oriented outward. `direction` need
/// not be normalized. A miss is `None`, never an error.
pub trait Raycast {
    /// Cast a ray and return the nearest hit, if any.
    fn raycast(&self, origin: &Point3, direction: &Vec3, max_distance: f64) -> Option<RayHit>;
}

impl<F> Raycast for F
where
    F: Fn(&Point3, &Vec3, f64) -> Option<RayHit>,
{
    fn raycast(&self, origin: &Point3, direction: &Vec3, max_distance: f64) -> Option<RayHit> {
        self(origin, direction, max_distance)
    }
}
