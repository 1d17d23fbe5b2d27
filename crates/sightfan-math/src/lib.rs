#![warn(missing_docs)]

//! Math types for the sightfan visibility kernel.
//!
//! Thin wrappers around nalgebra providing the points, vectors and
//! directions the fan sampler works with, plus the angle helpers used by
//! the bounce cutoffs and an axis-aligned bounding box for mesh bounds.
//!
//! The vertical axis is `+y`; the fan sweeps the `xz` plane.

mod bbox;

pub use bbox::Aabb3;

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// The vertical axis of the scene.
pub fn up() -> Vec3 {
    Vec3::y()
}

/// Project a vector onto the horizontal plane by dropping its `y` component.
pub fn horizontal(v: &Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Unit direction in the horizontal plane at `degrees` of yaw.
///
/// `0°` points along `+x`, `90°` along `+z`.
pub fn yaw_direction(degrees: f64) -> Vec3 {
    let (s, c) = degrees.to_radians().sin_cos();
    Vec3::new(c, 0.0, s)
}

/// Unsigned angle between two vectors, in degrees (`0..=180`).
///
/// Returns `None` if either vector is degenerate.
pub fn angle_degrees(a: &Vec3, b: &Vec3) -> Option<f64> {
    let denom = a.norm() * b.norm();
    if denom < Tolerance::DEFAULT.linear {
        return None;
    }
    let cos = (a.dot(b) / denom).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Angle between a vector and its horizontal projection, in degrees (`0..=90`).
///
/// A purely vertical vector has a tilt of 90°. Returns `None` for a
/// degenerate vector.
pub fn tilt_degrees(v: &Vec3) -> Option<f64> {
    if Tolerance::DEFAULT.is_degenerate(v) {
        return None;
    }
    // No horizontal projection left to measure against
    Some(angle_degrees(v, &horizontal(v)).unwrap_or(90.0))
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in scene units.
    pub linear: f64,
    /// Angular tolerance in degrees, absorbed by angle limit checks.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 linear, 1e-9 degrees angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-9,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a vector is too short to carry a direction.
    pub fn is_degenerate(&self, v: &Vec3) -> bool {
        v.norm() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_yaw_direction_quadrants() {
        let d = yaw_direction(0.0);
        assert_relative_eq!(d, Vec3::x(), epsilon = 1e-12);
        let d = yaw_direction(90.0);
        assert_relative_eq!(d, Vec3::z(), epsilon = 1e-12);
        let d = yaw_direction(180.0);
        assert_relative_eq!(d, -Vec3::x(), epsilon = 1e-12);
    }

    #[test]
    fn test_yaw_direction_is_unit_and_flat() {
        for deg in [-270.0, -45.0, 13.0, 400.0] {
            let d = yaw_direction(deg);
            assert_relative_eq!(d.norm(), 1.0, epsilon = 1e-12);
            assert_eq!(d.y, 0.0);
        }
    }

    #[test]
    fn test_angle_degrees() {
        let a = Vec3::x();
        assert_relative_eq!(angle_degrees(&a, &Vec3::z()).unwrap(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(angle_degrees(&a, &a).unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(angle_degrees(&a, &-a).unwrap(), 180.0, epsilon = 1e-9);
        let diag = Vec3::new(1.0, 1.0, 0.0);
        assert_relative_eq!(angle_degrees(&a, &diag).unwrap(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_degrees_ignores_length() {
        let a = Vec3::new(3.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 0.0, 0.5);
        assert_relative_eq!(angle_degrees(&a, &b).unwrap(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_degrees_degenerate() {
        assert!(angle_degrees(&Vec3::zeros(), &Vec3::x()).is_none());
        assert!(angle_degrees(&Vec3::x(), &Vec3::zeros()).is_none());
    }

    #[test]
    fn test_tilt_degrees() {
        assert_relative_eq!(tilt_degrees(&Vec3::x()).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(tilt_degrees(&Vec3::y()).unwrap(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(tilt_degrees(&-Vec3::y()).unwrap(), 90.0, epsilon = 1e-9);
        let v = Vec3::new(1.0, 1.0, 0.0);
        assert_relative_eq!(tilt_degrees(&v).unwrap(), 45.0, epsilon = 1e-9);
        let v = Vec3::new(0.0, -1.0, 1.0);
        assert_relative_eq!(tilt_degrees(&v).unwrap(), 45.0, epsilon = 1e-9);
        assert!(tilt_degrees(&Vec3::zeros()).is_none());
    }

    #[test]
    fn test_tilt_matches_angle_to_horizontal() {
        let v = Vec3::new(0.3, 0.7, -0.2);
        let expected = angle_degrees(&v, &horizontal(&v)).unwrap();
        assert_relative_eq!(tilt_degrees(&v).unwrap(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-12, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point3::new(1.001, 2.0, 3.0);
        assert!(!tol.points_equal(&a, &c));
        assert!(tol.is_degenerate(&Vec3::zeros()));
        assert!(!tol.is_degenerate(&Vec3::x()));
    }
}
