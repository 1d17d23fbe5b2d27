//! Per-direction ray traversal.
//!
//! A ray leaves the sensor, and each time it strikes a surface its
//! direction is replaced by the component tangent to that surface, so it
//! slides along walls and up or down gentle slopes. Traversal stops when
//! the summed path reaches the range, the ray tilts too far out of the
//! horizontal plane, or a bounce would bend it by more than `max_angle`.

use sightfan_math::{angle_degrees, tilt_degrees, Point3, Tolerance, Vec3};
use sightfan_raytrace::Raycast;

use crate::config::SensorConfig;

/// Why a polyline stopped growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The summed path length reached `range`.
    RangeExhausted,
    /// The travel direction tilted `max_angle` or more out of the horizontal plane.
    TiltLimit,
    /// The ray left the scene; the last point sits at the remaining range.
    Miss,
    /// The surface would have bent the ray by more than `max_angle`.
    BendLimit,
    /// The surface normal was parallel to the ray, leaving no tangent to follow.
    DegenerateBounce,
    /// A hit did not advance the ray. Its point is kept unless it repeats
    /// the previous one.
    Stalled,
    /// The travel direction had zero length; the last point is where it stalled.
    DegenerateDirection,
    /// Direct tracing stopped at the first surface.
    Blocked,
}

/// The path of one sampled direction.
///
/// Points are relative to the sensor origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Points in travel order.
    pub points: Vec<Point3>,
    /// Path length summed over all segments, starting at the origin.
    pub traveled: f64,
    /// Why traversal stopped.
    pub termination: Termination,
}

impl Polyline {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if traversal stopped before the first raycast.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Final point, if any.
    pub fn last(&self) -> Option<&Point3> {
        self.points.last()
    }
}

/// Redirect `direction` along a surface with normal `normal`.
///
/// `normal × (direction × normal)` is the component of `direction` tangent
/// to the surface (scaled by `|normal|²`). It is zero when the ray meets the
/// surface head-on.
pub fn reflect_along_surface(direction: &Vec3, normal: &Vec3) -> Vec3 {
    let v = direction.cross(normal);
    normal.cross(&v)
}

/// Trace one direction from `origin`, bouncing along surfaces.
///
/// Every hit contributes its point, including one that fails to advance
/// the ray, unless it repeats the previous point. A zero-length `direction`
/// has no heading to march along, so its miss point is the current origin
/// itself; sampled directions are always unit length and never take that
/// path.
pub fn trace_polyline<R>(origin: &Point3, direction: Vec3, config: &SensorConfig, scene: &R) -> Polyline
where
    R: Raycast + ?Sized,
{
    let tol = Tolerance::DEFAULT;
    let local = |p: Point3| Point3::from(p - origin);

    let mut points = Vec::new();
    let mut current_origin = *origin;
    let mut current_direction = direction;
    let mut traveled = 0.0;

    let termination = loop {
        if traveled >= config.range {
            break Termination::RangeExhausted;
        }
        let Some(tilt) = tilt_degrees(&current_direction) else {
            // Nothing to extend along
            points.push(local(current_origin));
            break Termination::DegenerateDirection;
        };
        if tilt >= config.max_angle {
            break Termination::TiltLimit;
        }

        let remaining = config.range - traveled;
        // A hit reported beyond the remaining range counts as a miss
        let hit = scene
            .raycast(&current_origin, &current_direction, remaining)
            .filter(|hit| !(hit.distance > remaining));
        let Some(hit) = hit else {
            let end = current_origin + current_direction.normalize() * remaining;
            points.push(local(end));
            traveled = config.range;
            break Termination::Miss;
        };

        // Also rejects NaN distances
        if !(hit.distance > tol.linear) {
            let point = local(hit.point);
            let repeated = points.last().map_or(false, |last| tol.points_equal(last, &point));
            if !repeated && point.coords.iter().all(|c| c.is_finite()) {
                points.push(point);
            }
            break Termination::Stalled;
        }
        points.push(local(hit.point));
        traveled += hit.distance;
        current_origin = hit.point;

        let reflected = reflect_along_surface(&current_direction, &hit.normal);
        if tol.is_degenerate(&reflected) {
            break Termination::DegenerateBounce;
        }
        match angle_degrees(&reflected, &current_direction) {
            Some(bend) if bend <= config.max_angle + tol.angular => current_direction = reflected.normalize(),
            Some(_) => break Termination::BendLimit,
            None => break Termination::DegenerateBounce,
        }
    };

    Polyline {
        points,
        traveled,
        termination,
    }
}

/// Trace one direction from `origin` without bouncing.
///
/// The polyline always holds a single point: the first hit, or the point
/// at full range on a miss.
pub fn trace_direct<R>(origin: &Point3, direction: Vec3, config: &SensorConfig, scene: &R) -> Polyline
where
    R: Raycast + ?Sized,
{
    let (point, traveled, termination) = match scene.raycast(origin, &direction, config.range) {
        Some(hit) => (
            Point3::from(hit.point - origin),
            hit.distance.clamp(0.0, config.range),
            Termination::Blocked,
        ),
        None => {
            let dir = direction.try_normalize(Tolerance::DEFAULT.linear).unwrap_or_else(Vec3::zeros);
            (Point3::from(dir * config.range), config.range, Termination::Miss)
        }
    };
    Polyline {
        points: vec![point],
        traveled,
        termination,
    }
}
