//! Read-only exports for debug drawing.
//!
//! Nothing in the fan or mesh pipeline depends on these; a host calls them
//! when it wants to draw the traced rays or mark mesh vertices.

use sightfan_math::Point3;

use crate::fan::Fan;
use crate::mesh::FanMesh;

/// A world-space line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
}

/// World-space segments tracing every polyline of `fan` from `origin`.
///
/// Each non-empty polyline yields `origin → p0` followed by one segment per
/// consecutive pair of points.
pub fn debug_segments(fan: &Fan, origin: &Point3) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(fan.total_points());
    for line in fan {
        let mut start = *origin;
        for p in &line.points {
            let end = origin + p.coords;
            segments.push(Segment { start, end });
            start = end;
        }
    }
    segments
}

/// World-space positions of every mesh vertex, center first.
pub fn vertex_markers(mesh: &FanMesh, origin: &Point3) -> Vec<Point3> {
    (0..mesh.num_vertices())
        .map(|i| origin + mesh.vertex(i).coords)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounce::{Polyline, Termination};
    use crate::mesh::build_mesh;

    fn polyline(points: Vec<Point3>) -> Polyline {
        Polyline {
            points,
            traveled: 0.0,
            termination: Termination::Miss,
        }
    }

    #[test]
    fn test_segments_chain_from_origin() {
        let fan = Fan::from_lines(vec![
            polyline(vec![Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 2.0)]),
            polyline(Vec::new()),
            polyline(vec![Point3::new(0.0, 0.0, 3.0)]),
        ]);
        let origin = Point3::new(10.0, 1.0, 0.0);
        let segments = debug_segments(&fan, &origin);
        assert_eq!(
            segments,
            vec![
                Segment {
                    start: origin,
                    end: Point3::new(11.0, 1.0, 0.0),
                },
                Segment {
                    start: Point3::new(11.0, 1.0, 0.0),
                    end: Point3::new(11.0, 1.0, 2.0),
                },
                Segment {
                    start: origin,
                    end: Point3::new(10.0, 1.0, 3.0),
                },
            ]
        );
    }

    #[test]
    fn test_vertex_markers_offset_by_origin() {
        let fan = Fan::from_lines(vec![
            polyline(vec![Point3::new(2.0, 0.0, 0.0)]),
            polyline(vec![Point3::new(0.0, 0.0, 2.0)]),
        ]);
        let mesh = build_mesh(&fan, 0.0).unwrap();
        let markers = vertex_markers(&mesh, &Point3::new(0.0, 5.0, 0.0));
        assert_eq!(
            markers,
            vec![
                Point3::new(0.0, 5.0, 0.0),
                Point3::new(2.0, 5.0, 0.0),
                Point3::new(0.0, 5.0, 2.0),
            ]
        );
    }
}
