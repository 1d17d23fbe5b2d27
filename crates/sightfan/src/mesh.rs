//! Fan to triangle mesh conversion.
//!
//! Vertex 0 is the sensor itself; every polyline point follows in fan
//! order. Each pair of neighboring polylines is stitched with two passes:
//!
//! 1. every point of the left line is fanned toward the previous point (or
//!    the center, for the first point) and the first point of the right line;
//! 2. the remaining points of the right line are bridged against the last
//!    point of the left line.
//!
//! Together these cover the wedge between the two lines even when their
//! lengths differ. Empty lines are skipped, so the seam runs between the
//! nearest non-empty neighbors.

use sightfan_math::{up, Aabb3, Point3, Vec3};

use crate::bounce::Polyline;
use crate::error::{Result, SightfanError};
use crate::fan::Fan;

/// Output triangle mesh, in the sensor's local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FanMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
    /// Flat array of vertex normals: `[nx0, ny0, nz0, ...]` (f32). Same length as vertices.
    pub normals: Vec<f32>,
    /// Bounds of all vertices.
    pub bounds: Aabb3,
}

impl FanMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
            bounds: Aabb3::empty(),
        }
    }

    /// Create an empty mesh with room for the given vertex and triangle counts.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices * 3),
            indices: Vec::with_capacity(triangles * 3),
            normals: Vec::with_capacity(vertices * 3),
            bounds: Aabb3::empty(),
        }
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Position of vertex `i`.
    pub fn vertex(&self, i: usize) -> Point3 {
        Point3::new(
            f64::from(self.vertices[i * 3]),
            f64::from(self.vertices[i * 3 + 1]),
            f64::from(self.vertices[i * 3 + 2]),
        )
    }

    /// Normal of vertex `i`.
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(
            f64::from(self.normals[i * 3]),
            f64::from(self.normals[i * 3 + 1]),
            f64::from(self.normals[i * 3 + 2]),
        )
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    fn push_vertex(&mut self, p: &Point3) {
        self.vertices.push(p.x as f32);
        self.vertices.push(p.y as f32);
        self.vertices.push(p.z as f32);
    }

    fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Recompute [`FanMesh::bounds`] from the vertex buffer.
    pub fn recalculate_bounds(&mut self) {
        let points: Vec<Point3> = (0..self.num_vertices()).map(|i| self.vertex(i)).collect();
        self.bounds = Aabb3::from_points(&points);
    }

    /// Recompute smooth vertex normals from the triangle buffer.
    ///
    /// Each vertex normal is the area-weighted sum of its incident face
    /// normals. Vertices with no incident triangles (or only degenerate
    /// ones) get the up axis.
    pub fn recalculate_normals(&mut self) {
        let n = self.num_vertices();
        let mut sums = vec![Vec3::zeros(); n];

        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let (pa, pb, pc) = (self.vertex(a), self.vertex(b), self.vertex(c));
            // Cross product length is twice the area, so this is area-weighted
            let face = (pb - pa).cross(&(pc - pa));
            sums[a] += face;
            sums[b] += face;
            sums[c] += face;
        }

        self.normals.clear();
        for sum in sums {
            let normal = sum.try_normalize(1e-12).unwrap_or_else(up);
            self.normals.push(normal.x as f32);
            self.normals.push(normal.y as f32);
            self.normals.push(normal.z as f32);
        }
    }
}

impl Default for FanMesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of triangles [`build_mesh`] emits for `fan`.
pub fn triangle_count(fan: &Fan) -> usize {
    let lengths: Vec<usize> = fan.iter().map(Polyline::len).filter(|&n| n > 0).collect();
    lengths.windows(2).map(|pair| pair[0] + pair[1] - 1).sum()
}

/// Convert a vertex count or offset into a mesh index.
fn mesh_index(n: usize) -> Result<u32> {
    u32::try_from(n).map_err(|_| SightfanError::MeshTooLarge { vertices: n })
}

/// First vertex index and point count of every non-empty line, in fan order.
fn line_spans(fan: &Fan) -> Result<Vec<(u32, u32)>> {
    let mut spans = Vec::with_capacity(fan.len());
    let mut offset = 1;
    for line in fan {
        if !line.is_empty() {
            spans.push((mesh_index(offset)?, mesh_index(line.len())?));
        }
        offset += line.len();
    }
    Ok(spans)
}

/// Triangulate a fan.
///
/// Every non-center vertex is lifted by `surface_bias` along the up axis.
/// Empty lines carry no vertices and are stepped over: the last non-empty
/// line before them is stitched directly to the next non-empty one.
///
/// Fails with [`SightfanError::MeshTooLarge`] if the vertex count does not
/// fit a `u32` index.
pub fn build_mesh(fan: &Fan, surface_bias: f64) -> Result<FanMesh> {
    let vertex_count = 1 + fan.total_points();
    mesh_index(vertex_count)?;
    let spans = line_spans(fan)?;

    let lift = up() * surface_bias;
    let mut mesh = FanMesh::with_capacity(vertex_count, triangle_count(fan));

    mesh.push_vertex(&Point3::origin());
    for line in fan {
        for p in &line.points {
            mesh.push_vertex(&(p + lift));
        }
    }

    for pair in spans.windows(2) {
        let ((offset, len_a), (first_of_next, len_b)) = (pair[0], pair[1]);
        let last_of_this = offset + len_a - 1;

        for t in 0..len_a {
            let prev = if t == 0 { 0 } else { offset + t - 1 };
            mesh.push_triangle(prev, first_of_next, offset + t);
        }
        for s in 0..len_b - 1 {
            mesh.push_triangle(first_of_next + s, first_of_next + s + 1, last_of_this);
        }
    }

    mesh.recalculate_bounds();
    mesh.recalculate_normals();
    Ok(mesh)
}

/// Triangulate a fan of single-point lines as a plain triangle fan.
///
/// Only the first point of each line is used. Consecutive non-empty lines
/// form one triangle with the center.
pub fn build_direct_mesh(fan: &Fan, surface_bias: f64) -> Result<FanMesh> {
    mesh_index(1 + fan.len())?;

    let lift = up() * surface_bias;
    let mut mesh = FanMesh::with_capacity(1 + fan.len(), fan.len().saturating_sub(1));

    mesh.push_vertex(&Point3::origin());
    let mut slots: Vec<Option<u32>> = Vec::with_capacity(fan.len());
    let mut next: u32 = 1;
    for line in fan {
        match line.points.first() {
            Some(p) => {
                mesh.push_vertex(&(p + lift));
                slots.push(Some(next));
                next += 1;
            }
            None => slots.push(None),
        }
    }

    for pair in slots.windows(2) {
        if let [Some(a), Some(b)] = pair {
            mesh.push_triangle(*a, 0, *b);
        }
    }

    mesh.recalculate_bounds();
    mesh.recalculate_normals();
    Ok(mesh)
}
