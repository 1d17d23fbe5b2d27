#![warn(missing_docs)]

//! Line-of-sight visibility fans.
//!
//! A sensor sweeps a horizontal field of view with evenly spaced rays. Each
//! ray that strikes a surface at a shallow enough angle slides along it,
//! following ramps and corners, until its range is spent. The resulting
//! polylines are stitched into a triangle mesh that covers what the sensor
//! can see.
//!
//! # Architecture
//!
//! - [`SensorConfig`] - Validated parameters, loadable from TOML
//! - [`sample`] - Direction sampling across the field of view
//! - [`bounce`] - One polyline per direction, with the bounce rule
//! - [`fan`] - All polylines of one recomputation
//! - [`mesh`] - Fan triangulation into flat vertex and index buffers
//! - [`LineOfSight`] - Sensor state and the per-frame entry point
//! - [`debug`] - Segments and markers for debug drawing
//!
//! # Example
//!
//! ```
//! use sightfan::{Collider, LineOfSight, Point3, Scene, SensorConfig, Vec3};
//!
//! let mut scene = Scene::new();
//! scene.add(Collider::plane(Point3::new(0.0, 0.0, 6.0), -Vec3::z()));
//!
//! let config = SensorConfig {
//!     resolution: 16,
//!     range: 10.0,
//!     ..Default::default()
//! };
//! let mut sensor = LineOfSight::new(config).unwrap();
//! let mesh = sensor.recompute(&Point3::origin(), &scene).unwrap();
//! assert_eq!(mesh.num_vertices(), 1 + sensor.fan().total_points());
//! ```

pub mod bounce;
pub mod config;
pub mod debug;
pub mod error;
pub mod fan;
pub mod mesh;
pub mod sample;
pub mod sensor;

pub use bounce::{reflect_along_surface, trace_direct, trace_polyline, Polyline, Termination};
pub use config::{SensorConfig, TraceMode};
pub use debug::{debug_segments, vertex_markers, Segment};
pub use error::{Result, SightfanError};
pub use fan::{compute_direct_fan, compute_fan, compute_fan_for_mode, Fan};
pub use mesh::{build_direct_mesh, build_mesh, triangle_count, FanMesh};
pub use sample::{sample_degrees, sample_directions, DirectionSample};
pub use sensor::LineOfSight;

pub use sightfan_math::{Aabb3, Point3, Vec3};
pub use sightfan_raytrace::{Collider, RayHit, Raycast, Scene};
