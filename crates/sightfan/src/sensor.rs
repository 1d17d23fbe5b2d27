//! The line-of-sight sensor.
//!
//! Owns a validated configuration and the results of its most recent
//! recomputation. The host calls [`LineOfSight::recompute`] from its update
//! loop whenever the sensor or the scene has moved; every call rebuilds the
//! fan and mesh from scratch.

use sightfan_math::Point3;
use sightfan_raytrace::Raycast;

use crate::config::{SensorConfig, TraceMode};
use crate::error::Result;
use crate::fan::{compute_fan_for_mode, Fan};
use crate::mesh::{build_direct_mesh, build_mesh, FanMesh};

/// A line-of-sight sensor and its latest visibility mesh.
#[derive(Debug, Clone)]
pub struct LineOfSight {
    config: SensorConfig,
    fan: Fan,
    mesh: FanMesh,
}

impl LineOfSight {
    /// Create a sensor. Nothing is traced until the first recompute.
    pub fn new(config: SensorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fan: Fan::default(),
            mesh: FanMesh::new(),
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Replace the configuration. The previous results are kept until the
    /// next recompute.
    pub fn set_config(&mut self, config: SensorConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Update the yaw of the owning frame.
    pub fn set_reference_yaw(&mut self, degrees: f64) -> Result<()> {
        let config = SensorConfig {
            reference_yaw: degrees,
            ..self.config.clone()
        };
        self.set_config(config)
    }

    /// Fan from the latest recompute, origin-relative.
    pub fn fan(&self) -> &Fan {
        &self.fan
    }

    /// Mesh from the latest recompute, in the sensor's local frame.
    pub fn mesh(&self) -> &FanMesh {
        &self.mesh
    }

    /// Trace the fan from `origin` against `scene` and rebuild the mesh.
    pub fn recompute<R>(&mut self, origin: &Point3, scene: &R) -> Result<&FanMesh>
    where
        R: Raycast + Sync + ?Sized,
    {
        let fan = compute_fan_for_mode(origin, &self.config, scene)?;
        let mesh = match self.config.mode {
            TraceMode::Bounce => build_mesh(&fan, self.config.surface_bias)?,
            TraceMode::Direct => build_direct_mesh(&fan, self.config.surface_bias)?,
        };

        log::debug!(
            "recomputed fan: {} samples, {} points, {} triangles",
            fan.len(),
            fan.total_points(),
            mesh.num_triangles()
        );
        if fan.is_blind() {
            log::warn!(
                "every sample of the fan is empty; check max_angle ({}) against the sensor heading",
                self.config.max_angle
            );
        }

        self.fan = fan;
        self.mesh = mesh;
        Ok(&self.mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SightfanError;
    use sightfan_math::Vec3;
    use sightfan_raytrace::{Collider, RayHit, Scene};

    fn miss(_: &Point3, _: &Vec3, _: f64) -> Option<RayHit> {
        None
    }

    fn config() -> SensorConfig {
        SensorConfig {
            resolution: 8,
            range: 5.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = LineOfSight::new(SensorConfig {
            field_of_view: -10.0,
            ..config()
        })
        .unwrap_err();
        assert!(matches!(err, SightfanError::InvalidConfig(_)));
    }

    #[test]
    fn test_starts_empty() {
        let sensor = LineOfSight::new(config()).unwrap();
        assert!(sensor.fan().is_empty());
        assert_eq!(sensor.mesh().num_vertices(), 0);
    }

    #[test]
    fn test_recompute_replaces_results() {
        let mut sensor = LineOfSight::new(config()).unwrap();
        let mesh = sensor.recompute(&Point3::origin(), &miss).unwrap();
        assert_eq!(mesh.num_vertices(), 10);
        assert_eq!(mesh.num_triangles(), 8);

        let mut scene = Scene::new();
        scene.add(Collider::plane(Point3::new(0.0, 0.0, 2.0), -Vec3::z()));
        sensor.recompute(&Point3::origin(), &scene).unwrap();
        assert_eq!(sensor.fan().len(), 9);
        assert!(sensor
            .fan()
            .iter()
            .all(|line| line.last().map_or(false, |p| p.z <= 2.0 + 1e-9)));
    }

    #[test]
    fn test_scene_mesh_is_consistent() {
        let scene: Scene = [
            Collider::plane(Point3::origin(), Vec3::y()),
            Collider::cuboid(Point3::new(-1.0, 0.0, 3.0), Point3::new(1.0, 2.0, 4.0)),
            Collider::sphere(Point3::new(4.0, 0.5, 4.0), 1.5),
        ]
        .into_iter()
        .collect();
        let mut sensor = LineOfSight::new(SensorConfig {
            resolution: 128,
            range: 12.0,
            ..Default::default()
        })
        .unwrap();
        sensor.recompute(&Point3::new(0.0, 0.5, 0.0), &scene).unwrap();

        let (fan, mesh) = (sensor.fan(), sensor.mesh());
        assert_eq!(fan.len(), 129);
        assert_eq!(mesh.num_vertices(), 1 + fan.total_points());
        assert_eq!(mesh.num_triangles(), crate::mesh::triangle_count(fan));
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.num_vertices()));
        assert!(fan.iter().all(|line| line.traveled <= 12.0 + 1e-9));
    }

    #[test]
    fn test_set_config_validates() {
        let mut sensor = LineOfSight::new(config()).unwrap();
        assert!(sensor
            .set_config(SensorConfig {
                range: 0.0,
                ..config()
            })
            .is_err());
        assert_eq!(sensor.config().range, 5.0);
        sensor.set_reference_yaw(45.0).unwrap();
        assert_eq!(sensor.config().reference_yaw, 45.0);
    }

    #[test]
    fn test_reference_yaw_turns_fan() {
        let mut sensor = LineOfSight::new(config()).unwrap();
        sensor.recompute(&Point3::origin(), &miss).unwrap();
        let before = sensor.fan().lines[4].points[0];
        // Default offset 90 faces +z; subtracting 90 more faces +x
        sensor.set_reference_yaw(90.0).unwrap();
        sensor.recompute(&Point3::origin(), &miss).unwrap();
        let after = sensor.fan().lines[4].points[0];
        assert!((before - Point3::new(0.0, 0.0, 5.0)).norm() < 1e-9);
        assert!((after - Point3::new(5.0, 0.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_direct_mode_uses_plain_fan() {
        let mut sensor = LineOfSight::new(SensorConfig {
            mode: TraceMode::Direct,
            ..config()
        })
        .unwrap();
        let mesh = sensor.recompute(&Point3::origin(), &miss).unwrap();
        assert_eq!(mesh.num_vertices(), 10);
        assert_eq!(mesh.num_triangles(), 8);
        assert_eq!(mesh.indices[..3], [1, 0, 2]);
    }
}
