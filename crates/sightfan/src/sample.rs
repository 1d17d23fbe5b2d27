//! Direction sampling across the field of view.

use sightfan_math::{yaw_direction, Vec3};

use crate::config::SensorConfig;

/// One sampled direction of the fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionSample {
    /// Index in `0..=resolution`.
    pub index: u32,
    /// Yaw of the direction in degrees.
    pub degrees: f64,
    /// Horizontal unit direction `(cos, 0, sin)`.
    pub direction: Vec3,
}

/// Yaw in degrees of sample `index`.
///
/// Sweeps `field_of_view` centered on `degree_offset - reference_yaw`.
pub fn sample_degrees(config: &SensorConfig, index: u32) -> f64 {
    let t = f64::from(index) / f64::from(config.resolution);
    t * config.field_of_view - config.field_of_view / 2.0 - config.reference_yaw
        + config.degree_offset
}

/// All `resolution + 1` directions in fan order.
pub fn sample_directions(config: &SensorConfig) -> Vec<DirectionSample> {
    (0..=config.resolution)
        .map(|index| {
            let degrees = sample_degrees(config, index);
            DirectionSample {
                index,
                degrees,
                direction: yaw_direction(degrees),
            }
        })
        .collect()
}
