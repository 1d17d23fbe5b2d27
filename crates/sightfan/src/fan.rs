//! Fan computation: one polyline per sampled direction.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use sightfan_math::Point3;
use sightfan_raytrace::Raycast;

use crate::bounce::{trace_direct, trace_polyline, Polyline};
use crate::config::{SensorConfig, TraceMode};
use crate::error::Result;
use crate::sample::{sample_directions, DirectionSample};

/// Polylines in sample order; neighbors in the vector are neighbors in the mesh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fan {
    /// One polyline per sampled direction.
    pub lines: Vec<Polyline>,
}

impl Fan {
    /// Wrap polylines that are already in sample order.
    pub fn from_lines(lines: Vec<Polyline>) -> Self {
        Self { lines }
    }

    /// Number of polylines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the fan holds no polylines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Polylines in sample order.
    pub fn iter(&self) -> std::slice::Iter<'_, Polyline> {
        self.lines.iter()
    }

    /// Sum of all polyline lengths, in points.
    pub fn total_points(&self) -> usize {
        self.lines.iter().map(Polyline::len).sum()
    }

    /// True if no polyline produced a point.
    pub fn is_blind(&self) -> bool {
        self.lines.iter().all(Polyline::is_empty)
    }
}

impl<'a> IntoIterator for &'a Fan {
    type Item = &'a Polyline;
    type IntoIter = std::slice::Iter<'a, Polyline>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Compute the bouncing fan for a sensor at `origin`.
///
/// Polyline points are relative to `origin`.
pub fn compute_fan<R>(origin: &Point3, config: &SensorConfig, scene: &R) -> Result<Fan>
where
    R: Raycast + Sync + ?Sized,
{
    config.validate()?;
    Ok(trace_samples(config, |sample| {
        trace_polyline(origin, sample.direction, config, scene)
    }))
}

/// Compute a fan of single-hit polylines, with no bouncing.
pub fn compute_direct_fan<R>(origin: &Point3, config: &SensorConfig, scene: &R) -> Result<Fan>
where
    R: Raycast + Sync + ?Sized,
{
    config.validate()?;
    Ok(trace_samples(config, |sample| {
        trace_direct(origin, sample.direction, config, scene)
    }))
}

/// Compute the fan the configured [`TraceMode`] asks for.
pub fn compute_fan_for_mode<R>(origin: &Point3, config: &SensorConfig, scene: &R) -> Result<Fan>
where
    R: Raycast + Sync + ?Sized,
{
    match config.mode {
        TraceMode::Bounce => compute_fan(origin, config, scene),
        TraceMode::Direct => compute_direct_fan(origin, config, scene),
    }
}

/// Trace every sample, collecting results by index.
fn trace_samples<F>(config: &SensorConfig, trace: F) -> Fan
where
    F: Fn(&DirectionSample) -> Polyline + Sync,
{
    let samples = sample_directions(config);

    #[cfg(feature = "parallel")]
    let lines: Vec<Polyline> = samples.par_iter().map(&trace).collect();
    #[cfg(not(feature = "parallel"))]
    let lines: Vec<Polyline> = samples.iter().map(&trace).collect();

    if log::log_enabled!(log::Level::Trace) {
        for (sample, line) in samples.iter().zip(&lines) {
            log::trace!(
                "sample {} at {:.2}°: {} points, traveled {:.3}, {:?}",
                sample.index,
                sample.degrees,
                line.len(),
                line.traveled,
                line.termination
            );
        }
    }

    Fan { lines }
}
