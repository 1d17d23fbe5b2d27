//! Sensor configuration.
//!
//! Loaded from TOML; every field is optional and falls back to the
//! defaults below, so a file only needs to name what it changes:
//!
//! ```toml
//! resolution = 256
//! range = 12.5
//! field_of_view = 120
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SightfanError};

/// How each sampled direction is traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceMode {
    /// Rays slide along surfaces while the bend stays within `max_angle`.
    #[default]
    Bounce,
    /// One ray per direction, stopping at the first surface.
    Direct,
}

/// Line-of-sight sensor parameters.
///
/// Read-only for the duration of a recomputation. Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Number of angular steps across the field of view; `resolution + 1`
    /// directions are sampled.
    pub resolution: u32,
    /// Maximum path length of a ray, summed over all bounces.
    pub range: f64,
    /// Total angular width swept by the fan.
    pub field_of_view: f64,
    /// Constant yaw added to every sampled direction.
    pub degree_offset: f64,
    /// Limit for both the tilt out of the horizontal plane and the bend at
    /// each bounce.
    pub max_angle: f64,
    /// Yaw of the owning frame, subtracted so the fan keeps its heading
    /// regardless of how the host rotates.
    pub reference_yaw: f64,
    /// Vertical lift applied to every non-center mesh vertex to avoid
    /// z-fighting with the ground.
    pub surface_bias: f64,
    /// Tracing strategy.
    pub mode: TraceMode,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            resolution: 1024,
            range: 25.0,
            field_of_view: 90.0,
            degree_offset: 90.0,
            max_angle: 60.0,
            reference_yaw: 0.0,
            surface_bias: 0.01,
            mode: TraceMode::Bounce,
        }
    }
}

impl SensorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded sensor config from {}", path.display());
        Ok(config)
    }

    /// Number of sampled directions (`resolution + 1`).
    pub fn sample_count(&self) -> usize {
        self.resolution as usize + 1
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("range", self.range),
            ("field_of_view", self.field_of_view),
            ("degree_offset", self.degree_offset),
            ("max_angle", self.max_angle),
            ("reference_yaw", self.reference_yaw),
            ("surface_bias", self.surface_bias),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SightfanError::InvalidConfig(format!(
                "{name} must be finite"
            )));
        }
        if self.resolution == 0 {
            return Err(SightfanError::InvalidConfig(
                "resolution must be at least 1".into(),
            ));
        }
        if self.range <= 0.0 {
            return Err(SightfanError::InvalidConfig(
                "range must be positive".into(),
            ));
        }
        if self.field_of_view <= 0.0 {
            return Err(SightfanError::InvalidConfig(
                "field_of_view must be positive".into(),
            ));
        }
        if self.max_angle <= 0.0 {
            return Err(SightfanError::InvalidConfig(
                "max_angle must be positive".into(),
            ));
        }
        if self.surface_bias < 0.0 {
            return Err(SightfanError::InvalidConfig(
                "surface_bias must not be negative".into(),
            ));
        }
        Ok(())
    }
}
