//! Error types for fan computation.

use thiserror::Error;

/// Errors that can occur while configuring or recomputing a sensor.
///
/// Raycast misses are ordinary data and never surface here.
#[derive(Error, Debug)]
pub enum SightfanError {
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The fan has more vertices than a `u32` index can address.
    #[error("mesh too large: {vertices} vertices exceed u32 indices")]
    MeshTooLarge {
        /// Vertex count that failed to convert.
        vertices: usize,
    },

    /// Configuration file is not valid TOML for a sensor.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for sightfan operations.
pub type Result<T> = std::result::Result<T, SightfanError>;
