use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating or loading a swarm configuration.
///
/// All variants are produced before any optimization work begins; a
/// constructed engine can no longer fail for configuration reasons.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "neighborhood_size must satisfy 1 <= k < num_particles/2; got k={neighborhood_size}, num_particles={num_particles}"
    )]
    InvalidNeighborhoodSize {
        neighborhood_size: usize,
        num_particles: usize,
    },

    #[error("{field} must be at least 1, got 0")]
    ZeroCount { field: &'static str },

    #[error("{field} must satisfy min < max; got ({min}, {max})")]
    InvalidBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("noise_std_dev must be finite and non-negative, got {0}")]
    InvalidNoiseStdDev(f64),

    #[error("missing required key '{0}' in parameter file")]
    MissingKey(&'static str),

    #[error("parameter file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("parameter file {path} is not a key-value mapping")]
    NotAMapping { path: PathBuf },

    #[error("syntax error in parameter file {path}: {source}")]
    Syntax {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to access parameter file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
