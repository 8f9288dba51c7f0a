use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Required keys in a parameter file, in the order they are checked on load.
pub const REQUIRED_KEYS: [&str; 11] = [
    "dimensions",
    "num_particles",
    "max_iterations",
    "w",
    "c1",
    "c2",
    "neighborhood_size",
    "position_bounds",
    "velocity_bounds",
    "noise_std_dev",
    "dt",
];

/// Immutable configuration for a local-best PSO run.
///
/// Constructed once (directly or via [`SwarmConfig::load`]) and shared by
/// reference with every component; nothing mutates it after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwarmConfig {
    pub dimensions: usize,
    pub num_particles: usize,
    pub max_iterations: usize,
    /// Inertia weight: fraction of previous velocity retained each step.
    pub w: f64,
    /// Cognitive coefficient: attraction toward the particle's own best.
    pub c1: f64,
    /// Social coefficient: attraction toward the neighborhood best.
    pub c2: f64,
    /// Ring-neighborhood radius k; neighbors are the k particles on each side.
    pub neighborhood_size: usize,
    /// (min, max) clamp applied component-wise to every position.
    pub position_bounds: (f64, f64),
    /// (min, max) clamp applied component-wise to every velocity.
    pub velocity_bounds: (f64, f64),
    /// Standard deviation of the zero-mean Gaussian velocity perturbation.
    pub noise_std_dev: f64,
    /// Integration time step for position updates.
    pub dt: f64,
}

impl SwarmConfig {
    /// Checks the configuration invariants, failing fast before any
    /// optimization work begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions == 0 {
            return Err(ConfigError::ZeroCount {
                field: "dimensions",
            });
        }
        if self.num_particles == 0 {
            return Err(ConfigError::ZeroCount {
                field: "num_particles",
            });
        }
        // Ring invariant: 1 <= k < num_particles / 2.
        if self.neighborhood_size == 0 || 2 * self.neighborhood_size >= self.num_particles {
            return Err(ConfigError::InvalidNeighborhoodSize {
                neighborhood_size: self.neighborhood_size,
                num_particles: self.num_particles,
            });
        }
        Self::validate_bounds("position_bounds", self.position_bounds)?;
        Self::validate_bounds("velocity_bounds", self.velocity_bounds)?;
        if !self.noise_std_dev.is_finite() || self.noise_std_dev < 0.0 {
            return Err(ConfigError::InvalidNoiseStdDev(self.noise_std_dev));
        }
        Ok(())
    }

    fn validate_bounds(field: &'static str, (min, max): (f64, f64)) -> Result<(), ConfigError> {
        if min < max {
            Ok(())
        } else {
            Err(ConfigError::InvalidBounds { field, min, max })
        }
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Syntax {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads and validates a configuration from a JSON parameter file.
    ///
    /// Reports the first absent key in [`REQUIRED_KEYS`] order, so callers
    /// get a stable, deterministic diagnostic for incomplete files.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: serde_json::Value =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Syntax {
                path: path.to_path_buf(),
                source,
            })?;
        let mapping = value.as_object().ok_or_else(|| ConfigError::NotAMapping {
            path: path.to_path_buf(),
        })?;
        for key in REQUIRED_KEYS {
            if !mapping.contains_key(key) {
                return Err(ConfigError::MissingKey(key));
            }
        }
        let config: Self =
            serde_json::from_value(value).map_err(|source| ConfigError::Syntax {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn base_config() -> SwarmConfig {
        SwarmConfig {
            dimensions: 2,
            num_particles: 10,
            max_iterations: 5,
            w: 0.7,
            c1: 1.5,
            c2: 1.5,
            neighborhood_size: 2,
            position_bounds: (-5.0, 5.0),
            velocity_bounds: (-0.5, 0.5),
            noise_std_dev: 0.05,
            dt: 1.0,
        }
    }

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("swarm_solver_{}_{}", std::process::id(), name))
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(base_config().validate().is_ok());
    }

    #[test_case(0; "zero radius")]
    #[test_case(5; "radius equal to half the swarm")]
    #[test_case(7; "radius larger than half the swarm")]
    fn invalid_neighborhood_size_is_rejected(neighborhood_size: usize) {
        let config = SwarmConfig {
            neighborhood_size,
            ..base_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNeighborhoodSize { .. })
        ));
    }

    #[test_case((5.0, -5.0); "inverted")]
    #[test_case((1.0, 1.0); "degenerate")]
    fn invalid_position_bounds_are_rejected(position_bounds: (f64, f64)) {
        let config = SwarmConfig {
            position_bounds,
            ..base_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds {
                field: "position_bounds",
                ..
            })
        ));
    }

    #[test]
    fn negative_noise_std_dev_is_rejected() {
        let config = SwarmConfig {
            noise_std_dev: -0.1,
            ..base_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNoiseStdDev(_))
        ));
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_file("round_trip.json");
        let config = base_config();
        config.save(&path).unwrap();
        let loaded = SwarmConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn load_reports_first_missing_key() {
        let path = temp_file("missing_key.json");
        let mut value = serde_json::to_value(base_config()).unwrap();
        let mapping = value.as_object_mut().unwrap();
        // Drop two keys; the earlier one in REQUIRED_KEYS order must be named.
        mapping.remove("w");
        mapping.remove("dt");
        std::fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();
        let err = SwarmConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::MissingKey("w")));
    }

    #[test]
    fn load_reports_absent_file() {
        let err = SwarmConfig::load(temp_file("does_not_exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_reports_syntax_errors() {
        let path = temp_file("syntax_error.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = SwarmConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::Syntax { .. }));
    }

    #[test]
    fn load_rejects_non_mapping_files() {
        let path = temp_file("non_mapping.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let err = SwarmConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::NotAMapping { .. }));
    }

    #[test]
    fn load_validates_the_loaded_config() {
        let path = temp_file("invalid_loaded.json");
        let config = SwarmConfig {
            neighborhood_size: 9,
            ..base_config()
        };
        // Bypass validation by serializing the struct directly.
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
        let err = SwarmConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            err,
            ConfigError::InvalidNeighborhoodSize { .. }
        ));
    }
}
