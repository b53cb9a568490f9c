//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level converter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Resampling settings.
    pub conversion: ConversionConfig,
    /// Output file naming.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Resampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConversionConfig {
    /// Spread destination rows over a thread pool.
    pub parallel: bool,
    /// Thread pool size (0 = one per core).
    pub threads: usize,
}

/// Output path configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Inserted between the input stem and the target name when no output
    /// path is given (`image.hdr` -> `image_HDRI.hdr`).
    pub separator: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write a JSON log file in debug builds.
    pub log_to_file: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: 0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: "_".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

impl Config {
    /// Path of `config.ron` inside `config_dir`.
    #[must_use]
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE_NAME)
    }

    /// Read `config.ron` from `config_dir`, writing the defaults there first
    /// if it does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(config_dir);
        if !path.exists() {
            let config = Self::default();
            config.save(config_dir)?;
            log::info!("Wrote default converter config to {}", path.display());
            return Ok(config);
        }

        let config = Self::read(&path)?;
        log::info!("Using converter config {}", path.display());
        Ok(config)
    }

    /// Write `self` to `config_dir/config.ron`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        let text = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(Self::path_in(config_dir), text).map_err(ConfigError::WriteError)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&text).map_err(ConfigError::ParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.conversion.parallel);
        assert_eq!(config.conversion.threads, 0);
        assert_eq!(config.output.separator, "_");
        assert_eq!(config.debug.log_level, "info");
        assert!(!config.debug.log_to_file);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = ron::from_str("(conversion: (threads: 4))").unwrap();
        assert_eq!(config.conversion.threads, 4);
        assert!(config.conversion.parallel);
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.debug, DebugConfig::default());
    }

    #[test]
    fn test_unknown_section_ignored() {
        let config: Config = ron::from_str("(window: (width: 800))").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("hdrcube");
        let config = Config::load_or_create(&config_dir).unwrap();
        assert_eq!(config, Config::default());
        assert!(Config::path_in(&config_dir).is_file());
    }

    #[test]
    fn test_saved_values_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.conversion.parallel = false;
        config.output.separator = "-".to_string();
        config.debug.log_to_file = true;

        config.save(dir.path()).unwrap();
        assert_eq!(Config::load_or_create(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_edited_file_wins_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        Config::load_or_create(dir.path()).unwrap();
        std::fs::write(Config::path_in(dir.path()), "(output: (separator: \".\"))").unwrap();

        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config.output.separator, ".");
        assert_eq!(config.conversion, ConversionConfig::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Config::path_in(dir.path()), "(conversion: [").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)), "got {err}");
    }
}
