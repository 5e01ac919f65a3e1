//! # Engine Configuration
//!
//! Configuration structures for the engine's subsystems. All of them are
//! plain `serde` types and can be persisted as TOML or RON through the
//! [`Config`] trait.
//!
//! - **Engine**: log filter and the nested subsystem sections
//! - **Assets**: search paths used to resolve relative asset names
//! - **Frames**: fixed timestep and frame count for the main loop

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// # Asset Configuration
///
/// Controls where relative asset paths are looked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directories searched, in order, for relative asset paths
    pub search_paths: Vec<String>,
}

impl AssetConfig {
    /// Create a new asset configuration
    pub fn new() -> Self {
        Self {
            search_paths: vec![
                "resources/models".to_string(),
                "resources".to_string(),
                ".".to_string(),
            ],
        }
    }

    /// Put `dir` in front of the existing search paths
    pub fn with_search_path(mut self, dir: impl Into<String>) -> Self {
        self.search_paths.insert(0, dir.into());
        self
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Frame Configuration
///
/// Drives the fixed-step loop that calls `process` and `draw` on scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Seconds passed to `process` every frame
    pub fixed_delta: f32,
    /// Number of frames to run; `None` runs until the host stops the loop
    pub frame_count: Option<u32>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            fixed_delta: 1.0 / 60.0,
            frame_count: Some(60),
        }
    }
}

/// # Engine Configuration
///
/// Top-level configuration applications load at start-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Asset system configuration
    pub assets: AssetConfig,
    /// Frame loop configuration
    pub frames: FrameConfig,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            assets: AssetConfig::default(),
            frames: FrameConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the fixed timestep and frame count
    pub fn with_frames(mut self, fixed_delta: f32, frame_count: Option<u32>) -> Self {
        self.frames = FrameConfig { fixed_delta, frame_count };
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.frames.fixed_delta.is_finite() && self.frames.fixed_delta > 0.0) {
            return Err(format!("fixed_delta must be positive, got {}", self.frames.fixed_delta));
        }
        if self.assets.search_paths.is_empty() {
            return Err("at least one asset search path is required".to_string());
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("raster_engine_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_delta_rejected() {
        let config = EngineConfig::new().with_frames(0.0, Some(1));
        assert!(config.validate().is_err());
        let config = EngineConfig::new().with_frames(f32::NAN, None);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("engine.toml");
        let config = EngineConfig::new()
            .with_log_level("debug")
            .with_frames(0.5, Some(4));
        config.save_to_file(&path).unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = temp_path("engine.ron");
        let config = EngineConfig {
            assets: AssetConfig::new().with_search_path("meshes"),
            ..EngineConfig::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.assets.search_paths[0], "meshes");
        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_str_as("log_level = \"warn\"\n", ConfigFormat::Toml).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.frames, FrameConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load_or_default(temp_path("missing.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
