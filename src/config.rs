//! Viewer configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. A missing file is not an error.

use crate::render::OrbitSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "BEDROOM_VIEWER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "bedroom-viewer.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "3D Bedroom Viewer".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let orbit = OrbitSettings::default();
        Self {
            fov_deg: orbit.fov_y_deg,
            position: [8.0, 6.0, 8.0],
            target: [0.0, 0.0, 0.0],
            min_distance: orbit.min_distance,
            max_distance: orbit.max_distance,
            damping: orbit.damping,
            auto_rotate: orbit.auto_rotate,
            auto_rotate_speed: orbit.auto_rotate_speed,
        }
    }
}

impl CameraConfig {
    pub fn orbit_settings(&self) -> OrbitSettings {
        OrbitSettings {
            fov_y_deg: self.fov_deg,
            damping: self.damping,
            min_distance: self.min_distance.min(self.max_distance),
            max_distance: self.max_distance.max(self.min_distance),
            auto_rotate: self.auto_rotate,
            auto_rotate_speed: self.auto_rotate_speed,
            ..OrbitSettings::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub floating: bool,
    pub background: u32,
    /// JSON catalog replacing the built-in bedroom set.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            floating: true,
            background: 0xf0f8ff,
            catalog_path: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load from `path`. `Ok(None)` when the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Option<Self>, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Self::from_json(&json, path).map(Some)
    }

    /// Resolve the config file from the environment or the working
    /// directory. Problems are logged and defaults are used.
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        match Self::load_from_path(&path) {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Ok(None) => {
                log::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_viewer_setup() {
        let config = ViewerConfig::default();
        assert_eq!(config.background, 0xf0f8ff);
        assert!(config.floating);
        assert_eq!(config.camera.position, [8.0, 6.0, 8.0]);
        let orbit = config.camera.orbit_settings();
        assert_eq!(orbit.min_distance, 5.0);
        assert_eq!(orbit.max_distance, 20.0);
        assert!(orbit.auto_rotate);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let json = r#"{"floating": false, "camera": {"auto_rotate": false}}"#;
        let config = ViewerConfig::from_json(json, Path::new("inline.json")).unwrap();
        assert!(!config.floating);
        assert!(!config.camera.auto_rotate);
        assert_eq!(config.camera.fov_deg, 60.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn malformed_json_reports_path() {
        let err = ViewerConfig::from_json("{ nope", Path::new("broken.json")).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("bedroom_viewer_missing_config.json");
        assert!(ViewerConfig::load_from_path(&path).unwrap().is_none());
    }

    #[test]
    fn load_from_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("bedroom_viewer_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"window": {"width": 800}, "background": 0}"#).unwrap();

        let config = ViewerConfig::load_from_path(&path).unwrap().unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.background, 0);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn inverted_distance_limits_are_ordered() {
        let camera = CameraConfig {
            min_distance: 30.0,
            max_distance: 10.0,
            ..CameraConfig::default()
        };
        let orbit = camera.orbit_settings();
        assert!(orbit.min_distance <= orbit.max_distance);
    }
}
