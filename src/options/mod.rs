//! Runtime configuration with TOML preset support.
//!
//! All tweakable settings live here and serialize to/from TOML, so a
//! preset file can override any subset of fields and leave the rest at
//! their defaults.

mod camera;

use std::path::Path;

pub use camera::{CameraOptions, ControllerMode};
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `fovy`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
mode = "flying"
fovy = 60.0
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.mode, ControllerMode::Flying);
        assert_eq!(opts.camera.fovy, 60.0);
        // Everything else should be default
        assert_eq!(opts.camera.znear, 0.1);
        assert_eq!(opts.camera.zfar, 100.0);
        assert_eq!(opts.camera.orbit_speed, 0.2);
    }

    #[test]
    fn build_camera_applies_projection() {
        let opts = Options::default();
        let cam = opts.camera.build_camera(800, 600);
        assert_eq!(cam.aspect_ratio(), 800.0 / 600.0);
        assert_eq!(cam.vertical_fov(), 45.0_f32.to_radians());
        assert_eq!(cam.near(), 0.1);
        assert_eq!(cam.far(), 100.0);
        assert!(matches!(cam, crate::camera::Camera::Orbit(_)));
    }

    #[test]
    fn build_camera_selects_flying_mode() {
        let opts = Options {
            camera: CameraOptions {
                mode: ControllerMode::Flying,
                flying_speed: 4.0,
                ..CameraOptions::default()
            },
        };
        let cam = opts.camera.build_camera(640, 480);
        let crate::camera::Camera::Flying(fly) = cam else {
            panic!("expected flying controller");
        };
        assert_eq!(fly.speed(), 4.0);
    }

    #[test]
    fn zero_height_viewport_is_clamped() {
        let opts = Options::default();
        let cam = opts.camera.build_camera(800, 0);
        assert!(cam.aspect_ratio().is_finite());
    }
}
