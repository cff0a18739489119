//! Controller tunables with TOML preset support.
//!
//! Gesture sensitivities live here rather than as compile-time constants so
//! they can be tuned per application and shipped as TOML presets.

mod camera;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArcballError;

/// Top-level options container. Sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `zoom_base`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Gesture sensitivity parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self, ArcballError> {
        let content = std::fs::read_to_string(path).map_err(ArcballError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| ArcballError::OptionsParse(e.to_string()))?;
        if let Err(e) = options.camera.validate() {
            log::warn!("Rejected options from {}: {e}", path.display());
            return Err(e);
        }
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file (or its parent
    /// directory) cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ArcballError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArcballError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ArcballError::Io)?;
        }
        std::fs::write(path, content).map_err(ArcballError::Io)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("arcball-options-{tag}-{}", std::process::id()))
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
zoom_base = 2.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.zoom_base, 2.0);
        assert_eq!(opts.camera.rotate_scale, 2.0);
        assert_eq!(opts.camera.roll_scale, 1.5);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = scratch_dir("presets");
        let mut opts = Options::default();
        opts.camera.rotate_scale = 3.5;
        opts.save(&dir.join("fast.toml")).unwrap();

        let loaded = Options::load(&dir.join("fast.toml")).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_rejects_invalid_values() {
        let dir = scratch_dir("invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[camera]\nzoom_base = -1.0\n").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(ArcballError::InvalidOption(_))
        ));

        std::fs::write(&path, "[camera\n").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(ArcballError::OptionsParse(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(ArcballError::Io(_))
        ));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("camera"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("rotate_scale").is_some());
        assert!(camera.get("roll_scale").is_some());
        assert!(camera.get("zoom_base").is_some());
    }

    #[test]
    fn schema_ranges_match_validation() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let camera = &schema_value["properties"]["camera"]["properties"];
        for (field, range) in [
            ("rotate_scale", CameraOptions::ROTATE_SCALE_RANGE),
            ("roll_scale", CameraOptions::ROLL_SCALE_RANGE),
            ("zoom_base", CameraOptions::ZOOM_BASE_RANGE),
        ] {
            let min = camera[field]["minimum"].as_f64().unwrap();
            let max = camera[field]["maximum"].as_f64().unwrap();
            assert!((min - f64::from(*range.start())).abs() < 1e-6, "{field}");
            assert!((max - f64::from(*range.end())).abs() < 1e-6, "{field}");
        }
    }
}
