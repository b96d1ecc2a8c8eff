//! Scene settings
//!
//! Every value has a built-in default; a JSON file may override any subset.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::{BALL_RADIUS, FIELD_TOP};

/// Scene construction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Ball radius (also drives the dip size)
    pub ball_radius: f32,
    /// Viewport y of the field's top edge
    pub field_top: f32,
    /// Initial viewport y of the ball center
    pub ball_start_y: f32,

    // === Colors ===
    pub field_color: [f32; 4],
    pub ball_color: [f32; 4],

    // === Tessellation ===
    /// Max distance between a curve and its flattened polyline, in pixels
    pub tolerance: f32,
    /// Triangle count for the ball
    pub ball_segments: u32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            field_top: FIELD_TOP,
            ball_start_y: 0.0,

            field_color: [0.0, 0.0, 1.0, 1.0],
            ball_color: [1.0, 0.0, 0.0, 1.0],

            tolerance: 0.1,
            ball_segments: 48,
        }
    }
}

impl SceneSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Replace values the geometry cannot work with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            log::warn!("Ball radius {} is not positive, using {}", self.ball_radius, defaults.ball_radius);
            self.ball_radius = defaults.ball_radius;
        }
        if !self.field_top.is_finite() {
            log::warn!("Field top {} is not finite, using {}", self.field_top, defaults.field_top);
            self.field_top = defaults.field_top;
        }
        if !self.ball_start_y.is_finite() {
            self.ball_start_y = defaults.ball_start_y;
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            log::warn!("Tolerance {} is not positive, using {}", self.tolerance, defaults.tolerance);
            self.tolerance = defaults.tolerance;
        }
        // A fan needs at least a triangle
        self.ball_segments = self.ball_segments.max(3);

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = SceneSettings::from_json(r#"{ "ball_radius": 40.0 }"#).unwrap();
        assert_eq!(settings.ball_radius, 40.0);
        assert_eq!(settings.field_top, FIELD_TOP);
        assert_eq!(settings.field_color, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_invalid_json() {
        assert!(SceneSettings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_sanitized() {
        let settings = SceneSettings {
            ball_radius: -5.0,
            tolerance: 0.0,
            ball_segments: 1,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.ball_radius, BALL_RADIUS);
        assert_eq!(settings.tolerance, 0.1);
        assert_eq!(settings.ball_segments, 3);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = SceneSettings::load(Path::new("/nonexistent/liquid-field.json"));
        assert_eq!(settings, SceneSettings::default());
    }
}
