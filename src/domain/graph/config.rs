use serde::{Deserialize, Serialize};

use super::value_objects::{Palette, Palettes, Theme};
use crate::domain::errors::{AppError, ConfigResult};

/// Tunables of the graph view. Every field has a default, so partial JSON
/// documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Pixels per mathematical unit at startup
    pub initial_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale change per wheel notch
    pub zoom_step: f64,
    /// Base stroke width; grid, axes, curve and bracket use multiples of it
    pub line_thickness: f64,
    /// Curve sampling step in mathematical units
    pub sample_step: f64,
    /// `d` below this value hides the bracket letters
    pub min_labelled_distance: f64,
    /// Tick mark half-height as a fraction of the scale
    pub tick_ratio: f64,
    pub palettes: Palettes,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_scale: 50.0,
            min_scale: 10.0,
            max_scale: 100.0,
            zoom_step: 4.0,
            line_thickness: 0.5,
            sample_step: 0.1,
            min_labelled_distance: 0.5,
            tick_ratio: 0.15,
            palettes: Palettes::default(),
        }
    }
}

impl GraphConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| AppError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Scale bounds must be ordered and positive; steps and widths must be
    /// positive and finite.
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("zoom_step", self.zoom_step),
            ("line_thickness", self.line_thickness),
            ("sample_step", self.sample_step),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(AppError::ConfigError(format!("{} must be positive, got {}", name, value)));
            }
        }
        if self.min_scale > self.max_scale {
            return Err(AppError::ConfigError(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        if !self.initial_scale.is_finite() {
            return Err(AppError::ConfigError("initial_scale must be finite".into()));
        }
        Ok(())
    }

    pub fn palette(&self, theme: Theme) -> &Palette {
        self.palettes.get(theme)
    }

    /// Scale limited to `[min_scale, max_scale]`; never panics on unordered bounds.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_lookup_by_theme() {
        let config = GraphConfig::default();
        assert_eq!(config.palette(Theme::Dark).background, "#000000");
        assert_eq!(config.palette(Theme::Light).background, "#ffffff");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GraphConfig::from_json(r#"{ "zoom_step": 8.0 }"#).unwrap();
        assert_eq!(config.zoom_step, 8.0);
        assert_eq!(config.max_scale, 100.0);
        assert_eq!(config.palettes, Palettes::default());
    }

    #[test]
    fn inverted_scale_bounds_are_rejected() {
        let err = GraphConfig::from_json(r#"{ "min_scale": 100, "max_scale": 10 }"#).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn non_positive_steps_are_rejected() {
        for json in [
            r#"{ "sample_step": 0 }"#,
            r#"{ "sample_step": -0.1 }"#,
            r#"{ "zoom_step": 0 }"#,
            r#"{ "line_thickness": -1 }"#,
            r#"{ "min_scale": 0 }"#,
        ] {
            assert!(GraphConfig::from_json(json).is_err(), "accepted {json}");
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GraphConfig::default().validate(), Ok(()));
    }

    #[test]
    fn clamp_scale_tolerates_unordered_bounds() {
        let config = GraphConfig { min_scale: 100.0, max_scale: 10.0, ..GraphConfig::default() };
        assert_eq!(config.clamp_scale(50.0), 10.0);
        assert_eq!(GraphConfig::default().clamp_scale(250.0), 100.0);
    }

    #[test]
    fn partial_palette_json_is_rejected() {
        assert!(GraphConfig::from_json(r##"{ "palettes": { "dark": { "grid": "#fff" } } }"##).is_err());
    }
}
