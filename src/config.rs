//! Engine configuration loaded from TOML.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! [canvas]
//! width = 320.0
//! height = 320.0
//!
//! [colors]
//! primary = "#3b82f6"
//!
//! [[curves.lightness]]
//! position = 0.0
//! lightness = 0.95
//!
//! [[split.dark_chroma]]
//! position = 1.0
//! saturation = 0.8
//! range = "dark"
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    apply::SplitCurves,
    color::Component,
    curve::{ControlPoint, RangeType},
    error::Result,
    models::Rgb,
    plot::Canvas,
};

/// A control point as written in a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointConfig {
    /// Normalized position along the curve.
    pub position: Component,
    /// Lightness at the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightness: Option<Component>,
    /// Saturation multiplier at the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<Component>,
    /// The half of the scale the point was placed for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeType>,
}

impl From<&PointConfig> for ControlPoint {
    fn from(value: &PointConfig) -> Self {
        let point = ControlPoint::new(value.position, value.lightness, value.saturation);
        match value.range {
            Some(range) => point.in_range(range),
            None => point,
        }
    }
}

impl From<&ControlPoint> for PointConfig {
    fn from(value: &ControlPoint) -> Self {
        Self {
            position: value.position,
            lightness: value.lightness(),
            saturation: value.saturation(),
            range: value.range,
        }
    }
}

fn to_control_points(points: &[PointConfig]) -> Vec<ControlPoint> {
    points.iter().map(ControlPoint::from).collect()
}

/// Size of the curve editor in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width in pixels.
    pub width: Component,
    /// Height in pixels.
    pub height: Component,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        let canvas = Canvas::default();
        Self {
            width: canvas.size.width,
            height: canvas.size.height,
        }
    }
}

/// Curves applied over the whole scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurvesConfig {
    /// Lightness curve.
    pub lightness: Vec<PointConfig>,
    /// Chroma curve.
    pub chroma: Vec<PointConfig>,
}

/// Curves applied separately to the light and dark halves of the scale.
/// Empty curves use the built in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitCurvesConfig {
    /// Lightness curve for shades 50 to 500.
    pub light_lightness: Vec<PointConfig>,
    /// Lightness curve for shades 600 to 950.
    pub dark_lightness: Vec<PointConfig>,
    /// Chroma curve for shades 50 to 500.
    pub light_chroma: Vec<PointConfig>,
    /// Chroma curve for shades 600 to 950.
    pub dark_chroma: Vec<PointConfig>,
}

/// Base colors of a design system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// The primary color.
    pub primary: Option<Rgb>,
    /// The accent color.
    pub accent: Option<Rgb>,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The curve editor.
    pub canvas: CanvasConfig,
    /// Whole scale curves.
    pub curves: CurvesConfig,
    /// Light and dark curves.
    pub split: SplitCurvesConfig,
    /// Base colors.
    pub colors: ColorsConfig,
}

impl EngineConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading engine configuration");

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        debug!(
            lightness_points = config.curves.lightness.len(),
            chroma_points = config.curves.chroma.len(),
            "Loaded engine configuration"
        );
        Ok(config)
    }

    /// The curve editor canvas.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.canvas.width, self.canvas.height)
    }

    /// The whole scale lightness curve.
    pub fn lightness_points(&self) -> Vec<ControlPoint> {
        to_control_points(&self.curves.lightness)
    }

    /// The whole scale chroma curve.
    pub fn chroma_points(&self) -> Vec<ControlPoint> {
        to_control_points(&self.curves.chroma)
    }

    /// The light and dark curves.
    pub fn split_curves(&self) -> SplitCurves {
        SplitCurves {
            light_lightness: to_control_points(&self.split.light_lightness),
            dark_lightness: to_control_points(&self.split.dark_lightness),
            light_chroma: to_control_points(&self.split.light_chroma),
            dark_chroma: to_control_points(&self.split.dark_chroma),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply::apply_split_color_curves, error::Error};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.canvas(), Canvas::default());
        assert!(config.lightness_points().is_empty());
        assert_eq!(config.colors.primary, None);
    }

    #[test]
    fn parse_full_document() {
        let config = EngineConfig::from_toml_str(
            r##"
            [canvas]
            width = 400.0

            [colors]
            primary = "#3b82f6"
            accent = "ec4899"

            [[curves.lightness]]
            position = 0.0
            lightness = 0.95

            [[curves.lightness]]
            position = 1.0
            lightness = 0.1

            [[curves.chroma]]
            position = 0.5
            saturation = 0.9

            [[split.dark_chroma]]
            position = 1.0
            saturation = 0.8
            range = "dark"
            "##,
        )
        .unwrap();

        assert_eq!(config.canvas(), Canvas::new(400.0, 320.0));
        assert_eq!(config.colors.primary, Some(Rgb::new(0x3b, 0x82, 0xf6)));
        assert_eq!(config.colors.accent, Some(Rgb::new(0xec, 0x48, 0x99)));

        let lightness = config.lightness_points();
        assert_eq!(lightness.len(), 2);
        assert_eq!(lightness[0].lightness(), Some(0.95));
        assert_eq!(lightness[0].saturation(), None);

        let chroma = config.chroma_points();
        assert_eq!(chroma[0].saturation(), Some(0.9));
        assert_eq!(chroma[0].lightness(), None);

        let split = config.split_curves();
        assert!(split.light_lightness.is_empty());
        assert_eq!(split.dark_chroma[0].range, Some(RangeType::Dark));
    }

    #[test]
    fn empty_split_config_matches_default_curves() {
        let base = Rgb::new(0x3b, 0x82, 0xf6);
        let split = EngineConfig::default().split_curves();
        assert_eq!(
            apply_split_color_curves(base, &split),
            apply_split_color_curves(base, &SplitCurves::default())
        );
    }

    #[test]
    fn points_convert_both_ways() {
        let point = ControlPoint::new(0.3, None, 0.6).in_range(RangeType::Light);
        let config = PointConfig::from(&point);
        assert_eq!(config.lightness, None);
        assert_eq!(config.saturation, Some(0.6));
        assert_eq!(ControlPoint::from(&config), point);
    }

    #[test]
    fn invalid_documents_are_errors() {
        let result = EngineConfig::from_toml_str(r##"colors = { primary = "#xyz" }"##);
        assert!(matches!(result, Err(Error::Config(_))));

        let result = EngineConfig::from_toml_str("[[curves.lightness]]\nlightness = 0.5");
        assert!(matches!(result, Err(Error::Config(_))));

        let result = EngineConfig::from_toml_str(r#"split = { dark_lightness = [{ position = 0.0, range = "middle" }] }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("shadecraft.toml");

        let mut config = EngineConfig::default();
        config.colors.primary = Some(Rgb::new(0x10, 0xb9, 0x81));
        config.curves.lightness = vec![PointConfig {
            position: 0.5,
            lightness: Some(0.4),
            saturation: None,
            range: None,
        }];
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(EngineConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = EngineConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
