//! Engine configuration.

use crate::gesture::{DEFAULT_MIN_PINCH_DISTANCE, DEFAULT_PAN_SENSITIVITY, PinchSettings};
use crate::style::InkColor;
use crate::tools::ToolWidths;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables for a sketchpad. Every field has a default, so partial JSON is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Initial pencil width.
    pub pencil_width: f64,
    /// Initial eraser width.
    pub eraser_width: f64,
    /// Initial stroke color, as a CSS color string.
    #[serde(serialize_with = "color_to_css", deserialize_with = "color_from_css")]
    pub color: InkColor,
    /// Vertical pan multiplier for pinch gestures.
    pub pan_sensitivity: f64,
    /// Pinch frames with a smaller contact separation are skipped.
    pub min_pinch_distance: f64,
    /// Amount added or removed by the zoom controls.
    pub scale_step: f64,
    /// Zoom-out control stops here.
    pub min_scale: f64,
    /// Amount added or removed by the brush width controls.
    pub width_step: f64,
    /// Brush width decrease control stops here.
    pub min_brush_width: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        let widths = ToolWidths::default();
        Self {
            pencil_width: widths.pencil,
            eraser_width: widths.eraser,
            color: InkColor::black(),
            pan_sensitivity: DEFAULT_PAN_SENSITIVITY,
            min_pinch_distance: DEFAULT_MIN_PINCH_DISTANCE,
            scale_step: 0.1,
            min_scale: 0.1,
            width_step: 1.0,
            min_brush_width: 1.0,
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("pencil_width", self.pencil_width)?;
        positive("eraser_width", self.eraser_width)?;
        positive("pan_sensitivity", self.pan_sensitivity)?;
        positive("min_pinch_distance", self.min_pinch_distance)?;
        positive("scale_step", self.scale_step)?;
        positive("min_scale", self.min_scale)?;
        positive("width_step", self.width_step)?;
        positive("min_brush_width", self.min_brush_width)?;
        Ok(())
    }

    pub fn tool_widths(&self) -> ToolWidths {
        ToolWidths {
            pencil: self.pencil_width,
            eraser: self.eraser_width,
        }
    }

    pub fn pinch_settings(&self) -> PinchSettings {
        PinchSettings {
            pan_sensitivity: self.pan_sensitivity,
            min_distance: self.min_pinch_distance,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a positive number, got {value}"),
        })
    }
}

fn color_to_css<S: Serializer>(color: &InkColor, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&color.to_hex())
}

fn color_from_css<'de, D: Deserializer<'de>>(deserializer: D) -> Result<InkColor, D::Error> {
    let raw = String::deserialize(deserializer)?;
    InkColor::parse(&raw).map_err(serde::de::Error::custom)
}
