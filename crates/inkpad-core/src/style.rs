//! Stroke style primitives: colors, composite modes and the per-stroke snapshot.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {input:?}: {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: String,
}

/// An unknown composite operation name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported composite mode: {0}")]
pub struct CompositeModeParseError(pub String);

/// Serializable color representation (RGBA8, straight alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InkColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl InkColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Parse a CSS color string (`#rgb`, `#rrggbb`, `rgb(..)`, named colors).
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let parsed = peniko::color::parse_color(input.trim()).map_err(|e| ColorParseError {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        let color: Color = parsed.to_alpha_color::<peniko::color::Srgb>();
        Ok(color.into())
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for InkColor {
    fn default() -> Self {
        Self::black()
    }
}

impl FromStr for InkColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for InkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for InkColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<InkColor> for Color {
    fn from(color: InkColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How newly stroked pixels combine with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeMode {
    /// Draw over existing pixels.
    #[default]
    SourceOver,
    /// Punch out existing pixels where the stroke covers them.
    DestinationOut,
}

impl CompositeMode {
    /// The canvas composite operation name.
    pub fn as_str(self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::DestinationOut => "destination-out",
        }
    }
}

impl FromStr for CompositeMode {
    type Err = CompositeModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source-over" => Ok(CompositeMode::SourceOver),
            "destination-out" => Ok(CompositeMode::DestinationOut),
            other => Err(CompositeModeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for CompositeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style captured when a stroke begins. Never changes after capture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleSnapshot {
    /// Line width in canvas units; not scaled by zoom.
    pub line_width: f64,
    pub stroke_color: InkColor,
    pub fill_color: InkColor,
    pub composite_mode: CompositeMode,
}

impl Default for StyleSnapshot {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            stroke_color: InkColor::black(),
            fill_color: InkColor::black(),
            composite_mode: CompositeMode::SourceOver,
        }
    }
}
