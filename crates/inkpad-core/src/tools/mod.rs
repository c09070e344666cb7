//! Drawing tools and the live brush.

use crate::style::{CompositeMode, InkColor, StyleSnapshot};
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Pencil,
    Eraser,
}

impl ToolKind {
    /// Composite mode a stroke made with this tool uses.
    pub fn composite_mode(self) -> CompositeMode {
        match self {
            ToolKind::Pencil => CompositeMode::SourceOver,
            ToolKind::Eraser => CompositeMode::DestinationOut,
        }
    }

    /// The other tool.
    pub fn toggled(self) -> Self {
        match self {
            ToolKind::Pencil => ToolKind::Eraser,
            ToolKind::Eraser => ToolKind::Pencil,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pencil => "pencil",
            ToolKind::Eraser => "eraser",
        }
    }
}

/// Brush width remembered separately for each tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolWidths {
    pub pencil: f64,
    pub eraser: f64,
}

impl Default for ToolWidths {
    fn default() -> Self {
        Self {
            pencil: 2.0,
            eraser: 10.0,
        }
    }
}

impl ToolWidths {
    pub fn get(&self, tool: ToolKind) -> f64 {
        match tool {
            ToolKind::Pencil => self.pencil,
            ToolKind::Eraser => self.eraser,
        }
    }

    pub fn set(&mut self, tool: ToolKind, width: f64) {
        match tool {
            ToolKind::Pencil => self.pencil = width,
            ToolKind::Eraser => self.eraser = width,
        }
    }
}

/// The active tool and the style new strokes will be captured with.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushState {
    tool: ToolKind,
    widths: ToolWidths,
    style: StyleSnapshot,
}

impl Default for BrushState {
    fn default() -> Self {
        Self::new(ToolWidths::default(), InkColor::black())
    }
}

impl BrushState {
    /// Start with the pencil selected.
    pub fn new(widths: ToolWidths, color: InkColor) -> Self {
        let tool = ToolKind::Pencil;
        Self {
            tool,
            widths,
            style: StyleSnapshot {
                line_width: widths.get(tool),
                stroke_color: color,
                fill_color: color,
                composite_mode: tool.composite_mode(),
            },
        }
    }

    /// Copy of the live style, to seed a new stroke.
    pub fn snapshot(&self) -> StyleSnapshot {
        self.style
    }

    pub fn width(&self) -> f64 {
        self.style.line_width
    }

    /// No bounds are enforced here.
    pub fn set_width(&mut self, width: f64) {
        self.widths.set(self.tool, width);
        self.style.line_width = width;
    }

    pub fn set_color(&mut self, color: InkColor) {
        self.style.stroke_color = color;
        self.style.fill_color = color;
    }

    pub fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.style.composite_mode = mode;
    }

    /// Switch tools, restoring that tool's composite mode and remembered width.
    pub fn select_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.set_composite_mode(tool.composite_mode());
        self.set_width(self.widths.get(tool));
    }

    pub fn toggle_tool(&mut self) -> ToolKind {
        self.select_tool(self.tool.toggled());
        self.tool
    }

    /// Width readout, e.g. `"2"`.
    pub fn width_label(&self) -> String {
        format!("{}", self.style.line_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brush() {
        let brush = BrushState::default();
        assert!((brush.width() - 2.0).abs() < f64::EPSILON);
        assert_eq!(brush.snapshot().composite_mode, CompositeMode::SourceOver);
    }

    #[test]
    fn test_toggle_restores_widths() {
        let mut brush = BrushState::default();
        brush.set_width(4.0);

        assert_eq!(brush.toggle_tool(), ToolKind::Eraser);
        assert!((brush.width() - 10.0).abs() < f64::EPSILON);
        assert_eq!(brush.snapshot().composite_mode, CompositeMode::DestinationOut);

        brush.set_width(15.0);
        assert_eq!(brush.toggle_tool(), ToolKind::Pencil);
        assert!((brush.width() - 4.0).abs() < f64::EPSILON);
        assert_eq!(brush.snapshot().composite_mode, CompositeMode::SourceOver);

        brush.toggle_tool();
        assert!((brush.width() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_color_sets_stroke_and_fill() {
        let mut brush = BrushState::default();
        let red = InkColor::new(255, 0, 0, 255);
        brush.set_color(red);
        let style = brush.snapshot();
        assert_eq!(style.stroke_color, red);
        assert_eq!(style.fill_color, red);
    }

    #[test]
    fn test_color_survives_tool_toggle() {
        let mut brush = BrushState::default();
        let blue = InkColor::new(0, 0, 255, 255);
        brush.set_color(blue);
        brush.toggle_tool();
        brush.toggle_tool();
        assert_eq!(brush.snapshot().stroke_color, blue);
    }

    #[test]
    fn test_width_label() {
        let mut brush = BrushState::default();
        assert_eq!(brush.width_label(), "2");
        brush.set_width(2.5);
        assert_eq!(brush.width_label(), "2.5");
    }
}
