//! Input scripts: recorded contact events interleaved with control presses.

use crate::app::AppError;
use inkpad_core::{InputEvent, Sketchpad, Surface};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Controls a host UI would wire to buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlAction {
    Undo,
    Redo,
    IncreaseBrushWidth,
    DecreaseBrushWidth,
    ZoomIn,
    ZoomOut,
    ToggleTool,
    Clear,
    /// Set the stroke color from a CSS color string.
    SelectColor(String),
    /// Set the active tool's width.
    SetBrushWidth(f64),
    /// Set zoom and pan directly.
    SetScale {
        scale: f64,
        #[serde(default)]
        offset_x: f64,
        #[serde(default)]
        offset_y: f64,
    },
    /// Resize the surface.
    Resize { width: u32, height: u32 },
}

/// One script step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Control { control: ControlAction },
    Input(InputEvent),
}

/// Parse a JSON array of steps.
pub fn parse_script(json: &str) -> Result<Vec<Step>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<Step>, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_script(&json)?)
}

/// Apply one step to the sketchpad. `index` is only used for error reporting.
pub fn apply_step<S: Surface>(
    pad: &mut Sketchpad<S>,
    index: usize,
    step: &Step,
) -> Result<(), AppError> {
    match step {
        Step::Input(event) => {
            pad.handle_event(event);
        }
        Step::Control { control } => apply_control(pad, index, control)?,
    }
    Ok(())
}

fn apply_control<S: Surface>(
    pad: &mut Sketchpad<S>,
    index: usize,
    control: &ControlAction,
) -> Result<(), AppError> {
    match control {
        ControlAction::Undo => {
            pad.undo();
        }
        ControlAction::Redo => {
            pad.redo();
        }
        ControlAction::IncreaseBrushWidth => {
            pad.increase_brush_width();
        }
        ControlAction::DecreaseBrushWidth => {
            pad.decrease_brush_width();
        }
        ControlAction::ZoomIn => {
            pad.zoom_in();
        }
        ControlAction::ZoomOut => {
            pad.zoom_out();
        }
        ControlAction::ToggleTool => {
            pad.toggle_tool();
        }
        ControlAction::Clear => pad.clear(),
        ControlAction::SelectColor(color) => {
            pad.select_color(color)
                .map_err(|source| AppError::Color { index, source })?;
        }
        ControlAction::SetBrushWidth(width) => pad.set_brush_width(*width),
        ControlAction::SetScale {
            scale,
            offset_x,
            offset_y,
        } => {
            if !(scale.is_finite() && *scale > 0.0) {
                return Err(AppError::InvalidScale { index, scale: *scale });
            }
            pad.set_scale(*scale, Vec2::new(*offset_x, *offset_y));
        }
        ControlAction::Resize { width, height } => {
            if !pad.resize(*width, *height) {
                log::warn!("Step {}: resize to {}x{} rejected", index, width, height);
            }
        }
    }
    Ok(())
}
