//! Inkpad Core Library
//!
//! Host-agnostic stroke recording and replay for the Inkpad drawing surface:
//! the view transform, brush state, undo/redo history, the pinch recognizer
//! and the controller that dispatches contact events between them.

pub mod config;
pub mod gesture;
pub mod input;
pub mod sketchpad;
pub mod stroke;
pub mod style;
pub mod surface;
pub mod tools;
pub mod transform;

pub use config::{ConfigError, SketchConfig};
pub use gesture::{GestureBaseline, GestureRecognizer, PinchSettings};
pub use input::InputEvent;
pub use sketchpad::Sketchpad;
pub use stroke::{Action, HistoryStatus, StrokeEngine, full_replay, replay_action};
pub use style::{ColorParseError, CompositeMode, InkColor, StyleSnapshot};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use tools::{BrushState, ToolKind, ToolWidths};
pub use transform::{TransformState, ViewTransform};
