//! The sketchpad controller: one owner for state, history, gestures and surface.

use crate::config::SketchConfig;
use crate::gesture::GestureRecognizer;
use crate::input::InputEvent;
use crate::stroke::{HistoryStatus, StrokeEngine};
use crate::style::{ColorParseError, CompositeMode, InkColor};
use crate::surface::Surface;
use crate::tools::{BrushState, ToolKind};
use crate::transform::TransformState;
use kurbo::Vec2;
use log::{debug, warn};

/// A drawing surface wired to the stroke engine and pinch recognizer.
///
/// Every event and control runs to completion on `&mut self`; there is no
/// other writer to the surface or the history.
#[derive(Debug)]
pub struct Sketchpad<S: Surface> {
    state: TransformState,
    engine: StrokeEngine,
    gesture: GestureRecognizer,
    surface: S,
    config: SketchConfig,
}

impl<S: Surface> Sketchpad<S> {
    /// Create a sketchpad drawing on `surface`.
    pub fn new(surface: S, config: SketchConfig) -> Self {
        let brush = BrushState::new(config.tool_widths(), config.color);
        Self {
            state: TransformState::new(brush),
            engine: StrokeEngine::new(),
            gesture: GestureRecognizer::new(config.pinch_settings()),
            surface,
            config,
        }
    }

    /// Attach to a host surface if one is available.
    ///
    /// Without a surface nothing is attached and the host stays inert.
    pub fn attach(surface: Option<S>, config: SketchConfig) -> Option<Self> {
        match surface {
            Some(surface) => Some(Self::new(surface, config)),
            None => {
                warn!("no drawing surface available; sketchpad disabled");
                None
            }
        }
    }

    /// Dispatch one input event. Returns true when it changed the stroke,
    /// the gesture or the view.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::ContactStart { .. } => self.on_contact_start(event),
            InputEvent::ContactMove { .. } => self.on_contact_move(event),
            InputEvent::ContactEnd { .. } => self.on_contact_end(event),
        }
    }

    fn on_contact_start(&mut self, event: &InputEvent) -> bool {
        if let Some(contacts) = event.pair() {
            if self.engine.cancel_stroke() {
                debug!("stroke cancelled by pinch");
            }
            self.gesture.begin(contacts, self.state.view());
            return true;
        }
        if event.contact_count() == 1 && !self.gesture.is_pinching() {
            return self.engine.begin_stroke(self.state.brush.snapshot());
        }
        false
    }

    fn on_contact_move(&mut self, event: &InputEvent) -> bool {
        if self.gesture.is_pinching() {
            let Some(view) = event.pair().and_then(|contacts| self.gesture.update(contacts)) else {
                return false;
            };
            self.set_scale(view.scale, view.offset);
            return true;
        }

        if event.contact_count() != 1 || !self.engine.is_drawing() {
            return false;
        }
        let view = self.state.view();
        let mut appended = false;
        for &sample in event.changed() {
            appended |= self.engine.append_point(sample, &view, &mut self.surface);
        }
        appended
    }

    fn on_contact_end(&mut self, event: &InputEvent) -> bool {
        if self.gesture.is_pinching() {
            if event.contact_count() >= 2 {
                return false;
            }
            self.gesture.end();
            self.engine.cancel_stroke();
            return true;
        }
        self.engine.end_stroke()
    }

    /// Set the view and redraw every committed action under it.
    ///
    /// `scale` must be positive; callers validate.
    pub fn set_scale(&mut self, scale: f64, offset: Vec2) {
        self.state.set_scale(scale, offset);
        debug!("view scale {} offset {:?}", self.state.scale_label(), offset);
        self.rerender();
    }

    /// Width for future strokes with the active tool.
    pub fn set_brush_width(&mut self, width: f64) {
        self.state.set_brush_width(width);
    }

    pub fn set_color(&mut self, color: InkColor) {
        self.state.set_color(color);
    }

    /// Parse and apply a CSS color. The live color is unchanged on error.
    pub fn select_color(&mut self, color: &str) -> Result<InkColor, ColorParseError> {
        let color = InkColor::parse(color)?;
        self.set_color(color);
        Ok(color)
    }

    pub fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.state.set_composite_mode(mode);
    }

    pub fn increase_brush_width(&mut self) -> f64 {
        let width = self.state.brush.width() + self.config.width_step;
        self.set_brush_width(width);
        width
    }

    /// Shrink the brush, stopping at the configured minimum.
    pub fn decrease_brush_width(&mut self) -> f64 {
        let current = self.state.brush.width();
        let width = (current - self.config.width_step).max(self.config.min_brush_width);
        if width < current {
            self.set_brush_width(width);
        }
        self.state.brush.width()
    }

    pub fn zoom_in(&mut self) -> f64 {
        let scale = self.state.scale() + self.config.scale_step;
        self.set_scale(scale, self.state.offset());
        scale
    }

    /// Zoom out, stopping at the configured minimum scale.
    pub fn zoom_out(&mut self) -> f64 {
        let current = self.state.scale();
        let scale = current - self.config.scale_step;
        if scale < self.config.min_scale {
            return current;
        }
        self.set_scale(scale, self.state.offset());
        scale
    }

    /// Switch between pencil and eraser.
    pub fn toggle_tool(&mut self) -> ToolKind {
        let tool = self.state.brush.toggle_tool();
        debug!("tool: {}", tool.name());
        tool
    }

    pub fn undo(&mut self) -> HistoryStatus {
        let view = self.state.view();
        self.engine.undo(&view, &mut self.surface);
        self.engine.history()
    }

    pub fn redo(&mut self) -> HistoryStatus {
        let view = self.state.view();
        self.engine.redo(&view, &mut self.surface);
        self.engine.history()
    }

    pub fn history(&self) -> HistoryStatus {
        self.engine.history()
    }

    /// Drop all strokes and history and clear the surface.
    pub fn clear(&mut self) {
        self.engine.clear();
        self.gesture.end();
        self.surface.clear();
    }

    /// Reallocate the surface and redraw. Returns false if the size was rejected.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if !self.surface.resize(width, height) {
            warn!("surface rejected size {width}x{height}");
            return false;
        }
        self.rerender();
        true
    }

    /// Clear the surface and replay every committed action.
    pub fn rerender(&mut self) {
        let view = self.state.view();
        self.engine.replay(&view, &mut self.surface);
    }

    pub fn scale_label(&self) -> String {
        self.state.scale_label()
    }

    pub fn brush_width_label(&self) -> String {
        self.state.brush.width_label()
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    pub fn engine(&self) -> &StrokeEngine {
        &self.engine
    }

    pub fn is_pinching(&self) -> bool {
        self.gesture.is_pinching()
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
