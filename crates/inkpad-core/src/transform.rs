//! Transform state: the zoom/pan view transform plus the live brush.

use crate::style::{CompositeMode, InkColor};
use crate::tools::BrushState;
use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Maps canvas-space points to device pixels: `device = (point + offset) * scale`.
///
/// Stored stroke points are always in canvas-space, so changing the view
/// never touches them; they are re-projected at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Zoom factor. Always positive.
    pub scale: f64,
    /// Pan offset, in canvas units.
    pub offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    pub fn new(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Affine for rendering (canvas to device).
    pub fn affine(&self) -> Affine {
        Affine::scale(self.scale) * Affine::translate(self.offset)
    }

    /// Project a canvas-space point into device pixels.
    pub fn to_device(&self, point: Point) -> Point {
        Point::new(
            (point.x + self.offset.x) * self.scale,
            (point.y + self.offset.y) * self.scale,
        )
    }

    /// Map a device pixel back into canvas-space.
    pub fn to_canvas(&self, device: Point) -> Point {
        Point::new(
            device.x / self.scale - self.offset.x,
            device.y / self.scale - self.offset.y,
        )
    }
}

/// The shared mutable record read by every render and by input mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    view: ViewTransform,
    /// Active tool, remembered widths and live style.
    pub brush: BrushState,
}

impl TransformState {
    pub fn new(brush: BrushState) -> Self {
        Self {
            view: ViewTransform::default(),
            brush,
        }
    }

    pub fn view(&self) -> ViewTransform {
        self.view
    }

    pub fn scale(&self) -> f64 {
        self.view.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.view.offset
    }

    /// Store a new view. Re-rendering is the owner's job (see `Sketchpad::set_scale`).
    ///
    /// `scale` must be positive; callers validate.
    pub fn set_scale(&mut self, scale: f64, offset: Vec2) {
        debug_assert!(scale > 0.0, "scale must be positive, got {scale}");
        self.view = ViewTransform::new(scale, offset);
    }

    /// Sets the active tool's width and the live width. Affects future strokes only.
    pub fn set_brush_width(&mut self, width: f64) {
        self.brush.set_width(width);
    }

    pub fn set_color(&mut self, color: InkColor) {
        self.brush.set_color(color);
    }

    pub fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.brush.set_composite_mode(mode);
    }

    /// Scale readout, e.g. `"1.00"`.
    pub fn scale_label(&self) -> String {
        format!("{:.2}", self.view.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let view = ViewTransform::default();
        let p = Point::new(100.0, 200.0);
        assert_eq!(view.to_device(p), p);
        assert_eq!(view.to_canvas(p), p);
    }

    #[test]
    fn test_to_canvas_with_offset_and_scale() {
        let view = ViewTransform::new(2.0, Vec2::new(5.0, -5.0));
        let canvas = view.to_canvas(Point::new(100.0, 200.0));
        assert!((canvas.x - 45.0).abs() < f64::EPSILON);
        assert!((canvas.y - 105.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let view = ViewTransform::new(1.7, Vec2::new(30.0, -20.0));
        let original = Point::new(123.0, 456.0);
        let back = view.to_device(view.to_canvas(original));
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_affine_matches_point_mapping() {
        let view = ViewTransform::new(0.75, Vec2::new(12.0, 8.0));
        let p = Point::new(-3.0, 41.0);
        let a = view.affine() * p;
        let b = view.to_device(p);
        assert!((a.x - b.x).abs() < 1e-10);
        assert!((a.y - b.y).abs() < 1e-10);
    }

    #[test]
    fn test_scale_label() {
        let mut state = TransformState::new(BrushState::default());
        assert_eq!(state.scale_label(), "1.00");
        state.set_scale(1.2345, Vec2::ZERO);
        assert_eq!(state.scale_label(), "1.23");
    }

    #[test]
    fn test_set_scale_keeps_brush() {
        let mut state = TransformState::new(BrushState::default());
        state.set_brush_width(7.0);
        state.set_scale(3.0, Vec2::new(1.0, 2.0));
        assert!((state.scale() - 3.0).abs() < f64::EPSILON);
        assert_eq!(state.offset(), Vec2::new(1.0, 2.0));
        assert!((state.brush.snapshot().line_width - 7.0).abs() < f64::EPSILON);
    }
}
