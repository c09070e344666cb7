//! Stroke recording, undo/redo history and replay.

use crate::style::StyleSnapshot;
use crate::surface::Surface;
use crate::transform::ViewTransform;
use kurbo::{BezPath, Point};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// One committed freehand stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Style captured when the stroke began.
    pub style: StyleSnapshot,
    /// Canvas-space points, in sample order.
    pub points: Vec<Point>,
}

impl Action {
    pub fn new(style: StyleSnapshot) -> Self {
        Self {
            style,
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Canvas-space polyline through the points.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points.iter().copied();
        if let Some(first) = points.next() {
            path.move_to(first);
            for point in points {
                path.line_to(point);
            }
        }
        path
    }

    /// The polyline projected into device pixels under `view`.
    pub fn to_device_path(&self, view: &ViewTransform) -> BezPath {
        view.affine() * self.to_path()
    }
}

/// Undo/redo availability, for enabling the matching controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
}

#[derive(Debug, Clone)]
struct PendingStroke {
    action: Action,
    /// Last raw device sample, for live segment drawing.
    last_device: Option<Point>,
}

/// Owns the action log, the redo stack and the in-progress stroke.
#[derive(Debug, Clone, Default)]
pub struct StrokeEngine {
    actions: Vec<Action>,
    undone: Vec<Action>,
    pending: Option<PendingStroke>,
}

impl StrokeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new stroke. Ignored (returns false) while another stroke is open.
    pub fn begin_stroke(&mut self, style: StyleSnapshot) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingStroke {
            action: Action::new(style),
            last_device: None,
        });
        true
    }

    /// Record a raw device sample and draw the segment from the previous sample.
    ///
    /// Returns false when no stroke is open.
    pub fn append_point<S: Surface + ?Sized>(
        &mut self,
        device: Point,
        view: &ViewTransform,
        surface: &mut S,
    ) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        let canvas_point = view.to_canvas(device);
        trace!("stroke sample {device:?} -> {canvas_point:?}");
        pending.action.points.push(canvas_point);

        if let Some(previous) = pending.last_device {
            let mut segment = BezPath::new();
            segment.move_to(previous);
            segment.line_to(device);
            surface.stroke_path(&segment, &pending.action.style);
        }
        pending.last_device = Some(device);
        true
    }

    /// Close the open stroke, commit it and drop the redo stack.
    ///
    /// Strokes with fewer than two points are still committed; they replay
    /// as nothing. Returns false when no stroke was open.
    pub fn end_stroke(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        debug!("committing stroke with {} points", pending.action.len());
        self.actions.push(pending.action);
        if !self.undone.is_empty() {
            debug!("dropping {} redo entries", self.undone.len());
            self.undone.clear();
        }
        true
    }

    /// Drop the open stroke without committing. Returns whether one was open.
    pub fn cancel_stroke(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Move the newest action to the redo stack and redraw everything else.
    pub fn undo<S: Surface + ?Sized>(&mut self, view: &ViewTransform, surface: &mut S) -> bool {
        let Some(action) = self.actions.pop() else {
            return false;
        };
        self.undone.push(action);
        debug!("undo: {} actions left", self.actions.len());
        full_replay(&self.actions, view, surface);
        true
    }

    /// Restore the most recently undone action, drawing only that action.
    pub fn redo<S: Surface + ?Sized>(&mut self, view: &ViewTransform, surface: &mut S) -> bool {
        let Some(action) = self.undone.pop() else {
            return false;
        };
        replay_action(&action, view, surface);
        self.actions.push(action);
        debug!("redo: {} actions", self.actions.len());
        true
    }

    /// Clear the surface and redraw the whole log under `view`.
    pub fn replay<S: Surface + ?Sized>(&self, view: &ViewTransform, surface: &mut S) {
        full_replay(&self.actions, view, surface);
    }

    /// Forget all history, including the redo stack and any open stroke.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.undone.clear();
        self.pending = None;
    }

    pub fn history(&self) -> HistoryStatus {
        HistoryStatus {
            can_undo: !self.actions.is_empty(),
            can_redo: !self.undone.is_empty(),
        }
    }

    /// Committed actions, oldest first.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }

    /// The open stroke, if any.
    pub fn in_progress(&self) -> Option<&Action> {
        self.pending.as_ref().map(|p| &p.action)
    }

    pub fn is_drawing(&self) -> bool {
        self.pending.is_some()
    }
}

/// Clear `surface` and draw `actions` in commit order.
///
/// Order matters: an eraser stroke only removes what was drawn before it.
pub fn full_replay<S: Surface + ?Sized>(actions: &[Action], view: &ViewTransform, surface: &mut S) {
    surface.clear();
    for action in actions {
        replay_action(action, view, surface);
    }
}

/// Draw a single action on top of the current raster. Fewer than two points draw nothing.
pub fn replay_action<S: Surface + ?Sized>(action: &Action, view: &ViewTransform, surface: &mut S) {
    if action.len() < 2 {
        return;
    }
    surface.stroke_path(&action.to_device_path(view), &action.style);
}
