//! Two-finger pinch recognizer for zoom and pan.

use crate::transform::ViewTransform;
use kurbo::{Point, Vec2};
use log::{debug, warn};

/// Default vertical pan multiplier.
pub const DEFAULT_PAN_SENSITIVITY: f64 = 1.5;

/// Default smallest contact separation, in device pixels, used as a divisor.
pub const DEFAULT_MIN_PINCH_DISTANCE: f64 = 1.0;

/// View captured when a pinch starts. Every update is computed against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureBaseline {
    pub scale: f64,
    pub offset: Vec2,
}

impl From<ViewTransform> for GestureBaseline {
    fn from(view: ViewTransform) -> Self {
        Self {
            scale: view.scale,
            offset: view.offset,
        }
    }
}

/// Tuning for pinch updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSettings {
    /// Multiplier applied to vertical midpoint movement.
    pub pan_sensitivity: f64,
    /// Updates where either contact separation is below this are skipped.
    pub min_distance: f64,
}

impl Default for PinchSettings {
    fn default() -> Self {
        Self {
            pan_sensitivity: DEFAULT_PAN_SENSITIVITY,
            min_distance: DEFAULT_MIN_PINCH_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum GestureState {
    #[default]
    Idle,
    Pinching {
        start: [Point; 2],
        baseline: GestureBaseline,
    },
}

/// Idle/Pinching state machine.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    state: GestureState,
    settings: PinchSettings,
}

impl GestureRecognizer {
    pub fn new(settings: PinchSettings) -> Self {
        Self {
            state: GestureState::Idle,
            settings,
        }
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.state, GestureState::Pinching { .. })
    }

    /// Enter (or restart) a pinch from two contacts and the current view.
    pub fn begin(&mut self, contacts: [Point; 2], current: ViewTransform) {
        debug!("pinch start at {:?} / {:?}", contacts[0], contacts[1]);
        self.state = GestureState::Pinching {
            start: contacts,
            baseline: current.into(),
        };
    }

    /// Compute the view for the current contact positions.
    ///
    /// Returns `None` when idle or when a contact separation is too small to
    /// divide by; that frame is then skipped.
    ///
    /// Horizontal pan is divided by the new scale; vertical pan uses the flat
    /// `pan_sensitivity` multiplier.
    pub fn update(&self, contacts: [Point; 2]) -> Option<ViewTransform> {
        let GestureState::Pinching { start, baseline } = self.state else {
            return None;
        };

        let prev_mid = start[0].midpoint(start[1]);
        let cur_mid = contacts[0].midpoint(contacts[1]);
        let prev_dist = start[0].distance(start[1]);
        let cur_dist = contacts[0].distance(contacts[1]);

        if prev_dist < self.settings.min_distance || cur_dist < self.settings.min_distance {
            warn!("skipping pinch frame: contact distance {prev_dist:.3} -> {cur_dist:.3}");
            return None;
        }

        let scale_factor = cur_dist / prev_dist;
        let new_scale = baseline.scale * scale_factor;
        let offset = Vec2::new(
            (cur_mid.x - prev_mid.x) / new_scale + baseline.offset.x,
            (cur_mid.y - prev_mid.y) * self.settings.pan_sensitivity + baseline.offset.y,
        );
        Some(ViewTransform::new(new_scale, offset))
    }

    /// Return to idle. Returns whether a pinch was active.
    pub fn end(&mut self) -> bool {
        let was_pinching = self.is_pinching();
        if was_pinching {
            debug!("pinch end");
        }
        self.state = GestureState::Idle;
        was_pinching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pinch(a: (f64, f64), b: (f64, f64)) -> [Point; 2] {
        [Point::new(a.0, a.1), Point::new(b.0, b.1)]
    }

    #[test]
    fn test_idle_update() {
        let recognizer = GestureRecognizer::default();
        assert!(!recognizer.is_pinching());
        assert!(recognizer.update(pinch((0.0, 0.0), (10.0, 0.0))).is_none());
    }

    #[test]
    fn test_zoom_scenario() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.begin(pinch((0.0, 0.0), (100.0, 0.0)), ViewTransform::default());
        let view = recognizer.update(pinch((0.0, 0.0), (200.0, 0.0))).unwrap();
        assert!((view.scale - 2.0).abs() < f64::EPSILON);
        // Midpoint moved from (50, 0) to (100, 0).
        assert!((view.offset.x - 25.0).abs() < f64::EPSILON);
        assert!(view.offset.y.abs() < f64::EPSILON);
    }

    #[test]
    fn test_symmetric_zoom_keeps_offset() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.begin(pinch((0.0, 0.0), (100.0, 0.0)), ViewTransform::default());
        let view = recognizer.update(pinch((-50.0, 0.0), (150.0, 0.0))).unwrap();
        assert!((view.scale - 2.0).abs() < f64::EPSILON);
        assert!(view.offset.x.abs() < f64::EPSILON);
        assert!(view.offset.y.abs() < f64::EPSILON);
    }

    #[test]
    fn test_unchanged_contacts_keep_view() {
        let baseline = ViewTransform::new(1.4, Vec2::new(3.0, -8.0));
        let mut recognizer = GestureRecognizer::default();
        let contacts = pinch((10.0, 20.0), (70.0, 100.0));
        recognizer.begin(contacts, baseline);
        let view = recognizer.update(contacts).unwrap();
        assert!((view.scale - baseline.scale).abs() < f64::EPSILON);
        assert!((view.offset.x - baseline.offset.x).abs() < f64::EPSILON);
        assert!((view.offset.y - baseline.offset.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pan_asymmetry() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.begin(
            pinch((0.0, 0.0), (100.0, 0.0)),
            ViewTransform::new(2.0, Vec2::new(1.0, 1.0)),
        );
        // Same separation, midpoint moved by (10, 10).
        let view = recognizer.update(pinch((10.0, 10.0), (110.0, 10.0))).unwrap();
        assert!((view.scale - 2.0).abs() < f64::EPSILON);
        assert!((view.offset.x - (10.0 / 2.0 + 1.0)).abs() < f64::EPSILON);
        assert!((view.offset.y - (10.0 * DEFAULT_PAN_SENSITIVITY + 1.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_updates_are_relative_to_baseline() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.begin(pinch((0.0, 0.0), (100.0, 0.0)), ViewTransform::new(1.5, Vec2::ZERO));
        recognizer.update(pinch((0.0, 0.0), (300.0, 0.0)));
        let view = recognizer.update(pinch((0.0, 0.0), (50.0, 0.0))).unwrap();
        assert!((view.scale - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_contacts_skipped() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.begin(pinch((5.0, 5.0), (5.0, 5.0)), ViewTransform::default());
        assert!(recognizer.update(pinch((0.0, 0.0), (100.0, 0.0))).is_none());

        recognizer.begin(pinch((0.0, 0.0), (100.0, 0.0)), ViewTransform::default());
        assert!(recognizer.update(pinch((7.0, 7.0), (7.0, 7.0))).is_none());
    }

    #[test]
    fn test_end_clears_baseline() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.begin(pinch((0.0, 0.0), (100.0, 0.0)), ViewTransform::default());
        assert!(recognizer.is_pinching());
        assert!(recognizer.end());
        assert!(!recognizer.is_pinching());
        assert!(recognizer.update(pinch((0.0, 0.0), (200.0, 0.0))).is_none());
        assert!(!recognizer.end());
    }

    #[test]
    fn test_custom_sensitivity() {
        let mut recognizer = GestureRecognizer::new(PinchSettings {
            pan_sensitivity: 1.0,
            min_distance: 0.5,
        });
        recognizer.begin(pinch((0.0, 0.0), (0.0, 100.0)), ViewTransform::default());
        let view = recognizer.update(pinch((0.0, 4.0), (0.0, 104.0))).unwrap();
        assert!((view.offset.y - 4.0).abs() < f64::EPSILON);
    }
}
