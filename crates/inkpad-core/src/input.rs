//! Host-agnostic contact (touch/pointer) events.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One input event from the host. Positions are device pixels.
///
/// `touches` is always the full set of contacts currently down, after the
/// event has been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// One or more contacts went down.
    ContactStart { touches: Vec<Point> },
    /// Contacts moved. `changed` holds the contacts that moved since the
    /// previous event; empty means "same as `touches`".
    ContactMove {
        touches: Vec<Point>,
        #[serde(default)]
        changed: Vec<Point>,
    },
    /// One or more contacts were released; `touches` holds those still down.
    ContactEnd {
        #[serde(default)]
        touches: Vec<Point>,
    },
}

impl InputEvent {
    pub fn start(touches: impl IntoIterator<Item = Point>) -> Self {
        InputEvent::ContactStart {
            touches: touches.into_iter().collect(),
        }
    }

    /// A move where every contact changed.
    pub fn moved(touches: impl IntoIterator<Item = Point>) -> Self {
        InputEvent::ContactMove {
            touches: touches.into_iter().collect(),
            changed: Vec::new(),
        }
    }

    pub fn end(remaining: impl IntoIterator<Item = Point>) -> Self {
        InputEvent::ContactEnd {
            touches: remaining.into_iter().collect(),
        }
    }

    /// Contacts down after this event.
    pub fn touches(&self) -> &[Point] {
        match self {
            InputEvent::ContactStart { touches }
            | InputEvent::ContactMove { touches, .. }
            | InputEvent::ContactEnd { touches } => touches,
        }
    }

    pub fn contact_count(&self) -> usize {
        self.touches().len()
    }

    /// Contacts that moved in this event.
    pub fn changed(&self) -> &[Point] {
        match self {
            InputEvent::ContactMove { touches, changed } if changed.is_empty() => touches,
            InputEvent::ContactMove { changed, .. } => changed,
            _ => &[],
        }
    }

    /// Exactly two contacts, if that is what is down.
    pub fn pair(&self) -> Option<[Point; 2]> {
        match self.touches() {
            [a, b] => Some([*a, *b]),
            _ => None,
        }
    }
}
