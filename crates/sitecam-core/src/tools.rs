//! Tool modes and gesture state for the editor.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tool {
    /// Select, move, and pan (default).
    #[default]
    Select,
    /// Place a camera on the next canvas click.
    PlaceCamera,
    /// Drag out a rectangular zone.
    DrawZone,
    /// Place or move the DVR marker on the next canvas click.
    PlaceDvr,
}

/// The gesture currently in progress, if any.
///
/// Each active variant carries the context needed to apply incremental
/// updates on pointer-move and to commit or discard on release.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Dragging the viewport.
    Panning {
        /// Screen position of the previous pointer event, used to
        /// compute the raw pan delta.
        last_screen: Point,
        /// Whether any move has been seen. A press-release without
        /// movement resolves as a click instead of a pan.
        moved: bool,
    },
    /// Moving a camera marker across the plan.
    DraggingCamera { id: String },
    /// Dragging out a zone rectangle. Nothing is created until release.
    DrawingZone {
        /// Scene-space corner where the drag started.
        start: Point,
        /// Scene-space position of the latest move.
        current: Point,
    },
}

impl Gesture {
    /// Whether a gesture is active.
    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_select() {
        assert_eq!(Tool::default(), Tool::Select);
    }

    #[test]
    fn test_gesture_activity() {
        assert!(!Gesture::Idle.is_active());
        assert!(
            Gesture::Panning {
                last_screen: Point::ZERO,
                moved: false
            }
            .is_active()
        );
    }
}
