//! Pointer event vocabulary for the interaction layer.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are screen-space pixels as delivered by the input surface;
/// the session maps them into scene space where scene coordinates are
/// consumed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    /// The pointer left the surface. Treated as an implicit release:
    /// whatever partial effect the gesture produced is committed or
    /// discarded exactly as on `Up`, but no click is resolved.
    Leave,
    Scroll {
        position: Point,
        delta: Vec2,
    },
}
