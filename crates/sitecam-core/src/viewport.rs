//! Viewport module for pan/zoom transforms.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Zoom level a freshly opened project starts at.
pub const DEFAULT_ZOOM: f64 = 0.6;
/// Minimum allowed zoom level.
pub const MIN_ZOOM: f64 = 0.05;
/// Maximum allowed zoom level.
pub const MAX_ZOOM: f64 = 10.0;

/// Proportional step applied per wheel notch.
const WHEEL_ZOOM_FACTOR: f64 = 0.15;
/// Absolute step applied by the discrete zoom in/out buttons.
const BUTTON_ZOOM_STEP: f64 = 0.2;

/// Viewport manages the view transform for the floor plan.
///
/// It holds the pan offset and zoom factor and converts between
/// screen coordinates and scene coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    /// Current translation offset (pan) in screen pixels.
    pub pan: Vec2,
    /// Current zoom factor.
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    /// Create a viewport at the default pan and zoom.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a screen point to scene coordinates.
    pub fn screen_to_scene(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    /// Convert a scene point to screen coordinates.
    pub fn scene_to_screen(&self, scene: Point) -> Point {
        Point::new(
            scene.x * self.zoom + self.pan.x,
            scene.y * self.zoom + self.pan.y,
        )
    }

    /// Pan by a delta in screen pixels.
    ///
    /// The delta is applied raw, so pan speed is independent of the
    /// current zoom factor.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Zoom one wheel notch, keeping the scene point under `cursor`
    /// visually stationary. `direction > 0` zooms in, otherwise out.
    pub fn zoom_at(&mut self, cursor: Point, direction: f64) {
        let step = if direction > 0.0 { 1.0 } else { -1.0 };
        let new_zoom = (self.zoom + step * WHEEL_ZOOM_FACTOR * self.zoom).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            // Already at a bound.
            return;
        }

        // Rescale the pan so the cursor's scene point is invariant.
        let ratio = new_zoom / self.zoom;
        self.pan = Vec2::new(
            cursor.x - (cursor.x - self.pan.x) * ratio,
            cursor.y - (cursor.y - self.pan.y) * ratio,
        );
        self.zoom = new_zoom;
    }

    /// Set the zoom factor directly, without anchoring.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Discrete zoom-in button step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + BUTTON_ZOOM_STEP);
    }

    /// Discrete zoom-out button step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - BUTTON_ZOOM_STEP);
    }

    /// Reset to the default pan and zoom.
    pub fn reset(&mut self) {
        self.pan = Vec2::ZERO;
        self.zoom = DEFAULT_ZOOM;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let viewport = Viewport::new();
        assert_eq!(viewport.pan, Vec2::ZERO);
        assert!((viewport.zoom - DEFAULT_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_scene_with_pan() {
        let mut viewport = Viewport::new();
        viewport.zoom = 1.0;
        viewport.pan = Vec2::new(50.0, 100.0);
        let scene = viewport.screen_to_scene(Point::new(100.0, 200.0));
        assert!((scene.x - 50.0).abs() < f64::EPSILON);
        assert!((scene.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_scene_with_zoom() {
        let mut viewport = Viewport::new();
        viewport.zoom = 2.0;
        let scene = viewport.screen_to_scene(Point::new(100.0, 200.0));
        assert!((scene.x - 50.0).abs() < f64::EPSILON);
        assert!((scene.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let mut viewport = Viewport::new();
        viewport.pan = Vec2::new(30.0, -20.0);
        viewport.zoom = 1.5;

        let original = Point::new(123.0, 456.0);
        let back = viewport.scene_to_screen(viewport.screen_to_scene(original));

        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_pan_independent_of_zoom() {
        for zoom in [0.05, 0.6, 3.0, 10.0] {
            let mut viewport = Viewport::new();
            viewport.zoom = zoom;
            viewport.pan_by(Vec2::new(10.0, 20.0));
            assert!((viewport.pan.x - 10.0).abs() < f64::EPSILON);
            assert!((viewport.pan.y - 20.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_zoom_at_anchors_cursor() {
        let mut viewport = Viewport::new();
        viewport.pan = Vec2::new(37.0, -12.0);
        let cursor = Point::new(320.0, 240.0);

        let before = viewport.screen_to_scene(cursor);
        for direction in [1.0, 1.0, -1.0, 1.0, -1.0, -1.0] {
            viewport.zoom_at(cursor, direction);
            let after = viewport.screen_to_scene(cursor);
            assert!((after.x - before.x).abs() < 1e-9);
            assert!((after.y - before.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zoom_bounds() {
        let mut viewport = Viewport::new();
        for _ in 0..200 {
            viewport.zoom_at(Point::ZERO, 1.0);
        }
        assert!(viewport.zoom <= MAX_ZOOM);

        for _ in 0..200 {
            viewport.zoom_at(Point::ZERO, -1.0);
        }
        assert!(viewport.zoom >= MIN_ZOOM);
    }

    #[test]
    fn test_zoom_at_bound_is_noop() {
        let mut viewport = Viewport::new();
        viewport.set_zoom(MAX_ZOOM);
        viewport.pan = Vec2::new(5.0, 7.0);
        viewport.zoom_at(Point::new(100.0, 100.0), 1.0);
        // Pan untouched when the zoom cannot change.
        assert_eq!(viewport.pan, Vec2::new(5.0, 7.0));
    }

    #[test]
    fn test_button_zoom_steps() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        assert!((viewport.zoom - (DEFAULT_ZOOM + 0.2)).abs() < 1e-9);
        viewport.zoom_out();
        viewport.zoom_out();
        assert!((viewport.zoom - (DEFAULT_ZOOM - 0.2)).abs() < 1e-9);

        viewport.set_zoom(0.1);
        viewport.zoom_out();
        assert!((viewport.zoom - MIN_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset() {
        let mut viewport = Viewport::new();
        viewport.pan_by(Vec2::new(400.0, -300.0));
        viewport.set_zoom(4.2);
        viewport.reset();
        assert_eq!(viewport.pan, Vec2::ZERO);
        assert!((viewport.zoom - DEFAULT_ZOOM).abs() < f64::EPSILON);
    }
}
