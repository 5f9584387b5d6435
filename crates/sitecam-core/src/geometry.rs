//! Coverage-arc and zone-rectangle geometry.
//!
//! Pure functions and value types; no scene state. Angles follow the
//! screen convention used by the rest of the crate: degrees, 0° pointing
//! up, increasing clockwise.

use kurbo::{Arc, BezPath, Point, Rect, Vec2};

/// Minimum width and height (scene units) a drawn rectangle must exceed
/// to become a zone.
pub const MIN_ZONE_SIZE: f64 = 20.0;

/// Convert a polar coordinate around `center` to a cartesian point.
pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point::new(
        center.x + radius * rad.cos(),
        center.y + radius * rad.sin(),
    )
}

/// A camera's field-of-view wedge, centered at the camera's local origin.
///
/// The wedge spans `[rotation - fov/2, rotation + fov/2]` at the coverage
/// radius. Rendering needs the boundary points and, for SVG-style
/// consumers, the large-arc flag; `to_path` builds the filled pie slice
/// directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageArc {
    /// Start boundary angle in degrees.
    pub start_angle: f64,
    /// End boundary angle in degrees.
    pub end_angle: f64,
    /// Coverage radius in scene units.
    pub radius: f64,
}

impl CoverageArc {
    /// Build the wedge for a camera orientation, aperture, and radius.
    pub fn new(rotation: f64, fov: f64, range: f64) -> Self {
        Self {
            start_angle: rotation - fov / 2.0,
            end_angle: rotation + fov / 2.0,
            radius: range,
        }
    }

    /// Angular span of the wedge in degrees.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// SVG large-arc flag: `false` selects the minor arc (span ≤ 180°),
    /// `true` the major arc. Picking the wrong arc draws the complement
    /// of the wedge for wide apertures.
    pub fn large_arc(&self) -> bool {
        self.span() > 180.0
    }

    /// Boundary point at the start angle.
    pub fn start_point(&self) -> Point {
        polar_to_cartesian(Point::ZERO, self.radius, self.start_angle)
    }

    /// Boundary point at the end angle.
    pub fn end_point(&self) -> Point {
        polar_to_cartesian(Point::ZERO, self.radius, self.end_angle)
    }

    /// Build the filled wedge path:
    /// origin → start boundary → arc → end boundary → origin.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(Point::ZERO);
        path.line_to(self.start_point());

        // Sweeping by the full span traces the wedge's own arc, never
        // the complementary one, regardless of aperture.
        let arc = Arc::new(
            Point::ZERO,
            Vec2::new(self.radius, self.radius),
            (self.start_angle - 90.0).to_radians(),
            self.span().to_radians(),
            0.0,
        );
        arc.to_cubic_beziers(0.1, |p1, p2, p3| path.curve_to(p1, p2, p3));

        path.close_path();
        path
    }
}

/// Normalize the two corners of a drag gesture into a well-formed
/// rectangle with non-negative width and height, independent of drag
/// direction.
pub fn normalize_rect(start: Point, current: Point) -> Rect {
    Rect::from_points(start, current)
}

/// Whether a drawn rectangle is large enough to become a zone.
pub fn meets_minimum_size(rect: Rect) -> bool {
    rect.width() > MIN_ZONE_SIZE && rect.height() > MIN_ZONE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_to_cartesian_cardinal_points() {
        let center = Point::ZERO;
        // 0° points up (negative y on screen).
        let up = polar_to_cartesian(center, 100.0, 0.0);
        assert!(up.x.abs() < 1e-9);
        assert!((up.y + 100.0).abs() < 1e-9);

        // 90° points right.
        let right = polar_to_cartesian(center, 100.0, 90.0);
        assert!((right.x - 100.0).abs() < 1e-9);
        assert!(right.y.abs() < 1e-9);

        // 180° points down.
        let down = polar_to_cartesian(center, 100.0, 180.0);
        assert!(down.x.abs() < 1e-9);
        assert!((down.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_coverage_arc_span() {
        let arc = CoverageArc::new(45.0, 60.0, 150.0);
        assert!((arc.start_angle - 15.0).abs() < f64::EPSILON);
        assert!((arc.end_angle - 75.0).abs() < f64::EPSILON);
        assert!((arc.span() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_large_arc_flag() {
        assert!(!CoverageArc::new(0.0, 90.0, 100.0).large_arc());
        assert!(!CoverageArc::new(0.0, 180.0, 100.0).large_arc());
        assert!(CoverageArc::new(0.0, 270.0, 100.0).large_arc());
    }

    #[test]
    fn test_wedge_boundary_points() {
        // A 90° aperture centered on "up" has boundaries at -45° and 45°.
        let arc = CoverageArc::new(0.0, 90.0, 100.0);
        let start = arc.start_point();
        let end = arc.end_point();
        let diag = 100.0 / f64::sqrt(2.0);
        assert!((start.x + diag).abs() < 1e-9);
        assert!((start.y + diag).abs() < 1e-9);
        assert!((end.x - diag).abs() < 1e-9);
        assert!((end.y + diag).abs() < 1e-9);
    }

    #[test]
    fn test_wedge_path_is_closed_and_nonempty() {
        let path = CoverageArc::new(120.0, 60.0, 200.0).to_path();
        let elements: Vec<_> = path.elements().to_vec();
        assert!(elements.len() > 3);
        assert!(matches!(elements.last(), Some(kurbo::PathEl::ClosePath)));
    }

    #[test]
    fn test_normalize_rect_direction_independent() {
        let rect = normalize_rect(Point::new(100.0, 100.0), Point::new(40.0, 60.0));
        assert!((rect.x0 - 40.0).abs() < f64::EPSILON);
        assert!((rect.y0 - 60.0).abs() < f64::EPSILON);
        assert!((rect.width() - 60.0).abs() < f64::EPSILON);
        assert!((rect.height() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_minimum_size_threshold() {
        assert!(!meets_minimum_size(normalize_rect(
            Point::ZERO,
            Point::new(15.0, 15.0)
        )));
        // The threshold is strict: exactly 20 wide is still too small.
        assert!(!meets_minimum_size(normalize_rect(
            Point::ZERO,
            Point::new(20.0, 100.0)
        )));
        assert!(meets_minimum_size(normalize_rect(
            Point::ZERO,
            Point::new(25.0, 25.0)
        )));
    }
}
