//! Scene entities and the aggregate scene model.

use crate::geometry::CoverageArc;
use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Radius of a camera marker's circular hit target, in scene units.
pub const CAMERA_HIT_RADIUS: f64 = 24.0;

/// Aperture a newly placed camera starts with, degrees.
pub const DEFAULT_FOV: f64 = 60.0;
/// Coverage radius a newly placed camera starts with, scene units.
pub const DEFAULT_RANGE: f64 = 150.0;

/// Allowed aperture range, degrees.
pub const FOV_MIN: f64 = 10.0;
pub const FOV_MAX: f64 = 180.0;
/// Allowed coverage radius range, scene units.
pub const RANGE_MIN: f64 = 50.0;
pub const RANGE_MAX: f64 = 1500.0;

/// Generate a unique entity id with the given prefix.
pub(crate) fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Operational status of a camera device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraStatus {
    #[default]
    Normal,
    NeedsMaintenance,
    Malfunctioning,
}

impl CameraStatus {
    /// Translucent tint the rendering layer uses for the coverage arc.
    pub fn tint(&self) -> Color {
        match self {
            CameraStatus::Normal => Color::from_rgba8(16, 185, 129, 38),
            CameraStatus::NeedsMaintenance => Color::from_rgba8(245, 158, 11, 38),
            CameraStatus::Malfunctioning => Color::from_rgba8(244, 63, 94, 38),
        }
    }
}

/// A sensor device placed on the floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDevice {
    pub id: String,
    /// Display name.
    pub name: String,
    /// Scene-space position.
    pub x: f64,
    pub y: f64,
    /// Direction the coverage-arc bisector points, degrees (0° = up,
    /// increasing clockwise).
    pub rotation: f64,
    /// Aperture angle, degrees.
    pub fov: f64,
    /// Coverage radius in scene units.
    pub range: f64,
    pub status: CameraStatus,
    /// Free-text technical notes.
    #[serde(default)]
    pub notes: String,
    /// When set, no field except this flag itself may be mutated.
    #[serde(default)]
    pub locked: bool,
}

impl CameraDevice {
    /// Create a camera at a position with the editor defaults.
    pub fn new(position: Point, name: String) -> Self {
        Self {
            id: generate_id("cam"),
            name,
            x: position.x,
            y: position.y,
            rotation: 0.0,
            fov: DEFAULT_FOV,
            range: DEFAULT_RANGE,
            status: CameraStatus::Normal,
            notes: String::new(),
            locked: false,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Field-of-view wedge in camera-local coordinates.
    pub fn coverage(&self) -> CoverageArc {
        CoverageArc::new(self.rotation, self.fov, self.range)
    }

    /// Whether a scene-space point falls on the camera's marker disc.
    pub fn hit_test(&self, point: Point) -> bool {
        let dx = point.x - self.x;
        let dy = point.y - self.y;
        dx * dx + dy * dy <= CAMERA_HIT_RADIUS * CAMERA_HIT_RADIUS
    }

    /// Clamp slider-driven fields to their documented ranges.
    pub fn clamp_ranges(&mut self) {
        self.rotation = self.rotation.clamp(0.0, 360.0);
        self.fov = self.fov.clamp(FOV_MIN, FOV_MAX);
        self.range = self.range.clamp(RANGE_MIN, RANGE_MAX);
    }
}

/// Highlight colors available for zones.
///
/// Serialized as the CSS rgba string the export format carries; an
/// unknown string on import falls back to the default blue rather than
/// failing the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneColor {
    #[default]
    Blue,
    Emerald,
    Amber,
    Rose,
    Violet,
    Pink,
    Slate,
    White,
}

impl ZoneColor {
    /// Palette entries in the order the editor presents them.
    pub const PALETTE: [ZoneColor; 8] = [
        ZoneColor::Blue,
        ZoneColor::Emerald,
        ZoneColor::Amber,
        ZoneColor::Rose,
        ZoneColor::Violet,
        ZoneColor::Pink,
        ZoneColor::Slate,
        ZoneColor::White,
    ];

    /// CSS rgba string used on the wire.
    pub fn as_css(&self) -> &'static str {
        match self {
            ZoneColor::Blue => "rgba(59, 130, 246, 0.2)",
            ZoneColor::Emerald => "rgba(16, 185, 129, 0.2)",
            ZoneColor::Amber => "rgba(245, 158, 11, 0.2)",
            ZoneColor::Rose => "rgba(244, 63, 94, 0.2)",
            ZoneColor::Violet => "rgba(139, 92, 246, 0.2)",
            ZoneColor::Pink => "rgba(236, 72, 153, 0.2)",
            ZoneColor::Slate => "rgba(100, 116, 139, 0.2)",
            ZoneColor::White => "rgba(255, 255, 255, 0.1)",
        }
    }

    /// Parse a wire string; anything outside the palette maps to blue.
    pub fn from_css(s: &str) -> Self {
        Self::PALETTE
            .iter()
            .copied()
            .find(|c| c.as_css() == s)
            .unwrap_or_default()
    }

    /// Translucent fill for rendering.
    pub fn fill(&self) -> Color {
        match self {
            ZoneColor::Blue => Color::from_rgba8(59, 130, 246, 51),
            ZoneColor::Emerald => Color::from_rgba8(16, 185, 129, 51),
            ZoneColor::Amber => Color::from_rgba8(245, 158, 11, 51),
            ZoneColor::Rose => Color::from_rgba8(244, 63, 94, 51),
            ZoneColor::Violet => Color::from_rgba8(139, 92, 246, 51),
            ZoneColor::Pink => Color::from_rgba8(236, 72, 153, 51),
            ZoneColor::Slate => Color::from_rgba8(100, 116, 139, 51),
            ZoneColor::White => Color::from_rgba8(255, 255, 255, 26),
        }
    }
}

impl Serialize for ZoneColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_css())
    }
}

impl<'de> Deserialize<'de> for ZoneColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ZoneColor::from_css(&s))
    }
}

/// A rectangular area of the floor plan with a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    /// Category label (free text).
    #[serde(rename = "type")]
    pub kind: String,
    /// Top-left corner and extent, scene units. Width and height are
    /// non-negative; the draw gesture normalizes before construction.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ZoneColor,
}

impl Zone {
    /// Default category label for new zones.
    pub const DEFAULT_KIND: &'static str = "General";

    /// Create a zone from a normalized rectangle.
    pub fn new(rect: Rect, name: String) -> Self {
        Self {
            id: generate_id("zone"),
            name,
            kind: Self::DEFAULT_KIND.to_string(),
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
            color: ZoneColor::default(),
        }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Whether a scene-space point falls inside the zone.
    pub fn hit_test(&self, point: Point) -> bool {
        self.as_rect().contains(point)
    }
}

/// The single recording-unit marker. At most one per scene; placing
/// again replaces the position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dvr {
    pub x: f64,
    pub y: f64,
}

impl Dvr {
    pub fn new(position: Point) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The aggregate scene: every entity placed on the floor plan, plus the
/// optional background image reference.
///
/// All update/remove operations rebuild the owning collection rather
/// than mutating an entity in place, so observers holding a previous
/// clone never see a half-updated entity. Absent identifiers are
/// silent no-ops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub cameras: Vec<CameraDevice>,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub dvr: Option<Dvr>,
    /// Opaque image reference (e.g. a data URL); never decoded here.
    #[serde(default, rename = "mapImage")]
    pub map_image: Option<String>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty scene over an optional floor-plan image (new project).
    pub fn with_map_image(map_image: Option<String>) -> Self {
        Self {
            map_image,
            ..Self::default()
        }
    }

    pub fn camera(&self, id: &str) -> Option<&CameraDevice> {
        self.cameras.iter().find(|c| c.id == id)
    }

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn add_camera(&mut self, camera: CameraDevice) {
        log::debug!("adding camera {} at ({}, {})", camera.id, camera.x, camera.y);
        self.cameras.push(camera);
    }

    /// Replace a camera by identifier.
    pub fn update_camera(&mut self, updated: CameraDevice) {
        self.cameras = self
            .cameras
            .iter()
            .map(|c| if c.id == updated.id { updated.clone() } else { c.clone() })
            .collect();
    }

    /// Move a camera to a new position. Locked cameras and absent ids
    /// are no-ops.
    pub fn move_camera(&mut self, id: &str, position: Point) {
        self.cameras = self
            .cameras
            .iter()
            .map(|c| {
                if c.id == id && !c.locked {
                    let mut moved = c.clone();
                    moved.set_position(position);
                    moved
                } else {
                    c.clone()
                }
            })
            .collect();
    }

    pub fn remove_camera(&mut self, id: &str) {
        self.cameras = self.cameras.iter().filter(|c| c.id != id).cloned().collect();
    }

    pub fn add_zone(&mut self, zone: Zone) {
        log::debug!("adding zone {} ({}x{})", zone.id, zone.width, zone.height);
        self.zones.push(zone);
    }

    /// Replace a zone by identifier.
    pub fn update_zone(&mut self, updated: Zone) {
        self.zones = self
            .zones
            .iter()
            .map(|z| if z.id == updated.id { updated.clone() } else { z.clone() })
            .collect();
    }

    pub fn remove_zone(&mut self, id: &str) {
        self.zones = self.zones.iter().filter(|z| z.id != id).cloned().collect();
    }

    /// Set or replace the recording-unit marker.
    pub fn set_dvr(&mut self, dvr: Dvr) {
        self.dvr = Some(dvr);
    }

    /// Topmost camera whose marker contains the point. Later entries
    /// render on top, so search back to front.
    pub fn camera_at(&self, point: Point) -> Option<&CameraDevice> {
        self.cameras.iter().rev().find(|c| c.hit_test(point))
    }

    /// Topmost zone containing the point.
    pub fn zone_at(&self, point: Point) -> Option<&Zone> {
        self.zones.iter().rev().find(|z| z.hit_test(point))
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty() && self.zones.is_empty() && self.dvr.is_none()
    }
}
