//! Editor session: the interaction state machine.
//!
//! `EditorSession` owns the scene, viewport, tool, selection, and the
//! in-progress gesture, and reduces pointer events into scene and
//! viewport mutations. It has no knowledge of any rendering surface, so
//! the whole state machine is testable by feeding it events directly.
//!
//! All transitions are total: stale identifiers and degenerate gestures
//! are silent no-ops, never errors.

use crate::geometry;
use crate::input::{MouseButton, PointerEvent};
use crate::scene::{CameraDevice, Dvr, Scene, Zone};
use crate::selection::{EntityKind, SelectionState};
use crate::tools::{Gesture, Tool};
use crate::viewport::Viewport;
use kurbo::Point;

/// Whether the session mutates the scene or only inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Edit,
    /// Read-only: navigation and inspection, no mutation.
    View,
}

/// Interactive editing session over a scene.
#[derive(Debug, Clone)]
pub struct EditorSession {
    pub scene: Scene,
    pub viewport: Viewport,
    pub selection: SelectionState,
    mode: SessionMode,
    tool: Tool,
    gesture: Gesture,
}

impl EditorSession {
    /// Start an empty project over an optional floor-plan image.
    pub fn new_project(map_image: Option<String>) -> Self {
        Self::from_scene(Scene::with_map_image(map_image), SessionMode::Edit)
    }

    /// Open a loaded snapshot for editing.
    pub fn open_project(scene: Scene) -> Self {
        Self::from_scene(scene, SessionMode::Edit)
    }

    /// Open a loaded snapshot for viewing only.
    pub fn open_project_read_only(scene: Scene) -> Self {
        Self::from_scene(scene, SessionMode::View)
    }

    fn from_scene(scene: Scene, mode: SessionMode) -> Self {
        log::info!(
            "opening session ({:?}): {} cameras, {} zones",
            mode,
            scene.cameras.len(),
            scene.zones.len()
        );
        Self {
            scene,
            viewport: Viewport::new(),
            selection: SelectionState::new(),
            mode,
            tool: Tool::Select,
            gesture: Gesture::Idle,
        }
    }

    /// Hand off the current scene as an export snapshot.
    pub fn snapshot(&self) -> Scene {
        self.scene.clone()
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_read_only(&self) -> bool {
        self.mode == SessionMode::View
    }

    /// Switch between edit and view mode. Entering view mode forces the
    /// Select tool and abandons any in-progress gesture.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            SessionMode::Edit => SessionMode::View,
            SessionMode::View => SessionMode::Edit,
        };
        if self.is_read_only() {
            self.tool = Tool::Select;
            self.gesture = Gesture::Idle;
        }
        log::info!("session mode is now {:?}", self.mode);
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Change the active tool. Ignored in view mode.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.is_read_only() {
            return;
        }
        self.tool = tool;
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Feed one pointer event through the state machine.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.pointer_down(position),
            PointerEvent::Down { .. } => {}
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position, .. } => self.pointer_up(position),
            PointerEvent::Leave => self.pointer_leave(),
            PointerEvent::Scroll { position, delta } => {
                // Wheel down (positive y delta) zooms out.
                let direction = if delta.y > 0.0 { -1.0 } else { 1.0 };
                self.viewport.zoom_at(position, direction);
            }
        }
    }

    fn pointer_down(&mut self, screen: Point) {
        let scene_point = self.viewport.screen_to_scene(screen);

        // A press on an unlocked camera starts a drag regardless of the
        // active tool.
        if !self.is_read_only() {
            if let Some(camera) = self.scene.camera_at(scene_point) {
                if !camera.locked {
                    let id = camera.id.clone();
                    self.selection.select_camera(id.clone());
                    self.selection.close_tooltip();
                    self.gesture = Gesture::DraggingCamera { id };
                    return;
                }
            }
        }

        if self.tool == Tool::DrawZone && !self.is_read_only() {
            self.gesture = Gesture::DrawingZone {
                start: scene_point,
                current: scene_point,
            };
        } else {
            self.gesture = Gesture::Panning {
                last_screen: screen,
                moved: false,
            };
        }
    }

    fn pointer_move(&mut self, screen: Point) {
        match self.gesture.clone() {
            Gesture::Idle => {}
            Gesture::Panning { last_screen, .. } => {
                // Raw screen delta: pan speed is independent of zoom.
                self.viewport.pan_by(screen - last_screen);
                self.gesture = Gesture::Panning {
                    last_screen: screen,
                    moved: true,
                };
            }
            Gesture::DraggingCamera { id } => {
                let scene_point = self.viewport.screen_to_scene(screen);
                // Re-checks the lock, so a lock toggled mid-drag halts
                // further movement; a camera deleted mid-drag is a no-op.
                self.scene.move_camera(&id, scene_point);
            }
            Gesture::DrawingZone { start, .. } => {
                self.gesture = Gesture::DrawingZone {
                    start,
                    current: self.viewport.screen_to_scene(screen),
                };
            }
        }
    }

    fn pointer_up(&mut self, screen: Point) {
        match self.gesture.clone() {
            Gesture::DrawingZone { start, current } => self.finish_zone(start, current),
            Gesture::Panning { moved: false, .. } => self.resolve_click(screen),
            _ => {}
        }
        self.gesture = Gesture::Idle;
    }

    /// Pointer left the surface: an implicit release. Commits whatever
    /// partial effect is valid but never resolves a click.
    fn pointer_leave(&mut self) {
        if let Gesture::DrawingZone { start, current } = self.gesture.clone() {
            self.finish_zone(start, current);
        }
        self.gesture = Gesture::Idle;
    }

    fn finish_zone(&mut self, start: Point, current: Point) {
        let rect = geometry::normalize_rect(start, current);
        if !geometry::meets_minimum_size(rect) {
            log::debug!("discarding zone draw below minimum size: {:?}", rect);
            return;
        }

        let name = format!("Zone {}", self.scene.zones.len() + 1);
        let zone = Zone::new(rect, name);
        let id = zone.id.clone();
        self.scene.add_zone(zone);
        self.selection.select_zone(id);
        self.tool = Tool::Select;
    }

    /// A press-release with no intervening movement. Routed the way the
    /// input surface routes clicks: camera markers first, then zones,
    /// then the empty canvas with the active tool.
    fn resolve_click(&mut self, screen: Point) {
        let scene_point = self.viewport.screen_to_scene(screen);

        if let Some(camera) = self.scene.camera_at(scene_point) {
            let id = camera.id.clone();
            if self.is_read_only() {
                self.selection.toggle_tooltip(&id);
            } else {
                // The lock freezes fields, not focus.
                self.selection.select_camera(id);
                self.selection.close_tooltip();
            }
            return;
        }

        if !self.is_read_only() {
            if let Some(zone) = self.scene.zone_at(scene_point) {
                let id = zone.id.clone();
                self.selection.select_zone(id);
                return;
            }
        }

        match self.tool {
            Tool::PlaceCamera if !self.is_read_only() => {
                let name = format!("Camera {}", self.scene.cameras.len() + 1);
                let camera = CameraDevice::new(scene_point, name);
                let id = camera.id.clone();
                self.scene.add_camera(camera);
                self.selection.select_camera(id);
                self.selection.close_tooltip();
                self.tool = Tool::Select;
            }
            Tool::PlaceDvr if !self.is_read_only() => {
                self.scene.set_dvr(Dvr::new(scene_point));
                self.tool = Tool::Select;
            }
            _ => {
                // Select tool (or any tool in view mode): clicking the
                // empty canvas clears focus and closes the tooltip.
                if self.tool == Tool::Select {
                    self.selection.clear();
                    self.selection.close_tooltip();
                }
            }
        }
    }

    /// Apply an inspection-panel edit to a camera.
    ///
    /// A locked camera accepts only the lock flag itself (the unlock
    /// path); every other field is re-read from the stored entity.
    /// Slider-driven fields are clamped to their documented ranges.
    /// Absent ids are no-ops.
    pub fn update_camera(&mut self, updated: CameraDevice) {
        if self.is_read_only() {
            return;
        }
        let Some(existing) = self.scene.camera(&updated.id) else {
            return;
        };

        let mut next = if existing.locked {
            let mut unlock_only = existing.clone();
            unlock_only.locked = updated.locked;
            unlock_only
        } else {
            updated
        };
        next.clamp_ranges();
        self.scene.update_camera(next);
    }

    /// Apply an inspection-panel edit to a zone. Absent ids are no-ops.
    pub fn update_zone(&mut self, updated: Zone) {
        if self.is_read_only() {
            return;
        }
        self.scene.update_zone(updated);
    }

    /// Stage a delete for confirmation. Nothing is removed yet.
    pub fn request_delete(&mut self, id: String, kind: EntityKind) {
        self.selection.request_delete(id, kind);
    }

    /// Perform the staged delete and clear any reference to the entity.
    pub fn confirm_delete(&mut self) {
        if self.is_read_only() {
            return;
        }
        let Some(pending) = self.selection.take_pending_delete() else {
            return;
        };
        match pending.kind {
            EntityKind::Camera => self.scene.remove_camera(&pending.id),
            EntityKind::Zone => self.scene.remove_zone(&pending.id),
        }
        self.selection.remove(&pending.id);
        log::info!("deleted {:?} {}", pending.kind, pending.id);
    }

    /// Discard the staged delete, leaving the scene unchanged.
    pub fn cancel_delete(&mut self) {
        self.selection.cancel_delete();
    }
}
