//! Selection, inspection, and pending-delete state.

use serde::{Deserialize, Serialize};

/// Which kind of entity an action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Camera,
    Zone,
}

/// A delete that has been requested but not yet confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub id: String,
    pub kind: EntityKind,
}

/// Tracks which single entity is focused for inspection or editing.
///
/// Selecting a camera clears any zone selection and vice versa. The
/// viewer-mode tooltip is tracked separately so toggling it never
/// disturbs edit-mode selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected_camera: Option<String>,
    selected_zone: Option<String>,
    tooltip_camera: Option<String>,
    pending_delete: Option<PendingDelete>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_camera(&self) -> Option<&str> {
        self.selected_camera.as_deref()
    }

    pub fn selected_zone(&self) -> Option<&str> {
        self.selected_zone.as_deref()
    }

    /// Camera whose inspector tooltip is open, if any.
    pub fn tooltip_camera(&self) -> Option<&str> {
        self.tooltip_camera.as_deref()
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn select_camera(&mut self, id: String) {
        self.selected_zone = None;
        self.selected_camera = Some(id);
    }

    pub fn select_zone(&mut self, id: String) {
        self.selected_camera = None;
        self.selected_zone = Some(id);
    }

    /// Clear both selections.
    pub fn clear(&mut self) {
        self.selected_camera = None;
        self.selected_zone = None;
    }

    /// Open the tooltip for a camera, or close it if it is already open
    /// for the same camera.
    pub fn toggle_tooltip(&mut self, id: &str) {
        if self.tooltip_camera.as_deref() == Some(id) {
            self.tooltip_camera = None;
        } else {
            self.tooltip_camera = Some(id.to_string());
        }
    }

    pub fn close_tooltip(&mut self) {
        self.tooltip_camera = None;
    }

    /// Stage a delete for confirmation.
    pub fn request_delete(&mut self, id: String, kind: EntityKind) {
        self.pending_delete = Some(PendingDelete { id, kind });
    }

    /// Take the staged delete, if any.
    pub fn take_pending_delete(&mut self) -> Option<PendingDelete> {
        self.pending_delete.take()
    }

    /// Discard the staged delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Drop any references to a removed entity.
    pub fn remove(&mut self, id: &str) {
        if self.selected_camera.as_deref() == Some(id) {
            self.selected_camera = None;
        }
        if self.selected_zone.as_deref() == Some(id) {
            self.selected_zone = None;
        }
        if self.tooltip_camera.as_deref() == Some(id) {
            self.tooltip_camera = None;
        }
    }
}
