//! Project snapshot import/export.
//!
//! The wire format is the exact serialization of the scene aggregate:
//!
//! ```json
//! {
//!   "cameras": [ { "id", "name", "x", "y", "rotation", "fov", "range",
//!                  "status", "notes", "locked" } ],
//!   "zones":   [ { "id", "name", "type", "x", "y", "width", "height",
//!                  "color" } ],
//!   "dvr": { "x", "y" },
//!   "mapImage": "..."
//! }
//! ```
//!
//! Missing top-level keys default to empty collections rather than
//! failing; a document that does not parse at all surfaces
//! [`ProjectError::Parse`] and leaves the caller's scene untouched.

use crate::scene::Scene;
use thiserror::Error;

/// Errors surfaced by project import/export.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The document is not a valid project file.
    #[error("invalid project file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialize a scene snapshot to project JSON.
pub fn to_json(scene: &Scene) -> Result<String, ProjectError> {
    Ok(serde_json::to_string_pretty(scene)?)
}

/// Parse a project document into a scene snapshot.
pub fn from_json(json: &str) -> Result<Scene, ProjectError> {
    Ok(serde_json::from_str(json)?)
}
