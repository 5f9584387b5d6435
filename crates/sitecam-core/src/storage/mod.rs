//! Storage abstraction for exported project snapshots.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::scene::Scene;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Project not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for project storage backends.
///
/// The stored value is the export snapshot; the session itself is never
/// persisted. Implementations can keep snapshots in memory or on the
/// filesystem.
pub trait Storage: Send + Sync {
    /// Save a project snapshot.
    fn save(&self, id: &str, scene: &Scene) -> BoxFuture<'_, StorageResult<()>>;

    /// Load a project snapshot.
    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Scene>>;

    /// Delete a stored project.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all stored project IDs.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if a project exists.
    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
