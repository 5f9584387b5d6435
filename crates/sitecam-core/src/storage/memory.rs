//! In-memory storage implementation.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::scene::Scene;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    projects: RwLock<HashMap<String, Scene>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, scene: &Scene) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let scene = scene.clone();
        Box::pin(async move {
            let mut projects = self
                .projects
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            projects.insert(id, scene);
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Scene>> {
        let id = id.to_string();
        Box::pin(async move {
            let projects = self
                .projects
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            projects
                .get(&id)
                .cloned()
                .ok_or_else(|| StorageError::NotFound(id))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut projects = self
                .projects
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            projects.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let projects = self
                .projects
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            Ok(projects.keys().cloned().collect())
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move {
            let projects = self
                .projects
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            Ok(projects.contains_key(&id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::CameraDevice;
    use kurbo::Point;

    fn block_on<F: std::future::Future>(f: F) -> F::Output {
        // Simple blocking executor for tests
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn dummy_raw_waker() -> RawWaker {
            fn no_op(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker {
                dummy_raw_waker()
            }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(result) => return result,
                Poll::Pending => {}
            }
        }
    }

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        let mut scene = Scene::new();
        scene.add_camera(CameraDevice::new(Point::new(1.0, 2.0), "c".to_string()));

        block_on(storage.save("test", &scene)).unwrap();
        let loaded = block_on(storage.load("test")).unwrap();

        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_not_found() {
        let storage = MemoryStorage::new();
        let result = block_on(storage.load("nonexistent"));

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_exists() {
        let storage = MemoryStorage::new();
        let scene = Scene::new();

        assert!(!block_on(storage.exists("test")).unwrap());
        block_on(storage.save("test", &scene)).unwrap();
        assert!(block_on(storage.exists("test")).unwrap());
    }

    #[test]
    fn test_delete() {
        let storage = MemoryStorage::new();
        let scene = Scene::new();

        block_on(storage.save("test", &scene)).unwrap();
        block_on(storage.delete("test")).unwrap();
        assert!(!block_on(storage.exists("test")).unwrap());
    }

    #[test]
    fn test_list() {
        let storage = MemoryStorage::new();
        let scene = Scene::new();

        block_on(storage.save("site-a", &scene)).unwrap();
        block_on(storage.save("site-b", &scene)).unwrap();

        let list = block_on(storage.list()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains(&"site-a".to_string()));
        assert!(list.contains(&"site-b".to_string()));
    }
}
