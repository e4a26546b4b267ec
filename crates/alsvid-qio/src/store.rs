//! Problem storage seam.
//!
//! Uploading serializes a problem and ships it to wherever the solver
//! service reads input data from. Transfer mechanics (compression, signed
//! URIs, retries) live behind [`ProblemStore`]; this crate only fixes the
//! interface and provides an in-memory implementation.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::{QioError, QioResult};
use crate::problem::Problem;

/// Reference to an uploaded problem: the name it is stored under and the
/// URI the solver service reads it from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemHandle {
    /// Storage name.
    pub name: String,
    /// URI of the uploaded input data.
    pub uploaded_uri: String,
}

impl ProblemHandle {
    /// Create a handle from its parts.
    pub fn new(name: impl Into<String>, uploaded_uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uploaded_uri: uploaded_uri.into(),
        }
    }

    /// Handle for a blob inside a container. Any signed query string on the
    /// container URI is dropped before joining.
    pub fn from_blob(container_uri: &str, blob_name: &str) -> Self {
        let base = container_uri.split('?').next().unwrap_or(container_uri);
        Self {
            name: blob_name.to_string(),
            uploaded_uri: format!("{}/{}", base.trim_end_matches('/'), blob_name),
        }
    }
}

/// Storage for uploaded problems.
#[async_trait]
pub trait ProblemStore: Send + Sync {
    /// Serialize and upload a problem, returning the handle jobs are
    /// submitted against. Uploading under an existing name replaces the
    /// stored data.
    async fn upload(&self, problem: &Problem) -> QioResult<ProblemHandle>;

    /// Whether a problem with this name has been stored.
    async fn exists(&self, name: &str) -> QioResult<bool>;

    /// Handle for an already-stored problem.
    async fn handle(&self, name: &str) -> QioResult<ProblemHandle>;
}

/// In-memory [`ProblemStore`] used by tests and demos.
pub struct MemoryStore {
    container_uri: String,
    blobs: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// Create a store with the default container URI.
    pub fn new() -> Self {
        Self::with_container_uri("mem://qio-problems")
    }

    /// Create a store rooted at the given container URI.
    pub fn with_container_uri(container_uri: impl Into<String>) -> Self {
        Self {
            container_uri: container_uri.into(),
            blobs: Mutex::new(FxHashMap::default()),
        }
    }

    /// Raw stored input data, if present.
    pub async fn input_data(&self, name: &str) -> Option<String> {
        self.blobs.lock().await.get(name).cloned()
    }

    /// Number of stored problems.
    pub async fn len(&self) -> usize {
        self.blobs.lock().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.blobs.lock().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProblemStore for MemoryStore {
    async fn upload(&self, problem: &Problem) -> QioResult<ProblemHandle> {
        let data = problem.to_input_data()?;
        let handle = ProblemHandle::from_blob(&self.container_uri, &problem.name);
        self.blobs.lock().await.insert(problem.name.clone(), data);
        Ok(handle)
    }

    async fn exists(&self, name: &str) -> QioResult<bool> {
        Ok(self.blobs.lock().await.contains_key(name))
    }

    async fn handle(&self, name: &str) -> QioResult<ProblemHandle> {
        if self.blobs.lock().await.contains_key(name) {
            Ok(ProblemHandle::from_blob(&self.container_uri, name))
        } else {
            Err(QioError::ProblemNotFound(name.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ProblemType;

    #[test]
    fn test_from_blob_strips_query_string() {
        let handle = ProblemHandle::from_blob("https://store/qio-problems?sig=abc123", "qubo_10");
        assert_eq!(handle.name, "qubo_10");
        assert_eq!(handle.uploaded_uri, "https://store/qio-problems/qubo_10");
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        let mut problem = Problem::new("p1", ProblemType::Ising);
        problem.add_term(-2.0, vec![0]);

        assert!(!store.exists("p1").await.unwrap());
        let handle = store.upload(&problem).await.unwrap();
        assert_eq!(handle.name, "p1");
        assert_eq!(handle.uploaded_uri, "mem://qio-problems/p1");
        assert!(store.exists("p1").await.unwrap());
        assert_eq!(store.handle("p1").await.unwrap(), handle);

        let data = store.input_data("p1").await.unwrap();
        assert!(data.contains("\"terms\""));
    }

    #[tokio::test]
    async fn test_missing_handle_errors() {
        let store = MemoryStore::new();
        let err = store.handle("nope").await.unwrap_err();
        assert!(matches!(err, QioError::ProblemNotFound(_)));
    }
}
