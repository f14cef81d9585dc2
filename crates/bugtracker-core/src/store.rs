use crate::{Bug, BugPatch, NewBug};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory bug repository.
///
/// Cloning the store hands out another handle to the same collection. Records
/// are kept newest-first and every read returns owned copies, so callers can
/// never mutate stored state through a returned value.
#[derive(Clone, Default)]
pub struct BugStore {
    inner: Arc<RwLock<StoreInner>>,
}

struct StoreInner {
    bugs: Vec<Bug>,
    next_id: u64,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self {
            bugs: Vec::new(),
            next_id: 1,
        }
    }
}

impl BugStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bug with the next sequential id
    pub async fn create(&self, new_bug: NewBug) -> Bug {
        let mut inner = self.inner.write().await;

        let id = inner.next_id.to_string();
        inner.next_id = inner.next_id.saturating_add(1);

        let bug = Bug::new(id, new_bug.title, new_bug.description);
        inner.bugs.insert(0, bug.clone());

        tracing::info!("Created bug: {} ({})", bug.title, bug.id);

        bug
    }

    /// List all bugs, newest first
    pub async fn find_all(&self) -> Vec<Bug> {
        let inner = self.inner.read().await;
        inner.bugs.clone()
    }

    /// Merge `patch` into the bug with the given id
    pub async fn update_by_id(&self, id: &str, patch: BugPatch) -> Option<Bug> {
        let mut inner = self.inner.write().await;

        let bug = inner.bugs.iter_mut().find(|bug| bug.id == id)?;
        bug.apply(patch);

        tracing::debug!("Updated bug {} (status: {})", bug.id, bug.status);

        Some(bug.clone())
    }

    /// Remove the bug with the given id, reporting whether it existed
    pub async fn delete_by_id(&self, id: &str) -> bool {
        let mut inner = self.inner.write().await;

        match inner.bugs.iter().position(|bug| bug.id == id) {
            Some(index) => {
                let removed = inner.bugs.remove(index);
                tracing::info!("Deleted bug: {} ({})", removed.title, removed.id);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.bugs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.bugs.is_empty()
    }

    /// Replace the contents with `seed`. The next id continues after the
    /// highest numeric id in the seed, or restarts at 1 when it is empty.
    #[cfg(any(test, feature = "test-support"))]
    pub async fn reset(&self, seed: Vec<Bug>) {
        let mut inner = self.inner.write().await;

        inner.next_id = seed
            .iter()
            .filter_map(|bug| bug.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max.saturating_add(1));
        inner.bugs = seed;
    }
}
