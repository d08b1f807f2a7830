// Bounded in-memory result store.
//
// Run ids are UUID v7, so key order is creation order. Once `capacity` results are held, saving
// a new one evicts the oldest. The capacity is at least one.

use crate::shared::infrastructure::result_store::{ResultStore, StoreError};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_CAPACITY: usize = 256;

pub struct InMemoryResultStore<R> {
    results: RwLock<BTreeMap<Uuid, Arc<R>>>,
    capacity: usize,
    is_offline: bool,
}

impl<R> Default for InMemoryResultStore<R> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<R> InMemoryResultStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: RwLock::new(BTreeMap::new()),
            capacity: capacity.max(1),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.results.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.results.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl<R: Send + Sync + 'static> ResultStore<R> for InMemoryResultStore<R> {
    async fn save(&self, run_id: Uuid, result: R) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Result store offline".into()));
        }
        let mut guard = self.results.write().await;
        if guard.contains_key(&run_id) {
            return Err(StoreError::Duplicate(run_id));
        }
        while guard.len() >= self.capacity {
            let Some((evicted, _)) = guard.pop_first() else {
                break;
            };
            debug!(%evicted, "result evicted");
        }
        guard.insert(run_id, Arc::new(result));
        Ok(())
    }

    async fn load(&self, run_id: Uuid) -> Result<Option<Arc<R>>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Result store offline".into()));
        }
        Ok(self.results.read().await.get(&run_id).cloned())
    }
}
