use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate result for run {0}")]
    Duplicate(Uuid),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Write-once storage of finished run results, keyed by run id.
#[async_trait]
pub trait ResultStore<R: Send + Sync + 'static>: Send + Sync {
    async fn save(&self, run_id: Uuid, result: R) -> Result<(), StoreError>;
    async fn load(&self, run_id: Uuid) -> Result<Option<Arc<R>>, StoreError>;
}

pub mod in_memory;
