use crate::modules::passes::core::filter::PassFilter;
use crate::modules::passes::core::pass_record::PassRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassSourceError {
    #[error("pass source io: {0}")]
    Io(String),

    #[error("pass source parse: {0}")]
    Parse(String),

    #[error("pass source backend: {0}")]
    Backend(String),
}

/// Read side of the pre-computed passes table.
#[async_trait]
pub trait PassSource: Send + Sync {
    async fn load(&self, filter: &PassFilter) -> Result<Vec<PassRecord>, PassSourceError>;
}
