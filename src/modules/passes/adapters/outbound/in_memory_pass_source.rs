// In memory pass source.
//
// Purpose
// - Exercise simulations without a passes file.

use crate::modules::passes::core::filter::PassFilter;
use crate::modules::passes::core::pass_record::PassRecord;
use crate::modules::passes::core::ports::{PassSource, PassSourceError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPassSource {
    passes: RwLock<Vec<PassRecord>>,
    is_offline: bool,
}

impl InMemoryPassSource {
    pub fn new(passes: Vec<PassRecord>) -> Self {
        Self {
            passes: RwLock::new(passes),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn extend(&self, passes: impl IntoIterator<Item = PassRecord>) {
        self.passes.write().await.extend(passes);
    }
}

#[async_trait::async_trait]
impl PassSource for InMemoryPassSource {
    async fn load(&self, filter: &PassFilter) -> Result<Vec<PassRecord>, PassSourceError> {
        if self.is_offline {
            return Err(PassSourceError::Backend("Pass source offline".into()));
        }
        let guard = self.passes.read().await;
        Ok(filter.apply(guard.iter().cloned()))
    }
}
