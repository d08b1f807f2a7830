// Pass source backed by a JSON file.
//
// Storage shape
// - A single JSON array of pass rows (start, end, duration, rise_az, set_az, tca, max_el, gs, sat).
// - The file is read on every load so an external predictor can replace it between runs.

use crate::modules::passes::adapters::mappers::pass_row_to_pass_record::rows_to_passes;
use crate::modules::passes::core::filter::PassFilter;
use crate::modules::passes::core::pass_record::{PassRecord, PassRow};
use crate::modules::passes::core::ports::{PassSource, PassSourceError};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFilePassSource {
    path: PathBuf,
}

impl JsonFilePassSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl PassSource for JsonFilePassSource {
    async fn load(&self, filter: &PassFilter) -> Result<Vec<PassRecord>, PassSourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| PassSourceError::Io(format!("{}: {e}", self.path.display())))?;
        let rows: Vec<PassRow> =
            serde_json::from_str(&raw).map_err(|e| PassSourceError::Parse(e.to_string()))?;
        let passes = filter.apply(rows_to_passes(rows));
        debug!(path = %self.path.display(), passes = passes.len(), "loaded passes");
        Ok(passes)
    }
}

/// Writes passes in the same row layout `JsonFilePassSource` reads.
pub async fn write_passes(
    path: impl AsRef<Path>,
    passes: &[PassRecord],
) -> Result<(), PassSourceError> {
    let rows: Vec<PassRow> = passes.iter().cloned().map(PassRow::from).collect();
    let raw =
        serde_json::to_string_pretty(&rows).map_err(|e| PassSourceError::Parse(e.to_string()))?;
    tokio::fs::write(path.as_ref(), raw)
        .await
        .map_err(|e| PassSourceError::Io(format!("{}: {e}", path.as_ref().display())))
}
