use crate::modules::passes::core::pass_record::{PassRecord, PassRow};
use tracing::warn;

/// Converts stored rows into pass records. Rows whose end does not follow their start are
/// dropped with a warning; the rest keep their input order.
pub fn rows_to_passes(rows: impl IntoIterator<Item = PassRow>) -> Vec<PassRecord> {
    rows.into_iter()
        .filter_map(|row| {
            let (gs, sat) = (row.gs.clone(), row.sat.clone());
            match PassRecord::try_from(row) {
                Ok(pass) => Some(pass),
                Err(error) => {
                    warn!(
                        ground_station = %gs,
                        satellite = %sat,
                        %error,
                        "dropping malformed pass row"
                    );
                    None
                }
            }
        })
        .collect()
}
