use crate::error::{AppError, ConfigError};
use crate::table::dataset::{RowId, TableDataset};

/// Produces total orderings over row identifiers from precomputed sort keys.
/// Never touches the raw records or the rendered rows.
pub struct SortEngine;

impl SortEngine {
    /// Order every row id by the primary column, breaking ties with the
    /// tiebreak column and finally with the row id itself. The id tiebreak
    /// makes the order fully deterministic, so the descending order is the
    /// exact reverse of the ascending one and an unstable sort is safe.
    pub fn order(
        dataset: &TableDataset,
        primary: &str,
        tiebreak: &str,
        ascending: bool,
    ) -> Result<Vec<RowId>, AppError> {
        let primary_pos = Self::position(dataset, primary)?;
        let tiebreak_pos = Self::position(dataset, tiebreak)?;

        let mut ids: Vec<RowId> = (0..dataset.len()).collect();
        ids.sort_unstable_by(|&a, &b| {
            let ordering = dataset
                .sort_key(primary_pos, a)
                .compare(dataset.sort_key(primary_pos, b))
                .then_with(|| {
                    dataset
                        .sort_key(tiebreak_pos, a)
                        .compare(dataset.sort_key(tiebreak_pos, b))
                })
                .then_with(|| a.cmp(&b));
            if ascending { ordering } else { ordering.reverse() }
        });
        Ok(ids)
    }

    fn position(dataset: &TableDataset, column: &str) -> Result<usize, AppError> {
        dataset
            .column_position(column)
            .ok_or_else(|| {
                ConfigError::UnknownColumn {
                    column: column.to_string(),
                    available: dataset.columns().to_vec(),
                }
                .into()
            })
    }
}
