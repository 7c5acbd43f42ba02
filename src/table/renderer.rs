use std::collections::VecDeque;

use crate::display::view::LiveView;
use crate::table::dataset::{RowId, TableDataset};

/// Owns the draw queue: row ids ordered by the most recent sort that have not
/// been rendered into the live view yet. Flushes a bounded number of rows per
/// call, so a single interaction costs the chunk size, not the dataset size.
#[derive(Debug, Default)]
pub struct PaginatedRenderer {
    queue: VecDeque<RowId>,
}

impl PaginatedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue with a fresh ordering and clear the view's row
    /// region. Prior render progress is discarded; the rendered row lines
    /// themselves live in the dataset and are reused, not recreated.
    pub fn reset(&mut self, ordered: Vec<RowId>, view: &mut dyn LiveView) {
        self.queue = VecDeque::from(ordered);
        view.clear_rows();
    }

    /// Render up to `count` rows from the front of the queue, in queue order,
    /// and return the new remaining count. A drained queue is a no-op.
    pub fn draw_next(
        &mut self,
        count: usize,
        dataset: &TableDataset,
        view: &mut dyn LiveView,
    ) -> usize {
        for _ in 0..count {
            match self.queue.pop_front() {
                Some(id) => view.append_row(dataset.line(id)),
                None => break,
            }
        }
        self.queue.len()
    }

    /// Rows not yet rendered, for status display.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}
