use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::display::view::LiveView;
use crate::error::{AppError, ConfigError};
use crate::table::config::TableConfig;
use crate::table::dataset::TableDataset;
use crate::table::renderer::PaginatedRenderer;
use crate::table::sort::SortEngine;
use crate::utils::logging::DebugLogger;
use crate::utils::text::pad_to_width;

const SORT_ASC_MARKER: &str = " \u{25bc}"; // ▼
const SORT_DESC_MARKER: &str = " \u{25b2}"; // ▲
const TIEBREAK_MARKER: &str = " \u{25cf}"; // ●

/// Orchestrates one sortable table: builds the dataset once from the raw
/// records, then serves repeated sort and draw actions against the injected
/// live view. All mutable state (per-column sort toggles, the draw queue)
/// lives here or in the renderer, not in shared closures.
pub struct SortableTable<V: LiveView> {
    config: TableConfig,
    dataset: TableDataset,
    renderer: PaginatedRenderer,
    // Direction to apply the NEXT time each column is chosen
    next_direction: HashMap<String, bool>,
    view: V,
    logger: DebugLogger,
}

impl<V: LiveView> SortableTable<V> {
    /// Consume the raw records, build the dataset and its indexes, and apply
    /// the configured initial sort (which also draws the first page).
    pub fn new(
        config: TableConfig,
        records: Vec<Map<String, Value>>,
        view: V,
    ) -> Result<Self, AppError> {
        config.validate()?;
        let dataset = TableDataset::build(&config.columns, records)?;

        let mut next_direction: HashMap<String, bool> = config
            .columns
            .iter()
            .map(|c| (c.clone(), true))
            .collect();
        next_direction.insert(config.initial_sort_key.clone(), config.initial_ascending);

        let logger = DebugLogger::new(config.debug);
        logger.log_with_prefix(
            &config.source_id,
            &format!(
                "dataset built: {} rows, columns {:?}",
                dataset.len(),
                config.columns
            ),
        );

        let initial_key = config.initial_sort_key.clone();
        let mut table = Self {
            config,
            dataset,
            renderer: PaginatedRenderer::new(),
            next_direction,
            view,
            logger,
        };
        table.sort_by(&initial_key)?;
        Ok(table)
    }

    /// Re-sort by `column`: rebuild the header with fresh indicators, replace
    /// the draw queue with the new ordering, and draw the first page. The
    /// column's direction toggle flips after use.
    pub fn sort_by(&mut self, column: &str) -> Result<(), AppError> {
        let ascending = *self.next_direction.get(column).ok_or_else(|| {
            AppError::Config(ConfigError::UnknownColumn {
                column: column.to_string(),
                available: self.config.columns.clone(),
            })
        })?;

        let header = self.build_header(column, ascending);
        self.view.rebuild_header(&header);
        self.view.set_status("-");

        let order = SortEngine::order(&self.dataset, column, &self.config.tiebreak_key, ascending)?;
        self.renderer.reset(order, &mut self.view);
        self.next_direction.insert(column.to_string(), !ascending);

        self.logger.log_with_prefix(
            &self.config.source_id,
            &format!(
                "sorted by '{}' {}, {} queued",
                column,
                if ascending { "asc" } else { "desc" },
                self.renderer.remaining()
            ),
        );

        self.draw_more(self.config.page_size);
        Ok(())
    }

    /// Draw up to `count` more rows and refresh the status text. Returns the
    /// remaining count. Drawing from a drained queue is a no-op.
    pub fn draw_more(&mut self, count: usize) -> usize {
        if self.renderer.remaining() == 0 {
            return 0;
        }
        let remaining = self.renderer.draw_next(count, &self.dataset, &mut self.view);
        self.view.set_status(&format!("{} to draw", remaining));
        remaining
    }

    pub fn remaining(&self) -> usize {
        self.renderer.remaining()
    }

    pub fn row_count(&self) -> usize {
        self.dataset.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.config.columns
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// One header line per the fixed column widths: the active column carries
    /// its direction arrow, the tiebreak column always carries its marker.
    fn build_header(&self, active: &str, ascending: bool) -> String {
        let labels: Vec<String> = self
            .config
            .columns
            .iter()
            .zip(self.dataset.widths())
            .map(|(column, &width)| {
                let mut label = column.clone();
                if column == active {
                    label.push_str(if ascending {
                        SORT_ASC_MARKER
                    } else {
                        SORT_DESC_MARKER
                    });
                }
                if *column == self.config.tiebreak_key {
                    label.push_str(TIEBREAK_MARKER);
                }
                pad_to_width(&label, width)
            })
            .collect();

        let line = labels.join("  ");
        let rule = "\u{2500}".repeat(crate::utils::text::display_width(line.trim_end()));
        format!("{}\n{}", line.trim_end(), rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::view::BufferView;
    use crate::table::dataset::tests::records_from;
    use serde_json::json;

    fn people() -> Vec<Map<String, Value>> {
        records_from(json!([
            {"name": "Bob", "age": 30},
            {"name": "amy", "age": 30},
            {"name": "Cid", "age": 25},
        ]))
    }

    fn config() -> TableConfig {
        TableConfig::new(vec!["name".to_string(), "age".to_string()], "instances")
            .with_tiebreak_key("name")
            .with_initial_sort("age", true)
            .with_page_size(10)
    }

    fn first_cells(view: &BufferView) -> Vec<String> {
        view.rows()
            .iter()
            .map(|r| r.split_whitespace().next().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_initial_sort_runs_on_construction() {
        let table = SortableTable::new(config(), people(), BufferView::new()).unwrap();
        // age ascending: Cid(25), then amy/Bob tied at 30 broken by name
        assert_eq!(first_cells(table.view()), vec!["Cid", "amy", "Bob"]);
        assert_eq!(table.view().status(), "0 to draw");
    }

    #[test]
    fn test_sorting_same_column_twice_flips_direction() {
        let mut table = SortableTable::new(config(), people(), BufferView::new()).unwrap();
        table.sort_by("age").unwrap();
        // Second sort by age runs descending: exact reverse of the initial order
        assert_eq!(first_cells(table.view()), vec!["Bob", "amy", "Cid"]);
        table.sort_by("age").unwrap();
        assert_eq!(first_cells(table.view()), vec!["Cid", "amy", "Bob"]);
    }

    #[test]
    fn test_header_indicators() {
        let table = SortableTable::new(config(), people(), BufferView::new()).unwrap();
        let header = table.view().header();
        assert!(header.contains("age \u{25bc}"));
        assert!(header.contains("name \u{25cf}"));

        let mut table = table;
        table.sort_by("age").unwrap();
        let header = table.view().header();
        assert!(header.contains("age \u{25b2}"));
        // Tiebreak marker shows regardless of the active sort column
        assert!(header.contains("name \u{25cf}"));
    }

    #[test]
    fn test_other_columns_default_to_ascending() {
        let cfg = config().with_initial_sort("age", false);
        let mut table = SortableTable::new(cfg, people(), BufferView::new()).unwrap();
        assert_eq!(first_cells(table.view()), vec!["Bob", "amy", "Cid"]);
        // First press of a different column sorts ascending
        table.sort_by("name").unwrap();
        assert_eq!(first_cells(table.view()), vec!["amy", "Bob", "Cid"]);
    }

    #[test]
    fn test_paged_drawing_and_status() {
        let cfg = config().with_page_size(1);
        let mut table = SortableTable::new(cfg, people(), BufferView::new()).unwrap();
        assert_eq!(table.view().rows().len(), 1);
        assert_eq!(table.view().status(), "2 to draw");

        assert_eq!(table.draw_more(1), 1);
        assert_eq!(table.draw_more(1), 0);
        assert_eq!(first_cells(table.view()), vec!["Cid", "amy", "Bob"]);
        assert_eq!(table.view().status(), "0 to draw");

        // Drained queue: no-op, status untouched
        assert_eq!(table.draw_more(5), 0);
        assert_eq!(table.view().rows().len(), 3);
    }

    #[test]
    fn test_new_sort_discards_render_progress() {
        let cfg = config().with_page_size(1);
        let mut table = SortableTable::new(cfg, people(), BufferView::new()).unwrap();
        assert_eq!(table.remaining(), 2);
        table.sort_by("name").unwrap();
        // Pagination restarted from the new ordering
        assert_eq!(table.view().rows().len(), 1);
        assert_eq!(table.remaining(), 2);
        assert_eq!(first_cells(table.view()), vec!["amy"]);
    }

    #[test]
    fn test_sort_by_unknown_column_fails() {
        let mut table = SortableTable::new(config(), people(), BufferView::new()).unwrap();
        assert!(matches!(
            table.sort_by("uptime"),
            Err(AppError::Config(ConfigError::UnknownColumn { .. }))
        ));
    }

    #[test]
    fn test_debug_flag_has_no_functional_effect() {
        let quiet = SortableTable::new(config(), people(), BufferView::new()).unwrap();
        let chatty =
            SortableTable::new(config().with_debug(true), people(), BufferView::new()).unwrap();
        assert_eq!(quiet.view().rows(), chatty.view().rows());
    }
}
