pub mod config;
pub mod controller;
pub mod dataset;
pub mod renderer;
pub mod sort;

pub use config::TableConfig;
pub use controller::SortableTable;
pub use dataset::{RowId, SortKey, TableDataset};
pub use renderer::PaginatedRenderer;
pub use sort::SortEngine;
