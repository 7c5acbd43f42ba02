pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Table/Snapshot → Utils)
pub mod cli; // Command-line interface
pub mod snapshot; // Snapshot documents and service summaries
pub mod table; // Sortable table component

/// Support modules (used across layers)
pub mod api; // Dashboard HTTP client
pub mod display; // Output views and formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
