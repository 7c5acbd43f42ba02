pub mod summary;
pub mod view;

pub use summary::SummaryDisplay;
pub use view::{BufferView, LiveView, TerminalView};
