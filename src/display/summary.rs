use comfy_table::{Attribute, Cell, Color, Table, presets};
use crossterm::terminal;

use crate::snapshot::ServiceSummary;

/// Formatter for the per-service summary table.
pub struct SummaryDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl SummaryDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => Some((cols as usize).clamp(40, 200)),
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Render service summaries, one row per running instance.
    pub fn render_service_list(&self, services: &[ServiceSummary]) -> String {
        if services.is_empty() {
            return "No services found.".to_string();
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
        if let Some(width) = self.max_width {
            table.set_width(width as u16);
        }

        let headers = ["Service", "Uptime", "Snapshot Attributes"];
        if self.use_colors {
            table.set_header(
                headers
                    .iter()
                    .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
                    .collect::<Vec<_>>(),
            );
        } else {
            table.set_header(headers.to_vec());
        }

        for service in services {
            let row = vec![
                if self.use_colors {
                    Cell::new(&service.name).fg(Color::Cyan)
                } else {
                    Cell::new(&service.name)
                },
                Cell::new(service.uptime_display()),
                Cell::new(service.attribute_count.to_string()),
            ];
            table.add_row(row);
        }

        table.to_string()
    }
}

impl Default for SummaryDisplay {
    fn default() -> Self {
        Self::new()
    }
}
