/// The live region a sortable table renders into.
///
/// The table holds an explicit, constructor-injected view rather than looking
/// elements up in some ambient registry. Header/controls and data rows are
/// separate regions: `clear_rows` must leave the header alone, and nothing but
/// `clear_rows` ever removes rendered rows.
pub trait LiveView {
    /// Replace the header/controls region.
    fn rebuild_header(&mut self, header: &str);
    /// Drop all rendered data rows, keeping the header.
    fn clear_rows(&mut self);
    /// Append one pre-rendered row below the existing ones.
    fn append_row(&mut self, line: &str);
    /// Replace the status indicator text.
    fn set_status(&mut self, status: &str);
}

/// In-memory view. Used by tests and by piped (non-TTY) output, where the
/// whole table is assembled first and printed once.
#[derive(Debug, Default)]
pub struct BufferView {
    header: String,
    rows: Vec<String>,
    status: String,
}

impl BufferView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Assemble the full table text: header, rows, status line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header);
        if !self.header.ends_with('\n') && !self.header.is_empty() {
            out.push('\n');
        }
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out.push_str(&self.status);
        out.push('\n');
        out
    }
}

impl LiveView for BufferView {
    fn rebuild_header(&mut self, header: &str) {
        self.header = header.to_string();
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, line: &str) {
        self.rows.push(line.to_string());
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Terminal-backed view printing directly to stdout.
///
/// Scrollback cannot retract lines, so `clear_rows` starts a fresh table
/// section instead; the reprinted header marks the start of the current one.
#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl LiveView for TerminalView {
    fn rebuild_header(&mut self, header: &str) {
        println!();
        println!("{}", header);
    }

    fn clear_rows(&mut self) {
        // Nothing to retract; the fresh header above delimits the new section.
    }

    fn append_row(&mut self, line: &str) {
        println!("{}", line);
    }

    fn set_status(&mut self, status: &str) {
        println!("{}", status);
    }
}
