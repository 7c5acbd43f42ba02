use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal;
use serde_json::{Map, Value};

use crate::display::TerminalView;
use crate::error::{AppError, DisplayError};
use crate::table::{SortableTable, TableConfig};

/// Keyboard input actions
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    Sort(usize),
    DrawPage,
    DrawAll,
    Quit,
    Invalid,
}

/// Interactive table session: digit keys re-sort by column position,
/// `n`/space draws one more page, `a` drains the queue, `q` quits.
pub fn run(config: TableConfig, records: Vec<Map<String, Value>>) -> Result<(), AppError> {
    let mut table = SortableTable::new(config, records, TerminalView::new())?;
    print_controls(table.columns(), table.page_size());

    loop {
        match read_input(table.columns().len())? {
            InputAction::Quit => break,
            InputAction::Sort(pos) => {
                let column = table.columns()[pos].clone();
                table.sort_by(&column)?;
                print_controls(table.columns(), table.page_size());
            }
            InputAction::DrawPage => {
                table.draw_more(table.page_size());
            }
            InputAction::DrawAll => {
                table.draw_more(table.remaining());
            }
            InputAction::Invalid => {
                // Ignore invalid input
            }
        }
    }
    Ok(())
}

fn print_controls(columns: &[String], page_size: usize) {
    let sort_keys: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i + 1, c))
        .collect();
    println!(
        "Sort: {} | n/space: draw {} more | a: draw all | q: quit",
        sort_keys.join("  "),
        page_size
    );
}

/// Read one key event in raw mode and map it to an action. Raw mode is
/// bracketed around the read so normal printing stays line-buffered.
fn read_input(column_count: usize) -> Result<InputAction, AppError> {
    terminal::enable_raw_mode().map_err(|e| {
        AppError::Display(DisplayError::TerminalOutput(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;

    let read = event::read();

    terminal::disable_raw_mode().map_err(|e| {
        AppError::Display(DisplayError::TerminalOutput(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;

    let event = read.map_err(|e| {
        AppError::Display(DisplayError::TerminalOutput(format!(
            "Failed to read key event: {}",
            e
        )))
    })?;

    Ok(map_event(event, column_count))
}

fn map_event(event: Event, column_count: usize) -> InputAction {
    match event {
        Event::Key(KeyEvent {
            code, modifiers, ..
        }) => match (code, modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => InputAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => InputAction::Quit,
            (KeyCode::Char('n'), _) | (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => {
                InputAction::DrawPage
            }
            (KeyCode::Char('a'), _) => InputAction::DrawAll,
            (KeyCode::Char(c), _) if c.is_ascii_digit() => {
                let pos = (c as usize).wrapping_sub('1' as usize);
                if pos < column_count {
                    InputAction::Sort(pos)
                } else {
                    InputAction::Invalid
                }
            }
            _ => InputAction::Invalid,
        },
        _ => InputAction::Invalid,
    }
}
