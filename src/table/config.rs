use crate::error::{AppError, ConfigError};

/// Construction parameters for a sortable table.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Ordered column keys; defines data access and rendering order.
    pub columns: Vec<String>,
    /// Identifier of the embedded dataset this table was built from.
    pub source_id: String,
    /// Default number of rows rendered per draw action.
    pub page_size: usize,
    /// Column always used as the secondary ordering key.
    pub tiebreak_key: String,
    /// Column the table is sorted by on construction.
    pub initial_sort_key: String,
    /// Direction of the initial sort.
    pub initial_ascending: bool,
    /// Log internal state to the console. No functional effect.
    pub debug: bool,
}

impl TableConfig {
    pub fn new(columns: Vec<String>, source_id: impl Into<String>) -> Self {
        let tiebreak = columns.first().cloned().unwrap_or_default();
        Self {
            columns,
            source_id: source_id.into(),
            page_size: 20,
            tiebreak_key: tiebreak.clone(),
            initial_sort_key: tiebreak,
            initial_ascending: true,
            debug: false,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_tiebreak_key(mut self, key: impl Into<String>) -> Self {
        self.tiebreak_key = key.into();
        self
    }

    pub fn with_initial_sort(mut self, key: impl Into<String>, ascending: bool) -> Self {
        self.initial_sort_key = key.into();
        self.initial_ascending = ascending;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Fail fast on configuration mistakes before any data is touched.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns.into());
        }
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].contains(column) {
                return Err(ConfigError::DuplicateColumn {
                    column: column.clone(),
                }
                .into());
            }
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize.into());
        }
        for key in [&self.tiebreak_key, &self.initial_sort_key] {
            if !self.columns.contains(key) {
                return Err(ConfigError::UnknownColumn {
                    column: key.clone(),
                    available: self.columns.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}
