use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("DataError: {0}")]
    Data(#[from] DataError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("No snapshot source given (use --file or --url)")]
    NoSource,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
}

/// Programmer/configuration errors in the sortable table contract.
/// These are raised synchronously and are not recoverable at runtime.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Column '{column}' is not one of the declared columns: {available:?}")]
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },
    #[error("Record {row} has no value for declared column '{column}'")]
    MissingColumn { column: String, row: usize },
    #[error("Cannot build a sort key for column '{column}' in record {row}: {value_type} values are not sortable")]
    UnsortableValue {
        column: String,
        row: usize,
        value_type: &'static str,
    },
    #[error("Page size must be greater than 0")]
    InvalidPageSize,
    #[error("Column list is empty")]
    NoColumns,
    #[error("Column '{column}' is declared more than once")]
    DuplicateColumn { column: String },
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Snapshot document has no embedded dataset '{id}'")]
    DatasetNotFound { id: String },
    #[error("Embedded dataset '{id}' is not a JSON array")]
    DatasetNotArray { id: String },
    #[error("Record {index} in dataset '{id}' is not a JSON object")]
    RecordNotObject { id: String, index: usize },
    #[error("Snapshot document is not a JSON object")]
    NotADocument,
    #[error("Failed to read snapshot file {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Contract violations should fail loud, they are bugs in the caller
            AppError::Config(_) => ErrorSeverity::Critical,
            AppError::Api(api_error) => match api_error {
                ApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Data(_) => ErrorSeverity::High,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Display(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::UnknownColumn { available, .. }) => Some(format!(
                "Declared columns are: {}",
                available.join(", ")
            )),
            AppError::Cli(CliError::NoSource) => {
                Some("Pass --file <path> or --url <endpoint> to select a snapshot source".to_string())
            }
            AppError::Api(ApiError::Timeout { .. }) => {
                Some("Check the dashboard endpoint is reachable and try again".to_string())
            }
            AppError::Data(DataError::DatasetNotFound { .. }) => {
                Some("Use --dataset to name one of the document's embedded datasets".to_string())
            }
            _ => None,
        }
    }
}
