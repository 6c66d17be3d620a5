use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

impl StoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::IoError(_) => ErrorCategory::Io,
            StoreError::CsvError(e) if e.is_io_error() => ErrorCategory::Io,
            StoreError::CsvError(_) | StoreError::MalformedRecord { .. } => ErrorCategory::Data,
            StoreError::ConfigError { .. } | StoreError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the CSV path exists and is readable/writable",
            ErrorCategory::Data => {
                "Each line must look like <Telefono|ComputadoraPortatil>,<label>,<true|false>"
            }
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
