use std::fmt;

/// Errors that can occur during grid operations
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// No cell is registered under the requested key
    NotFound { file: char, rank: i32 },
    /// Configuration errors
    ConfigurationError(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::NotFound { file, rank } => write!(f, "Node {}{} not found", file, rank),
            GridError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;
