//! Frontend Errors
//!
//! Error type shared by the platform adapters and controllers.

/// Common result type for frontend operations
pub type AppResult<T> = Result<T, AppError>;

/// Frontend errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// A required element is not on this page
    MissingElement(String),
    /// The key-value store rejected an operation
    Storage(String),
    Serialization(String),
    /// A browser dialog or navigation failed
    Interaction(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingElement(id) => write!(f, "Missing element: #{}", id),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            AppError::Interaction(msg) => write!(f, "Interaction error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
