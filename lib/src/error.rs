/// Error type for the links widget library
///
/// Only the outer layers (form validation, browser launch, configuration and
/// host file I/O) produce errors. Store mutations and decoding never fail.
#[derive(Debug, thiserror::Error)]
pub enum LinksError {
    /// I/O errors (state and config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Rejected add/edit form input
    #[error("{0}")]
    Validation(String),

    /// Failure to hand a URL to the system or a configured browser
    #[error("Browser error: {0}")]
    Browser(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using LinksError
pub type Result<T> = std::result::Result<T, LinksError>;

impl From<String> for LinksError {
    fn from(s: String) -> Self {
        LinksError::Other(s)
    }
}

impl From<&str> for LinksError {
    fn from(s: &str) -> Self {
        LinksError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for LinksError {
    fn from(err: serde_json::Error) -> Self {
        LinksError::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LinksError {
    fn from(err: serde_yaml::Error) -> Self {
        LinksError::Yaml(err.to_string())
    }
}
