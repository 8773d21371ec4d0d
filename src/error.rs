//! Error types for the highlighter
//!
//! The fragmenters never fail; these errors cover the surfaces around
//! them (config files, input files, the command line).

use thiserror::Error;

/// Result type alias for highlighter operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Cannot serialize fragments: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = HighlightError::FileNotFound("notes.txt".to_string());
        assert_eq!(err.to_string(), "File not found: notes.txt");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: HighlightError = io.into();
        assert!(matches!(err, HighlightError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_from_config_error() {
        let err: HighlightError = toml::from_str::<toml::Table>("key =").unwrap_err().into();
        assert!(matches!(err, HighlightError::Config(_)));
        assert!(err.to_string().starts_with("Invalid config"));
    }
}
