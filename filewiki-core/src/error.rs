//! Error types for FileWiki operations

use thiserror::Error;

/// FileWiki Error types
#[derive(Error, Debug)]
pub enum FileWikiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "assist")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Duplicate extension in catalog: {0}")]
    DuplicateExtension(String),

    #[error("Invalid extension: {0:?}")]
    InvalidExtension(String),

    #[error("Popularity score {score} of {extension} is outside 0..=100")]
    PopularityOutOfRange { extension: String, score: u8 },

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type for FileWiki operations
pub type Result<T> = std::result::Result<T, FileWikiError>;

impl From<serde_json::Error> for FileWikiError {
    fn from(e: serde_json::Error) -> Self {
        FileWikiError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FileWikiError::NotFound(".xyz".to_string());
        assert_eq!(err.to_string(), "Not found: .xyz");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FileWikiError = io_err.into();
        assert!(matches!(err, FileWikiError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FileWikiError = json_err.into();
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_popularity_message() {
        let err = FileWikiError::PopularityOutOfRange {
            extension: ".vpk".into(),
            score: 140,
        };
        assert_eq!(err.to_string(), "Popularity score 140 of .vpk is outside 0..=100");
    }

    #[test]
    fn test_all_error_variants() {
        let errors = vec![
            FileWikiError::Api { status: 500, body: "test".into() },
            FileWikiError::Serialization("test".into()),
            FileWikiError::UnknownCategory("test".into()),
            FileWikiError::DuplicateExtension("test".into()),
            FileWikiError::InvalidExtension("test".into()),
            FileWikiError::NotFound("test".into()),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
