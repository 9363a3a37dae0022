use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by PawTrack outside of plain field validation
#[derive(Debug, Error)]
pub enum PawTrackError {
    /// Reading a file from disk failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An image file could not be decoded
    #[error("could not decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The configuration file is not valid JSON
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A date field does not hold a real calendar date
    #[error("{field} must be a valid date (YYYY-MM-DD)")]
    InvalidDate { field: &'static str },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PawTrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = PawTrackError::InvalidDate { field: "Date" };
        assert_eq!(err.to_string(), "Date must be a valid date (YYYY-MM-DD)");
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PawTrackError = json_err.into();
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
