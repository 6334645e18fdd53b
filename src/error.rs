//! Error types for unstyle library.

use std::io;
use thiserror::Error;

/// Result type alias for unstyle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around conversion.
///
/// Conversion itself never fails; errors come from reading input
/// or loading sample case files.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A sample case file could not be parsed.
    #[error("Invalid case file: {0}")]
    CaseFile(String),

    /// An option value is out of range.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => Error::Io(err.into()),
            _ => Error::CaseFile(err.to_string()),
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encoding("invalid utf-8 sequence".into());
        assert_eq!(err.to_string(), "Encoding error: invalid utf-8 sequence");

        let err = Error::InvalidOption("min_code_block_lines must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "Invalid option: min_code_block_lines must be at least 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::CaseFile(_)));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let utf8_err = String::from_utf8(vec![0xF0, 0x9D]).unwrap_err();
        let err: Error = utf8_err.into();
        assert!(matches!(err, Error::Encoding(_)));
    }
}
