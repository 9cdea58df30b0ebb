//! Error types for the webptidy CLI.
//!
//! Uses thiserror for derive macros. Per-file variants (decode, encode,
//! delete, move, scan) never abort a batch: the tools catch them at the
//! file level, log them, and count them. Only `UserError` and `MissingCodec`
//! travel all the way up to `main`.

use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for webptidy operations.
#[derive(Error, Debug)]
pub enum WebpError {
    /// User provided invalid input or an interaction could not happen.
    #[error("{0}")]
    UserError(String),

    /// The image codec lacks a format this tool depends on.
    #[error("image codec unavailable: {0}")]
    MissingCodec(String),

    /// The source image could not be decoded.
    #[error("failed to decode '{}': {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    /// The JPEG could not be encoded or written.
    #[error("failed to encode '{}': {message}", .path.display())]
    Encode { path: PathBuf, message: String },

    /// A file could not be removed.
    #[error("failed to delete '{}': {message}", .path.display())]
    Delete { path: PathBuf, message: String },

    /// A file could not be moved into the recovery folder.
    #[error("failed to move '{}': {message}", .path.display())]
    Move { path: PathBuf, message: String },

    /// A directory could not be read while enumerating files.
    #[error("failed to scan '{}': {message}", .path.display())]
    Scan { path: PathBuf, message: String },
}

impl WebpError {
    pub fn decode(path: &Path, message: impl ToString) -> Self {
        WebpError::Decode {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn encode(path: &Path, message: impl ToString) -> Self {
        WebpError::Encode {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn delete(path: &Path, message: impl ToString) -> Self {
        WebpError::Delete {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn move_failed(path: &Path, message: impl ToString) -> Self {
        WebpError::Move {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn scan(path: &Path, message: impl ToString) -> Self {
        WebpError::Scan {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            WebpError::MissingCodec(_) => exit_codes::CODEC_UNAVAILABLE,
            WebpError::UserError(_)
            | WebpError::Decode { .. }
            | WebpError::Encode { .. }
            | WebpError::Delete { .. }
            | WebpError::Move { .. }
            | WebpError::Scan { .. } => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for webptidy operations.
pub type Result<T> = std::result::Result<T, WebpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = WebpError::UserError("no terminal".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn missing_codec_has_correct_exit_code() {
        let err = WebpError::MissingCodec("webp decoding".to_string());
        assert_eq!(err.exit_code(), exit_codes::CODEC_UNAVAILABLE);
    }

    #[test]
    fn error_messages_name_the_file() {
        let err = WebpError::decode(Path::new("Shoes/a.webp"), "truncated header");
        assert_eq!(err.to_string(), "failed to decode 'Shoes/a.webp': truncated header");

        let err = WebpError::move_failed(Path::new("Watch/b.webp"), "permission denied");
        assert_eq!(err.to_string(), "failed to move 'Watch/b.webp': permission denied");
    }
}
