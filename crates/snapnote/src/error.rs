//! Error types for snapnote.
//!
//! This module defines all error types used throughout the snapnote crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for snapnote operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the storage file.
    #[error("failed to open storage file at {path}: {source}")]
    StoreOpen {
        /// Path to the storage file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to append a record to the storage file.
    #[error("failed to append to storage file at {path}: {source}")]
    StoreAppend {
        /// Path to the storage file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Frame Source Errors ===
    /// A frame source failed to open.
    #[error("failed to open frame source '{name}': {message}")]
    SourceOpen {
        /// Name of the frame source.
        name: &'static str,
        /// Description of what went wrong.
        message: String,
    },

    /// A frame source failed to produce a frame.
    #[error("failed to read frame from source '{name}': {message}")]
    SourceRead {
        /// Name of the frame source.
        name: &'static str,
        /// Description of what went wrong.
        message: String,
    },

    /// A frame carried a pixel buffer that doesn't match its dimensions.
    #[error("frame buffer size mismatch: expected {expected} bytes, got {actual}")]
    FrameSizeMismatch {
        /// Expected buffer length for the declared dimensions.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    // === Image Errors ===
    /// Failed to load or decode an image file.
    #[error("failed to load image at {path}: {source}")]
    ImageLoad {
        /// Path to the image file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: image::ImageError,
    },

    // === I/O Errors ===
    /// File system or network operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for snapnote operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a frame source open error.
    #[must_use]
    pub fn source_open(name: &'static str, message: impl Into<String>) -> Self {
        Self::SourceOpen {
            name,
            message: message.into(),
        }
    }

    /// Create a frame source read error.
    #[must_use]
    pub fn source_read(name: &'static str, message: impl Into<String>) -> Self {
        Self::SourceRead {
            name,
            message: message.into(),
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error is a frame source failure.
    #[must_use]
    pub fn is_source_error(&self) -> bool {
        matches!(self, Self::SourceOpen { .. } | Self::SourceRead { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::source_open("pattern", "device busy");
        assert_eq!(
            err.to_string(),
            "failed to open frame source 'pattern': device busy"
        );

        let err = Error::internal("test error");
        assert_eq!(err.to_string(), "internal error: test error");
    }

    #[test]
    fn test_error_is_source_error() {
        assert!(Error::source_open("camera", "no device").is_source_error());
        assert!(Error::source_read("camera", "timeout").is_source_error());
        assert!(!Error::internal("test").is_source_error());
    }

    #[test]
    fn test_store_open_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::StoreOpen {
            path: PathBuf::from("/root/forbidden/text_data.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/root/forbidden/text_data.txt"));
    }

    #[test]
    fn test_store_append_error_display() {
        let io_err = std::io::Error::other("disk full");
        let err = Error::StoreAppend {
            path: PathBuf::from("text_data.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("append"));
        assert!(msg.contains("text_data.txt"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "invalid interval".to_string(),
        };
        assert!(err.to_string().contains("invalid interval"));
    }

    #[test]
    fn test_frame_size_mismatch_display() {
        let err = Error::FrameSizeMismatch {
            expected: 12,
            actual: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("9"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_source_read_error_display() {
        let err = Error::source_read("v4l2", "select timeout");
        let msg = err.to_string();
        assert!(msg.contains("v4l2"));
        assert!(msg.contains("select timeout"));
    }
}
