//! Error types for the converter.
//!
//! One `thiserror` enum covers every failure the pipeline can report. Only
//! [`ConvertError::InvalidArgument`] is fatal to a run; every other variant
//! is isolated to the file that produced it.

use std::path::{Path, PathBuf};
use thiserror::Error;
use serde::Serialize;

/// Main error type for the converter.
#[derive(Error, Debug, Serialize)]
pub enum ConvertError {
    /// A command-line value is out of range or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input extension is not one of png/jpg/jpeg
    #[error("Unsupported extension: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Input file missing or not decodable
    #[error("Cannot read image {}: {reason}", path.display())]
    UnreadableImage { path: PathBuf, reason: String },

    /// Watermark file missing or not decodable
    #[error("Cannot read watermark {}: {reason}", path.display())]
    WatermarkUnreadable { path: PathBuf, reason: String },

    /// Font file could not be used; callers fall back to the default font
    #[error("Font unavailable {}: {reason}", path.display())]
    FontUnavailable { path: PathBuf, reason: String },

    /// A resize, composite or text render step failed
    #[error("Processing error: {0}")]
    Processing(String),

    /// WebP output could not be written
    #[error("Cannot write {}: {reason}", path.display())]
    EncodeError { path: PathBuf, reason: String },

    /// File IO error
    #[error("IO error: {0}")]
    Io(String),
}

/// Convenience result type for converter operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

// Helper methods for error creation
impl ConvertError {
    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn unreadable_image(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::UnreadableImage {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn watermark_unreadable(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::WatermarkUnreadable {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn font_unavailable(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::FontUnavailable {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn encode(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::EncodeError {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error must abort the whole run rather than one file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
