use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid pattern for rule '{label}': {message}")]
    InvalidPattern { label: String, message: String },

    #[error("rule '{label}' declares {expected} capture group(s) but pattern has {actual}")]
    CaptureGroupMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("failed to read catalog file '{path}': {message}")]
    CatalogFileReadError { path: PathBuf, message: String },

    #[error("failed to parse catalog file '{path}': {message}")]
    CatalogParseError { path: PathBuf, message: String },
}

impl CatalogError {
    pub fn invalid_pattern(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            label: label.into(),
            message: message.into(),
        }
    }

    pub fn catalog_file_read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::CatalogFileReadError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn catalog_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::CatalogParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}
