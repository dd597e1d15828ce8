use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to open database '{path}': {message}")]
    OpenError { path: PathBuf, message: String },

    #[error("failed to initialize schema: {message}")]
    SchemaError { message: String },

    #[error("failed to store finding: {message}")]
    InsertError { message: String },

    #[error("query failed: {message}")]
    QueryError { message: String },

    #[error("stored metadata for asset '{id}' is not valid JSON: {message}")]
    MetadataDecodeError { id: String, message: String },

    #[error("stored status '{status}' is not a known risk status")]
    UnknownStatus { status: String },
}

impl StorageError {
    pub fn open_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::OpenError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn schema_error(message: impl Into<String>) -> Self {
        Self::SchemaError {
            message: message.into(),
        }
    }

    pub fn insert_error(message: impl Into<String>) -> Self {
        Self::InsertError {
            message: message.into(),
        }
    }

    pub fn query_error(message: impl Into<String>) -> Self {
        Self::QueryError {
            message: message.into(),
        }
    }
}
