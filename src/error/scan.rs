use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("path is neither file nor directory: {path}")]
    InvalidPath { path: PathBuf },
}

impl ScanError {
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_display() {
        let err = ScanError::invalid_path("/dev/null");
        assert_eq!(
            err.to_string(),
            "path is neither file nor directory: /dev/null"
        );
    }
}
