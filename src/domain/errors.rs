use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading a measurement table. There is no recovery
/// path; the caller fixes the file or the path and reruns.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open measurement file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed measurement record: {0}")]
    Parse(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_formatting() {
        let err = DatasetError::Open {
            path: PathBuf::from("/data/results.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        let msg = err.to_string();
        assert!(msg.contains("/data/results.csv"));
        assert!(msg.contains("Failed to open"));
    }
}
