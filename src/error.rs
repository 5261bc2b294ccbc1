//! Error types for schema loading and node lookup.
//!
//! Label resolution itself has no error taxonomy: an unrenderable node
//! degrades to "no label" instead of failing. Errors only arise around it,
//! when loading a document or navigating to the node a caller asked for.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading a schema document or locating a node in it.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    // Lookup errors (exit code 2)
    #[error("pointer not found: {pointer}")]
    PointerNotFound { pointer: String },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            LoadError::NetworkError { .. } => 3,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_exit_3() {
        let err = LoadError::FileNotFound {
            path: PathBuf::from("schema.json"),
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn parse_and_lookup_errors_exit_2() {
        let err = LoadError::PointerNotFound {
            pointer: "#/properties/missing".into(),
        };
        assert_eq!(err.exit_code(), 2);

        let err = LoadError::InvalidJson {
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn pointer_not_found_display() {
        let err = LoadError::PointerNotFound {
            pointer: "#/properties/id".into(),
        };
        assert_eq!(err.to_string(), "pointer not found: #/properties/id");
    }
}
