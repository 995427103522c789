//! Error types for lang-table
//!
//! Errors produced while locating, reading and decoding language resources.
//! The table builder never lets these escape; it logs them and drops the
//! affected layer. Lower-level functions return them so callers that load
//! resources by hand can react to each category.

use thiserror::Error;

/// Errors raised while loading a single language resource
#[derive(Error, Debug)]
pub enum LangError {
    /// Resource exists but could not be opened or read
    #[error("Could not read language resource: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Resource exceeds the configured size limit
    #[error("Language resource too large: {path} ({size} bytes, max {max_size} bytes)")]
    TooLarge {
        path: String,
        size: u64,
        max_size: u64,
    },

    /// Resource bytes are not valid UTF-8
    #[error("Language resource is not valid UTF-8: {path}")]
    Encoding { path: String },

    /// Resource is not valid JSON
    #[error("Invalid JSON in language resource {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an object
    #[error("Expected {path} to contain a JSON object, was {found}")]
    NotAnObject { path: String, found: String },

    /// An entry value is not a string, number or boolean
    #[error("Expected {key} to be a string, was {found}")]
    NonPrimitive {
        path: String,
        key: String,
        found: String,
    },

    /// Loader configuration could not be loaded
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for resource loading operations
pub type LangResult<T> = Result<T, LangError>;

impl LangError {
    /// Path of the resource the error refers to, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            LangError::Read { path, .. }
            | LangError::TooLarge { path, .. }
            | LangError::Encoding { path }
            | LangError::Parse { path, .. }
            | LangError::NotAnObject { path, .. }
            | LangError::NonPrimitive { path, .. } => Some(path),
            LangError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_primitive_display() {
        let err = LangError::NonPrimitive {
            path: "assets/demo/lang/en_us.json".to_string(),
            key: "menu.title".to_string(),
            found: "an array ([1,2])".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Expected menu.title to be a string, was an array ([1,2])"
        );
    }

    #[test]
    fn test_error_path() {
        let err = LangError::Encoding {
            path: "assets/demo/lang/fr_fr.json".to_string(),
        };
        assert_eq!(err.path(), Some("assets/demo/lang/fr_fr.json"));
        assert_eq!(LangError::Config("bad".to_string()).path(), None);
    }

    #[test]
    fn test_read_error_keeps_source() {
        use std::error::Error as _;

        let err = LangError::Read {
            path: "assets/demo/lang/en_us.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("assets/demo/lang/en_us.json"));
    }
}
