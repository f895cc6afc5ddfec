use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A property could not be read from one of the compared objects.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PropertyAccessError {
    #[error("property `{property}` is missing")]
    Missing { property: String },
    #[error("property `{property}` could not be read: {message}")]
    Failed { property: String, message: String },
}

impl PropertyAccessError {
    pub fn missing(property: impl Into<String>) -> Self {
        PropertyAccessError::Missing {
            property: property.into(),
        }
    }

    pub fn failed(property: impl Into<String>, message: impl Into<String>) -> Self {
        PropertyAccessError::Failed {
            property: property.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse {} as JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
