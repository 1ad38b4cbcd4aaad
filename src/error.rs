// Error types for loading plugin lists and writing generated files

use std::ffi::OsString;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{name} is set but is not valid UTF-8: {value:?}")]
    InvalidEnvVar { name: String, value: OsString },

    #[error("Plugin list not found: {path}")]
    SourceNotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to fetch plugin list from {url}: {reason}")]
    SourceUnreachable { url: String, reason: String },

    #[error("Failed to read plugin list {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn write_failed(path: impl Into<String>, source: io::Error) -> Self {
        Error::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Classify a failed read of a local plugin list.
    pub fn from_read(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Error::SourceNotFound { path, source }
        } else {
            Error::ReadFailed { path, source }
        }
    }
}
