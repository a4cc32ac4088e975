//! Error types for env-file reads.
//!
//! Two variants are configuration errors (the environment or the file does not
//! hold what the process needs). I/O failures are kept separate so that a
//! missing or unreadable file is never reported as an empty one.

use thiserror::Error;

/// Errors returned by [`crate::EnvFileReader`].
#[derive(Debug, Error)]
pub enum EnvFileError {
    /// The environment variable is unset or blank.
    #[error("An environment variable with name '{name}' must be set to a non-blank value")]
    VariableNotSet { name: String },

    /// The file exists but holds no non-blank line.
    #[error("The file with path '{path}' must contain a non-blank line")]
    FileEmpty { path: String },

    /// The file could not be opened or read.
    #[error("Failed to read file with path '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl EnvFileError {
    /// Create a VariableNotSet error for the given environment variable name.
    pub fn variable_not_set(name: impl Into<String>) -> Self {
        Self::VariableNotSet { name: name.into() }
    }

    /// Create a FileEmpty error for the given file path.
    pub fn file_empty(path: impl Into<String>) -> Self {
        Self::FileEmpty { path: path.into() }
    }

    /// Create an Io error with the path that failed.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this is a configuration error (as opposed to an I/O failure).
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::VariableNotSet { .. } | Self::FileEmpty { .. })
    }

    pub fn is_variable_not_set(&self) -> bool {
        matches!(self, Self::VariableNotSet { .. })
    }

    pub fn is_file_empty(&self) -> bool {
        matches!(self, Self::FileEmpty { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn variable_not_set_message_names_the_variable() {
        let err = EnvFileError::variable_not_set("ENCRYPT_KEY_FILE");

        assert_eq!(
            err.to_string(),
            "An environment variable with name 'ENCRYPT_KEY_FILE' must be set to a non-blank value"
        );
        assert!(err.is_configuration_error());
        assert!(err.is_variable_not_set());
    }

    #[test]
    fn file_empty_message_names_the_path() {
        let err = EnvFileError::file_empty("/run/secrets/key");

        assert_eq!(
            err.to_string(),
            "The file with path '/run/secrets/key' must contain a non-blank line"
        );
        assert!(err.is_configuration_error());
        assert!(err.is_file_empty());
    }

    #[test]
    fn io_error_is_not_a_configuration_error() {
        let err = EnvFileError::io(
            "/missing",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );

        assert!(err.is_io());
        assert!(!err.is_configuration_error());
        assert!(std::error::Error::source(&err).is_some());
    }
}
