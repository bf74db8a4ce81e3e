//! Manifest reading error types.

use thiserror::Error;

/// Errors that can occur while reading a module manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to read the manifest file.
    #[error("Failed to read manifest '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The manifest content is not valid `go.mod` syntax.
    #[error("Failed to parse manifest at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// The module is not hosted on a supported platform.
    #[error("Unsupported module path '{module_path}': only supports github-hosted repos")]
    UnsupportedHost { module_path: String },
}

impl ManifestError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }
}
