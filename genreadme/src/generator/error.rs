//! Generator error types.

/// Errors that can occur while generating a README.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Manifest reading errors.
    #[error(transparent)]
    Manifest(#[from] crate::manifest::ManifestError),

    /// Badge rendering errors.
    #[error(transparent)]
    Badge(#[from] crate::badges::BadgeError),

    /// Failed to write the generated README.
    #[error("Failed to write README: {0}")]
    Io(#[from] std::io::Error),
}
