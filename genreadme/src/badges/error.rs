//! Badge rendering error types.

/// Errors that can occur while rendering badges.
#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    /// Handlebars rendering error.
    #[error("Badge rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Failed to write to the output.
    #[error("Failed to write README: {0}")]
    IoError(#[from] std::io::Error),
}
