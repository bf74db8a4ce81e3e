//! Orchestrates reading a manifest and rendering its README header.

mod config;
mod error;

pub use config::GeneratorConfig;
pub use error::GeneratorError;

use crate::badges::BadgeRenderer;
use crate::manifest::load_repository;
use std::io::Write;
use tracing::info;

/// Generates a README header from a configured manifest.
pub struct Generator {
    config: GeneratorConfig,
    renderer: BadgeRenderer,
}

impl Generator {
    /// Builds a generator from the provided configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            renderer: BadgeRenderer::new(),
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Reads the manifest and renders the README header into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest can't be read, parsed, or isn't
    /// hosted on GitHub.
    pub fn generate(&self) -> Result<String, GeneratorError> {
        let repository = load_repository(self.config.manifest_path())?;
        let readme = self.renderer.render_readme(&repository)?;

        info!(repository = repository.full_path(), "Generated README");
        Ok(readme)
    }

    /// Generates the README header and writes it to `out`.
    ///
    /// Nothing is written if reading the manifest fails.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Generator::generate`], or an error if writing fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), GeneratorError> {
        let readme = self.generate()?;
        out.write_all(readme.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
