//! Generator configuration.

use crate::manifest::DEFAULT_MANIFEST;
use std::path::{Path, PathBuf};

/// Configuration for generating a README.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Path to the `go.mod` file.
    manifest_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_MANIFEST))
    }
}

impl GeneratorConfig {
    /// Creates a new configuration reading the given manifest.
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }

    /// Sets a different manifest path.
    pub fn with_manifest_path(mut self, manifest_path: PathBuf) -> Self {
        self.manifest_path = manifest_path;
        self
    }

    /// Returns the manifest path.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_go_mod() {
        let config = GeneratorConfig::default();
        assert_eq!(config.manifest_path(), Path::new("go.mod"));
    }

    #[test]
    fn overrides_manifest_path() {
        let config = GeneratorConfig::default().with_manifest_path(PathBuf::from("sub/go.mod"));
        assert_eq!(config.manifest_path(), Path::new("sub/go.mod"));
    }
}
