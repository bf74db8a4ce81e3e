//! Repository identity derived from a module path.

use crate::manifest::ManifestError;

/// Module path prefix of the only supported hosting platform.
pub const GITHUB_PREFIX: &str = "github.com/";

/// A GitHub-hosted repository, as declared by a manifest's module path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentifier {
    full_path: String,
    stripped_path: String,
}

impl RepositoryIdentifier {
    /// Builds an identifier from a module path.
    ///
    /// The prefix check is a case-sensitive match against `github.com/`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::UnsupportedHost`] if the path is not hosted on GitHub.
    pub fn from_module_path(module_path: &str) -> Result<Self, ManifestError> {
        let Some(stripped_path) = module_path.strip_prefix(GITHUB_PREFIX) else {
            return Err(ManifestError::UnsupportedHost {
                module_path: module_path.to_string(),
            });
        };

        Ok(Self {
            full_path: module_path.to_string(),
            stripped_path: stripped_path.to_string(),
        })
    }

    /// Full module path (e.g., "github.com/owner/repo").
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Module path without the host prefix (e.g., "owner/repo").
    pub fn stripped_path(&self) -> &str {
        &self.stripped_path
    }

    /// Last segment of the module path, used as the project name.
    pub fn name(&self) -> &str {
        let trimmed = self.full_path.trim_end_matches('/');
        match trimmed.rsplit_once('/') {
            Some((_, name)) => name,
            None => trimmed,
        }
    }
}
