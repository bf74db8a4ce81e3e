//! Go module manifest reading.
//!
//! This module parses `go.mod` files and extracts the GitHub repository
//! identity declared by their `module` directive.

mod error;
mod lexer;
mod parser;
mod repository;

pub use error::ManifestError;
pub use parser::{
    parse_manifest, GoDebug, Manifest, ModuleRef, ModuleVersion, Replacement, Retraction,
};
pub use repository::{RepositoryIdentifier, GITHUB_PREFIX};

use std::path::Path;
use tracing::{debug, info};

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "go.mod";

/// Reads the repository identifier from the raw content of a `go.mod` file.
///
/// # Errors
///
/// Returns [`ManifestError::ParseError`] if the content is not a valid manifest,
/// or [`ManifestError::UnsupportedHost`] if the module is not hosted on GitHub.
pub fn read_repository(content: &[u8]) -> Result<RepositoryIdentifier, ManifestError> {
    let manifest = parse_manifest(content)?;
    let repository = RepositoryIdentifier::from_module_path(&manifest.module)?;

    debug!(
        full_path = repository.full_path(),
        stripped_path = repository.stripped_path(),
        "Resolved repository"
    );
    Ok(repository)
}

/// Loads a `go.mod` file from disk and reads its repository identifier.
///
/// # Errors
///
/// Returns [`ManifestError::IoError`] if the file can't be read, otherwise
/// the same errors as [`read_repository`].
pub fn load_repository(path: &Path) -> Result<RepositoryIdentifier, ManifestError> {
    info!(path = %path.display(), "Reading manifest");

    let content = std::fs::read(path).map_err(|e| ManifestError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    read_repository(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_github_repository() {
        let repository = read_repository(b"\nmodule github.com/clambin/foo\n").unwrap();

        assert_eq!(repository.full_path(), "github.com/clambin/foo");
        assert_eq!(repository.stripped_path(), "clambin/foo");
    }

    #[test]
    fn rejects_non_github_module() {
        let result = read_repository(b"\nmodule foo\n");
        assert!(matches!(result, Err(ManifestError::UnsupportedHost { .. })));
    }

    #[test]
    fn rejects_invalid_manifest() {
        let result = read_repository(b"invalid");
        assert!(matches!(result, Err(ManifestError::ParseError { .. })));
    }

    #[test]
    fn loads_repository_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_MANIFEST);
        fs::write(&path, "module github.com/clambin/foo\n").unwrap();

        let repository = load_repository(&path).unwrap();
        assert_eq!(repository.name(), "foo");
    }

    #[test]
    fn load_repository_missing_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join(DEFAULT_MANIFEST);

        let result = load_repository(&missing);
        assert!(matches!(result, Err(ManifestError::IoError { .. })));
    }
}
