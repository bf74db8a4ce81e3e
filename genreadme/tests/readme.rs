use std::fs;
use std::path::PathBuf;

use genreadme::{
    load_repository, BadgeRenderer, Generator, GeneratorConfig, GeneratorError, ManifestError,
};
use tempfile::NamedTempFile;

const WANT: &str = "# foo
[![GitHub tag (latest by date)](https://img.shields.io/github/v/tag/clambin/foo?color=green&label=Release&style=plastic)](https://github.com/clambin/foo/releases)
[![Codecov](https://img.shields.io/codecov/c/gh/clambin/foo?style=plastic)](https://app.codecov.io/gh/clambin/foo)
[![Test](https://github.com/clambin/foo/workflows/Test/badge.svg)](https://github.com/clambin/foo/actions)
[![Build](https://github.com/clambin/foo/workflows/Build/badge.svg)](https://github.com/clambin/foo/actions)
[![Go Report Card](https://goreportcard.com/badge/github.com/clambin/foo)](https://goreportcard.com/report/github.com/clambin/foo)
[![GoDoc](https://pkg.go.dev/badge/github.com/clambin/foo?utm_source=godoc)](https://pkg.go.dev/github.com/clambin/foo)
[![License](https://img.shields.io/github/license/clambin/foo?style=plastic)](LICENSE.md)
";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .join("go.mod")
}

fn generate(path: PathBuf) -> Result<String, GeneratorError> {
    let generator = Generator::new(GeneratorConfig::new(path));
    let mut out = Vec::new();
    generator.write_to(&mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn creates_readme_from_temp_manifest() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "module github.com/clambin/foo\n").unwrap();

    let readme = generate(file.path().to_path_buf()).unwrap();
    assert_eq!(readme, WANT);
}

#[test]
fn creates_readme_from_fixture_with_requirements() {
    let readme = generate(fixture("github")).unwrap();
    assert_eq!(readme, WANT);
}

#[test]
fn generation_is_idempotent() {
    let first = generate(fixture("github")).unwrap();
    let second = generate(fixture("github")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn rendering_depends_only_on_repository() {
    let from_fixture = load_repository(&fixture("github")).unwrap();

    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "// different file, same module\nmodule \"github.com/clambin/foo\"\n").unwrap();
    let from_temp = load_repository(file.path()).unwrap();

    assert_eq!(from_fixture, from_temp);

    let renderer = BadgeRenderer::new();
    assert_eq!(
        renderer.render_readme(&from_fixture).unwrap(),
        renderer.render_readme(&from_temp).unwrap()
    );
}

#[test]
fn rejects_non_github_fixture() {
    let result = generate(fixture("gitlab"));
    assert!(matches!(
        result,
        Err(GeneratorError::Manifest(ManifestError::UnsupportedHost { ref module_path }))
            if module_path == "gitlab.com/clambin/foo"
    ));
}

#[test]
fn rejects_broken_fixture() {
    let result = generate(fixture("broken"));
    assert!(matches!(
        result,
        Err(GeneratorError::Manifest(ManifestError::ParseError { line: 4, .. }))
    ));
}

#[test]
fn reports_missing_manifest() {
    let result = generate(fixture("missing"));
    assert!(matches!(
        result,
        Err(GeneratorError::Manifest(ManifestError::IoError { .. }))
    ));
}
